//! Report command handler
//!
//! Generates record reports in Markdown, HTML or plain text.

use cgpa_calc::config::Config;
use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::report::{reporter_for, ReportContext, ReportFormat, DEFAULT_TITLE};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base name for reports written to the reports directory
const REPORT_FILE_STEM: &str = "cgpa-report";

/// Run the report command.
///
/// # Arguments
/// * `record` - Record to report on
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html, text)
/// * `title` - Optional report heading
/// * `config` - Configuration containing the default reports directory
///
/// # Errors
/// Returns a message if the format is unknown or the report cannot be written.
pub fn run(
    record: &AcademicRecord,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("{e}. Use: markdown, html, or text"))?;

    let output_path = output_file.map_or_else(
        || default_output_path(config, format),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(record, title.unwrap_or(DEFAULT_TITLE));
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Report generation failed for {}: {e}", output_path.display());
            format!("Failed to generate {format} report: {e}")
        })?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    print_summary(&ctx);
    Ok(())
}

/// `<reports_dir>/cgpa-report.<ext>`, or the current directory when no reports
/// directory is configured
fn default_output_path(config: &Config, format: ReportFormat) -> PathBuf {
    let file_name = format!("{REPORT_FILE_STEM}.{}", format.extension());
    if config.paths.reports_dir.is_empty() {
        PathBuf::from(file_name)
    } else {
        PathBuf::from(&config.paths.reports_dir).join(file_name)
    }
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext) {
    println!("\n=== Summary ===");
    println!("CGPA: {:.2} ({})", ctx.cgpa(), ctx.classification());
    println!("Total Units: {}", ctx.total_units());
    println!(
        "Semesters: {} ({} courses)",
        ctx.semester_count(),
        ctx.course_count()
    );
}
