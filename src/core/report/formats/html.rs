//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS and inline SVG: a
//! CGPA progress ring, a classification badge, the GPA trend chart and one
//! table per semester with color-banded grade badges.

use crate::core::get_version;
use crate::core::grading::{ScoreBand, MAX_POINTS};
use crate::core::models::Semester;
use crate::core::report::visualization::{escape_xml, SvgGenerator};
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let best = ctx.best_semester().map_or_else(
            || "N/A".to_string(),
            |s| format!("{} ({:.2})", escape_xml(&s.name), s.gpa),
        );
        let chart = SvgGenerator::generate_trend_chart(&ctx.record.gpa_history)
            .unwrap_or_else(|| "<p class=\"empty\">No semesters to chart yet.</p>\n".to_string());

        fill_template(
            HTML_TEMPLATE,
            &[
                ("title", escape_xml(ctx.title)),
                ("version", get_version().to_string()),
                ("band_color", ctx.band().color().to_string()),
                ("gauge", SvgGenerator::generate_gauge(ctx.cgpa())),
                ("classification", ctx.classification().label().to_string()),
                ("cgpa", format!("{:.2}", ctx.cgpa())),
                ("max_points", format!("{MAX_POINTS:.2}")),
                ("total_units", ctx.total_units().to_string()),
                ("graded_units", ctx.graded_units().to_string()),
                ("semester_count", ctx.semester_count().to_string()),
                ("course_count", ctx.course_count().to_string()),
                ("best_semester", best),
                ("trend_chart", chart),
                ("semester_tables", Self::generate_semester_tables(ctx)),
            ],
        )
    }

    /// One table per semester
    fn generate_semester_tables(ctx: &ReportContext) -> String {
        if ctx.record.semesters.is_empty() {
            return "<p class=\"empty\">No semesters yet.</p>\n".to_string();
        }

        let mut html = String::new();
        for semester in &ctx.record.semesters {
            Self::generate_semester_table(semester, &mut html);
        }
        html
    }

    fn generate_semester_table(semester: &Semester, html: &mut String) {
        let band = ScoreBand::from_points(semester.gpa);
        let _ = writeln!(
            html,
            "    <h3>{} <span class=\"badge {}\">{:.2}</span></h3>",
            escape_xml(&semester.name),
            band.css_class(),
            semester.gpa
        );

        if semester.courses.is_empty() {
            html.push_str("    <p class=\"empty\">No courses.</p>\n");
            return;
        }

        html.push_str("    <table>\n");
        html.push_str(
            "      <thead><tr><th>Course</th><th>Grade</th><th>Units</th><th>Points</th></tr></thead>\n",
        );
        html.push_str("      <tbody>\n");
        for course in &semester.courses {
            let badge = course.grade.map_or_else(
                || "<span class=\"badge unset\">-</span>".to_string(),
                |g| {
                    format!(
                        "<span class=\"badge {}\">{g}</span>",
                        ScoreBand::for_grade(Some(g)).css_class()
                    )
                },
            );
            let points = course
                .weighted_points()
                .map_or_else(|| "-".to_string(), |p| format!("{p:.1}"));
            let _ = writeln!(
                html,
                "        <tr><td>{}</td><td>{badge}</td><td>{}</td><td>{points}</td></tr>",
                escape_xml(&course.title),
                course.unit
            );
        }
        html.push_str("      </tbody>\n");
        html.push_str("    </table>\n");
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
