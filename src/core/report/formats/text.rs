//! Plain-text summary
//!
//! The terminal view of a record. Ids are printed next to every semester and
//! course so they can be passed back to the `semester` and `course` commands.

use crate::core::grading::MAX_POINTS;
use crate::core::models::Course;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_summary(ctx: &ReportContext, out: &mut String) {
        let _ = writeln!(out, "{}", ctx.title);
        let _ = writeln!(out, "{}", "=".repeat(ctx.title.chars().count()));
        let _ = writeln!(
            out,
            "CGPA:           {:.2} / {MAX_POINTS:.2}",
            ctx.cgpa()
        );
        let _ = writeln!(out, "Classification: {}", ctx.classification());
        let _ = writeln!(out, "Total units:    {}", ctx.total_units());
        let _ = writeln!(
            out,
            "Semesters:      {} ({} courses)",
            ctx.semester_count(),
            ctx.course_count()
        );
    }

    fn render_semesters(ctx: &ReportContext, out: &mut String) {
        if ctx.record.semesters.is_empty() {
            out.push_str("\nNo semesters yet.\n");
            return;
        }

        for semester in &ctx.record.semesters {
            let _ = writeln!(
                out,
                "\n[{}] {}  GPA {:.2}  ({} units)",
                semester.id,
                semester.name,
                semester.gpa,
                semester.total_units()
            );
            if semester.courses.is_empty() {
                out.push_str("    (no courses)\n");
            }
            for course in &semester.courses {
                Self::render_course(course, out);
            }
        }
    }

    fn render_course(course: &Course, out: &mut String) {
        let grade = course.grade.map_or("-", |g| g.letter());
        let _ = writeln!(
            out,
            "    [{}] {:<24} {:<2} {:>2} units",
            course.id, course.title, grade, course.unit
        );
    }

    fn render_history(ctx: &ReportContext, out: &mut String) {
        if ctx.record.gpa_history.is_empty() {
            return;
        }
        out.push_str("\nGPA trend\n");
        for point in &ctx.record.gpa_history {
            let _ = writeln!(
                out,
                "    {:<24} GPA {:.2}  CGPA {:.2}",
                point.semester, point.gpa, point.cgpa
            );
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        Self::render_summary(ctx, &mut out);
        Self::render_semesters(ctx, &mut out);
        Self::render_history(ctx, &mut out);
        Ok(out)
    }
}
