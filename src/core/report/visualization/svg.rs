//! Inline SVG for the HTML report: the GPA trend chart and the CGPA gauge

use crate::core::grading::{ScoreBand, MAX_POINTS};
use crate::core::models::GpaSnapshot;
use std::f64::consts::PI;
use std::fmt::Write;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;
const CHART_PADDING: f64 = 40.0;

const GAUGE_SIZE: f64 = 160.0;
const GAUGE_RADIUS: f64 = 64.0;
const GAUGE_STROKE: f64 = 14.0;

/// Generator for inline SVG charts
pub struct SvgGenerator;

impl SvgGenerator {
    /// Circular progress ring showing the CGPA as a fraction of 5.0, colored
    /// by its band
    #[must_use]
    pub fn generate_gauge(cgpa: f64) -> String {
        let center = GAUGE_SIZE / 2.0;
        let circumference = 2.0 * PI * GAUGE_RADIUS;
        let fraction = (cgpa / MAX_POINTS).clamp(0.0, 1.0);
        let offset = circumference * (1.0 - fraction);
        let color = ScoreBand::from_points(cgpa).color();

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg class=\"gauge\" width=\"{GAUGE_SIZE}\" height=\"{GAUGE_SIZE}\" viewBox=\"0 0 {GAUGE_SIZE} {GAUGE_SIZE}\" role=\"img\" aria-label=\"CGPA {cgpa:.2} of {MAX_POINTS:.2}\">"
        );
        let _ = writeln!(
            svg,
            "  <circle cx=\"{center}\" cy=\"{center}\" r=\"{GAUGE_RADIUS}\" fill=\"none\" stroke=\"#e5e7eb\" stroke-width=\"{GAUGE_STROKE}\"/>"
        );
        let _ = writeln!(
            svg,
            "  <circle cx=\"{center}\" cy=\"{center}\" r=\"{GAUGE_RADIUS}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{GAUGE_STROKE}\" stroke-linecap=\"round\" stroke-dasharray=\"{circumference:.2}\" stroke-dashoffset=\"{offset:.2}\" transform=\"rotate(-90 {center} {center})\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{center}\" y=\"{center}\" text-anchor=\"middle\" dominant-baseline=\"central\" class=\"gauge-value\">{cgpa:.2}</text>"
        );
        svg.push_str("</svg>\n");
        svg
    }

    /// Line chart of semester GPAs with a dashed CGPA line
    ///
    /// Returns `None` when there is no history to plot.
    #[must_use]
    pub fn generate_trend_chart(history: &[GpaSnapshot]) -> Option<String> {
        if history.is_empty() {
            return None;
        }

        let points: Vec<(f64, f64)> = history
            .iter()
            .enumerate()
            .map(|(i, p)| (Self::x_at(i, history.len()), Self::y_at(p.gpa)))
            .collect();

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg class=\"trend\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" role=\"img\" aria-label=\"GPA trend\">"
        );
        Self::write_grid(&mut svg);

        if let Some(last) = history.last() {
            let y = Self::y_at(last.cgpa);
            let _ = writeln!(
                svg,
                "  <line class=\"cgpa-line\" x1=\"{CHART_PADDING}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#6366f1\" stroke-dasharray=\"6 4\"/>",
                CHART_WIDTH - CHART_PADDING
            );
        }

        let path: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect();
        let _ = writeln!(
            svg,
            "  <polyline class=\"gpa-line\" fill=\"none\" stroke=\"#0f766e\" stroke-width=\"2\" points=\"{}\"/>",
            path.join(" ")
        );

        for ((x, y), snapshot) in points.iter().zip(history) {
            let color = ScoreBand::from_points(snapshot.gpa).color();
            let label = escape_xml(&snapshot.semester);
            let _ = writeln!(
                svg,
                "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"5\" fill=\"{color}\"><title>{label}: {:.2}</title></circle>",
                snapshot.gpa
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"axis-label\">{label}</text>",
                CHART_HEIGHT - CHART_PADDING / 3.0
            );
        }

        svg.push_str("</svg>\n");
        Some(svg)
    }

    fn write_grid(svg: &mut String) {
        let right = CHART_WIDTH - CHART_PADDING;
        for step in 0..=5_u8 {
            let value = f64::from(step);
            let y = Self::y_at(value);
            let _ = writeln!(
                svg,
                "  <line x1=\"{CHART_PADDING}\" y1=\"{y:.1}\" x2=\"{right:.1}\" y2=\"{y:.1}\" stroke=\"#e5e7eb\"/>"
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{y:.1}\" text-anchor=\"end\" dominant-baseline=\"central\" class=\"axis-label\">{step}</text>",
                CHART_PADDING - 8.0
            );
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn x_at(index: usize, count: usize) -> f64 {
        let span = CHART_WIDTH - 2.0 * CHART_PADDING;
        if count <= 1 {
            CHART_PADDING + span / 2.0
        } else {
            CHART_PADDING + span * index as f64 / (count - 1) as f64
        }
    }

    fn y_at(points: f64) -> f64 {
        let span = CHART_HEIGHT - 2.0 * CHART_PADDING;
        let fraction = (points / MAX_POINTS).clamp(0.0, 1.0);
        CHART_PADDING + span * (1.0 - fraction)
    }
}

/// Escape text for inclusion in HTML or SVG markup
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
