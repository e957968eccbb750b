//! Integration smoke tests for `cgpa_calc`

use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::report::{reporter_for, ReportContext, ReportFormat, DEFAULT_TITLE};
use cgpa_calc::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn fresh_record_renders_in_every_format() {
    let record = AcademicRecord::fresh();
    let ctx = ReportContext::new(&record, DEFAULT_TITLE);
    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let output = reporter_for(format).render(&ctx).expect("render");
        assert!(output.contains("Semester 1"), "{format} output names the semester");
        assert!(output.contains("0.00"), "{format} output shows the CGPA");
    }
}
