use std::fmt::Write;

use chrono::NaiveDate;

use crate::advice::advice_for_label;
use crate::prediction::round_two;

pub const REPORT_MIME_TYPE: &str = "text/plain";

/// `M/D/YYYY`, the way the report prints its dates.
pub fn report_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `paddy-field-analysis-M-D-YYYY.txt`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("paddy-field-analysis-{}.txt", report_date(date).replace('/', "-"))
}

fn write_numbered(out: &mut String, heading: &str, items: &[&str]) {
    let _ = writeln!(out, "{}", heading);
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item);
    }
    out.push('\n');
}

/// Builds the plain-text analysis report. The output depends only on the
/// arguments, so the same inputs on the same date give identical text.
pub fn generate_report(condition: &str, confidence: f64, date: NaiveDate) -> String {
    let advice = advice_for_label(&condition.to_lowercase());
    let date = report_date(date);
    let mut out = String::new();

    out.push_str("SMART PADDY FIELD ANALYSIS REPORT\n");
    out.push_str("================================\n\n");
    let _ = writeln!(out, "Analysis Date: {}", date);
    let _ = writeln!(out, "Field Condition: {}", condition.to_uppercase());
    let _ = writeln!(out, "Confidence Level: {}%\n", round_two(confidence));

    let _ = writeln!(out, "EXPERT RECOMMENDATIONS:\n{}\n", advice.headline);
    write_numbered(&mut out, "IMMEDIATE ACTIONS REQUIRED:", advice.immediate);
    write_numbered(&mut out, "WEEKLY MAINTENANCE TASKS:", advice.weekly);
    write_numbered(&mut out, "MONITORING CHECKLIST:", advice.monitoring);
    if let Some(treatment) = advice.treatment {
        write_numbered(&mut out, "TREATMENT PLAN:", treatment);
    }
    write_numbered(&mut out, "TIMELINE FOR NEXT STEPS:", advice.timeline);

    out.push_str("---\n");
    out.push_str("Generated by Smart Paddy Field AI System\n");
    let _ = write!(out, "Report Date: {}", date);

    out
}
