use std::fmt::Write;

use chrono::NaiveDate;

use super::super::analytics::AnalyticsResult;
use super::super::domain::SurveyResponse;
use super::views::{access_chart, practice_chart};

const NOT_ANSWERED: &str = "Not answered";

fn or_placeholder(value: Option<&str>) -> &str {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .unwrap_or(NOT_ANSWERED)
}

/// Plain-text participant report, suitable for download or terminal output.
pub fn render_text_report(
    response: &SurveyResponse,
    analytics: &AnalyticsResult,
    generated_on: NaiveDate,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "COMMUNITY SERVICE PROJECT REPORT");
    let _ = writeln!(out, "================================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Participant Information:");
    let _ = writeln!(out, "- Village: {}", or_placeholder(Some(response.village_name.as_str())));
    let _ = writeln!(out, "- Student: {}", or_placeholder(Some(response.student_name.as_str())));
    let _ = writeln!(out, "- Date: {}", or_placeholder(Some(response.date.as_str())));
    let _ = writeln!(out);

    let _ = writeln!(out, "Survey Responses Summary:");
    let summary = [
        ("Doctor Visits", response.doctor_visits.as_deref()),
        ("Medicine Availability", response.medicines_available.as_deref()),
        ("Clean Water Access", response.clean_water_access.as_deref()),
        (
            "Healthcare Affordability",
            response.healthcare_affordability.as_deref(),
        ),
    ];
    for (label, value) in summary {
        let _ = writeln!(out, "- {label}: {}", or_placeholder(value));
    }
    let _ = writeln!(out);

    let scores = &analytics.scores;
    let _ = writeln!(
        out,
        "Health Practices Score ({}/{}):",
        scores.practice_total(),
        scores.max_practice_total()
    );
    for bar in practice_chart(scores) {
        let _ = writeln!(out, "- {}: {}/4", bar.label, bar.score);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Access to Resources:");
    for slice in access_chart(scores) {
        let _ = writeln!(out, "- {}: {}", slice.label, slice.status_label);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Personalized Suggestions:");
    for suggestion in &analytics.suggestions {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", suggestion.category.label(), suggestion.title);
        let _ = writeln!(out, "{}", suggestion.suggestion);
        let _ = writeln!(out, "Resources: {}", suggestion.resources.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated on: {}", generated_on.format("%Y-%m-%d"));

    out
}
