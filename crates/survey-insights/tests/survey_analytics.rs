//! End-to-end checks of the public analytics surface: raw JSON answers in,
//! scores and suggestions out.

use serde_json::json;
use survey_insights::survey::{
    analyze, normalize, select_suggestions, AccessDimension, AnalyticsResult, PracticeDimension,
    SuggestionCategory, SurveyResponse,
};

fn response_from(value: serde_json::Value) -> SurveyResponse {
    serde_json::from_value(value).expect("survey payload deserializes")
}

fn best_practice_payload() -> serde_json::Value {
    json!({
        "village_name": "Rampur",
        "date": "2025-01-15",
        "student_name": "Asha Verma",
        "contact_number": "9876543210",
        "respondent_name": "Meena Devi",
        "respondent_age": 42,
        "respondent_occupation": "Farmer",
        "respondent_contact": "9123456780",
        "doctor_visits": "Regularly (once every few months)",
        "medicines_available": "Yes",
        "hand_washing": "Always",
        "teeth_brushing": "After every meal",
        "clean_water_access": "Yes, always",
        "community_waste_system": "Yes",
        "water_purification": "Boiling",
        "surface_disinfection": "Daily",
        "healthcare_affordability": "Yes"
    })
}

#[test]
fn best_answers_produce_top_scores_and_full_access() {
    let result = analyze(&response_from(best_practice_payload()));

    for dimension in PracticeDimension::ALL {
        assert_eq!(result.scores.practice_scores[&dimension], 4, "{dimension:?}");
    }
    for dimension in AccessDimension::ALL {
        assert!(result.scores.access_flags[&dimension], "{dimension:?}");
    }
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(
        result.suggestions[0].category,
        SuggestionCategory::HealthPromotion
    );
}

#[test]
fn empty_payload_degrades_to_worst_case() {
    let result = analyze(&response_from(json!({})));

    assert!(result.scores.practice_scores.values().all(|score| *score == 1));
    assert!(result.scores.access_flags.values().all(|flag| !flag));
    assert!(!result.suggestions.is_empty());
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.title == "Affordable Healthcare"));
}

#[test]
fn unexpected_answers_never_fail() {
    let response = response_from(json!({
        "doctor_visits": "Every day",
        "hand_washing": "ALWAYS",
        "clean_water_access": "Yes",
        "healthcare_affordability": "Sometimes",
        "additional_comments": "Works at the brick kiln"
    }));

    let scores = normalize(&response);
    assert_eq!(scores.practice_scores[&PracticeDimension::DoctorVisits], 1);
    assert_eq!(scores.practice_scores[&PracticeDimension::HandWashing], 1);
    assert!(!scores.access_flags[&AccessDimension::CleanWaterAccess]);

    let suggestions = select_suggestions(&response);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].category, SuggestionCategory::HealthcareAccess);
}

#[test]
fn analytics_result_round_trips_through_json() {
    let result = analyze(&response_from(best_practice_payload()));

    let encoded = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(encoded["user_responses"]["access_issues"]["clean_water_access"], "Yes, always");
    assert_eq!(encoded["suggestions"][0]["category"], "Health Promotion");

    let decoded: AnalyticsResult = serde_json::from_value(encoded).expect("result deserializes");
    assert_eq!(result, decoded);
}

#[test]
fn analysis_is_repeatable() {
    let response = response_from(json!({
        "medicines_available": "No",
        "toilet_facility": "Open defecation",
        "hand_washing": "Rarely"
    }));

    let first = analyze(&response);
    let second = analyze(&response);
    assert_eq!(first, second);
    let titles: Vec<_> = first.suggestions.iter().map(|s| s.title.clone()).collect();
    assert_eq!(
        titles,
        vec![
            "Medicine Availability",
            "Affordable Healthcare",
            "Toilet Facility",
            "Hand Washing"
        ]
    );
}
