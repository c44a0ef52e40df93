use super::common::*;
use crate::survey::domain::{AccessDimension, PracticeDimension, SurveyResponse};
use crate::survey::scoring::{normalize, practice_table, LOWEST_RANK};

fn with_practice_answer(dimension: PracticeDimension, value: &str) -> SurveyResponse {
    let mut response = SurveyResponse::default();
    let slot = match dimension {
        PracticeDimension::DoctorVisits => &mut response.doctor_visits,
        PracticeDimension::HandWashing => &mut response.hand_washing,
        PracticeDimension::TeethBrushing => &mut response.teeth_brushing,
        PracticeDimension::WaterPurification => &mut response.water_purification,
        PracticeDimension::SurfaceDisinfection => &mut response.surface_disinfection,
    };
    *slot = Some(value.to_string());
    response
}

#[test]
fn every_documented_option_maps_to_its_rank() {
    let expectations: [(PracticeDimension, [(&str, u8); 4]); 5] = [
        (
            PracticeDimension::DoctorVisits,
            [
                ("Never", 1),
                ("Rarely (once a year or less)", 2),
                ("Occasionally (only when needed)", 3),
                ("Regularly (once every few months)", 4),
            ],
        ),
        (
            PracticeDimension::HandWashing,
            [("Never", 1), ("Rarely", 2), ("Sometimes", 3), ("Always", 4)],
        ),
        (
            PracticeDimension::TeethBrushing,
            [
                ("Only when I remember", 1),
                ("Once a day", 2),
                ("Twice a day", 3),
                ("After every meal", 4),
            ],
        ),
        (
            PracticeDimension::WaterPurification,
            [
                ("None", 1),
                ("Using purification tablets", 2),
                ("Filtering", 3),
                ("Boiling", 4),
            ],
        ),
        (
            PracticeDimension::SurfaceDisinfection,
            [("Never", 1), ("Occasionally", 2), ("Weekly", 3), ("Daily", 4)],
        ),
    ];

    for (dimension, options) in expectations {
        for (answer, rank) in options {
            let scores = normalize(&with_practice_answer(dimension, answer));
            assert_eq!(
                scores.practice_score(dimension),
                rank,
                "{dimension:?} answer {answer:?}"
            );
        }
        assert_eq!(practice_table(dimension).best_rank(), 4);
    }
}

#[test]
fn unrecognized_practice_answers_fall_back_to_lowest_rank() {
    for dimension in PracticeDimension::ALL {
        for answer in ["", "   ", "always", "Regularly", "N/A", "Daily!"] {
            let scores = normalize(&with_practice_answer(dimension, answer));
            assert_eq!(
                scores.practice_score(dimension),
                LOWEST_RANK,
                "{dimension:?} answer {answer:?}"
            );
        }
    }
}

#[test]
fn padded_answers_are_not_recognized() {
    let scores = normalize(&with_practice_answer(
        PracticeDimension::HandWashing,
        "Always\n",
    ));
    assert_eq!(scores.practice_score(PracticeDimension::HandWashing), LOWEST_RANK);

    let mut response = SurveyResponse::default();
    response.healthcare_affordability = Some(" Yes ".to_string());
    response.medicines_available = Some("Yes\n".to_string());
    let scores = normalize(&response);
    assert!(!scores.has_access(AccessDimension::HealthcareAffordability));
    assert!(!scores.has_access(AccessDimension::MedicinesAvailable));
}

#[test]
fn access_flags_require_the_fully_adequate_answer() {
    let mut response = SurveyResponse::default();
    response.medicines_available = Some("Yes".to_string());
    response.clean_water_access = Some("Yes, but occasionally unavailable".to_string());
    response.community_waste_system = Some("yes".to_string());
    response.healthcare_affordability = Some("Sometimes".to_string());

    let scores = normalize(&response);

    assert!(scores.has_access(AccessDimension::MedicinesAvailable));
    assert!(!scores.has_access(AccessDimension::CleanWaterAccess));
    assert!(!scores.has_access(AccessDimension::CommunityWasteSystem));
    assert!(!scores.has_access(AccessDimension::HealthcareAffordability));
    assert_eq!(scores.access_count(), 1);
}

#[test]
fn best_practice_response_scores_at_the_top() {
    let scores = normalize(&best_practice_response());

    for dimension in PracticeDimension::ALL {
        assert_eq!(scores.practice_score(dimension), 4, "{dimension:?}");
    }
    for dimension in AccessDimension::ALL {
        assert!(scores.has_access(dimension), "{dimension:?}");
    }
    assert_eq!(scores.practice_total(), scores.max_practice_total());
    assert_eq!(scores.max_practice_total(), 20);
}

#[test]
fn empty_response_scores_at_the_bottom() {
    let scores = normalize(&SurveyResponse::default());

    assert_eq!(scores.practice_scores.len(), PracticeDimension::ALL.len());
    assert!(scores.practice_scores.values().all(|score| *score == 1));
    assert_eq!(scores.access_flags.len(), AccessDimension::ALL.len());
    assert!(scores.access_flags.values().all(|flag| !flag));
}

#[test]
fn normalize_is_deterministic() {
    let response = struggling_response();
    assert_eq!(normalize(&response), normalize(&response));
}

#[test]
fn scores_serialize_with_field_names() {
    let scores = normalize(&best_practice_response());
    let payload = serde_json::to_value(&scores).expect("scores serialize");

    assert_eq!(payload["practice_scores"]["doctor_visits"], 4);
    assert_eq!(payload["practice_scores"]["surface_disinfection"], 4);
    assert_eq!(payload["access_flags"]["clean_water_access"], true);
}
