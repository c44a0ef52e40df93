use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AccessDimension, PracticeDimension, SurveyResponse};
use super::scoring::{normalize, NormalizedScore};
use super::suggestions::{select_suggestions, SuggestionRecord};

/// Raw answers echoed back for the dimensions the charts are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    pub health_practices: BTreeMap<PracticeDimension, String>,
    pub access_issues: BTreeMap<AccessDimension, String>,
}

impl ResponseSnapshot {
    pub fn capture(response: &SurveyResponse) -> Self {
        let health_practices = PracticeDimension::ALL
            .iter()
            .map(|dimension| {
                let raw = dimension.answer(response).unwrap_or_default();
                (*dimension, raw.to_string())
            })
            .collect();

        let access_issues = AccessDimension::ALL
            .iter()
            .map(|dimension| {
                let raw = dimension.answer(response).unwrap_or_default();
                (*dimension, raw.to_string())
            })
            .collect();

        Self {
            health_practices,
            access_issues,
        }
    }
}

/// Everything derived from a single response: scores, echoed answers and suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub scores: NormalizedScore,
    pub user_responses: ResponseSnapshot,
    pub suggestions: Vec<SuggestionRecord>,
}

pub fn analyze(response: &SurveyResponse) -> AnalyticsResult {
    let scores = normalize(response);
    let suggestions = select_suggestions(response);

    tracing::info!(
        practice_total = scores.practice_total(),
        adequate_access = scores.access_count(),
        suggestions = suggestions.len(),
        "survey analytics computed"
    );

    AnalyticsResult {
        scores,
        user_responses: ResponseSnapshot::capture(response),
        suggestions,
    }
}
