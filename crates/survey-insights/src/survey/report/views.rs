use serde::Serialize;

use super::super::domain::{AccessDimension, PracticeDimension};
use super::super::scoring::NormalizedScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    Adequate,
    Inadequate,
}

impl AccessStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adequate => "Adequate",
            Self::Inadequate => "Inadequate",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeBar {
    pub dimension: PracticeDimension,
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessSlice {
    pub dimension: AccessDimension,
    pub label: &'static str,
    pub value: u8,
    pub status: AccessStatus,
    pub status_label: &'static str,
}

/// Chart-ready series derived from normalized scores.
#[derive(Debug, Clone, Serialize)]
pub struct ChartViews {
    pub health_practices: Vec<PracticeBar>,
    pub access: Vec<AccessSlice>,
}

impl ChartViews {
    pub fn from_scores(scores: &NormalizedScore) -> Self {
        Self {
            health_practices: practice_chart(scores),
            access: access_chart(scores),
        }
    }
}

pub fn practice_chart(scores: &NormalizedScore) -> Vec<PracticeBar> {
    PracticeDimension::ALL
        .iter()
        .map(|dimension| PracticeBar {
            dimension: *dimension,
            label: dimension.label(),
            score: scores.practice_score(*dimension),
        })
        .collect()
}

pub fn access_chart(scores: &NormalizedScore) -> Vec<AccessSlice> {
    AccessDimension::ALL
        .iter()
        .map(|dimension| {
            let status = if scores.has_access(*dimension) {
                AccessStatus::Adequate
            } else {
                AccessStatus::Inadequate
            };
            AccessSlice {
                dimension: *dimension,
                label: dimension.label(),
                value: u8::from(status == AccessStatus::Adequate),
                status,
                status_label: status.label(),
            }
        })
        .collect()
}
