use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{AccessDimension, PracticeDimension, SurveyResponse};
use super::tables::{adequate_answer, practice_table};

/// Practice ranks and access indicators derived from one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedScore {
    pub practice_scores: BTreeMap<PracticeDimension, u8>,
    pub access_flags: BTreeMap<AccessDimension, bool>,
}

impl NormalizedScore {
    pub fn practice_score(&self, dimension: PracticeDimension) -> u8 {
        self.practice_scores.get(&dimension).copied().unwrap_or(1)
    }

    pub fn has_access(&self, dimension: AccessDimension) -> bool {
        self.access_flags.get(&dimension).copied().unwrap_or(false)
    }

    pub fn practice_total(&self) -> u16 {
        self.practice_scores.values().map(|score| u16::from(*score)).sum()
    }

    pub fn max_practice_total(&self) -> u16 {
        PracticeDimension::ALL
            .iter()
            .map(|dimension| u16::from(practice_table(*dimension).best_rank()))
            .sum()
    }

    pub fn access_count(&self) -> usize {
        self.access_flags.values().filter(|flag| **flag).count()
    }
}

pub fn normalize(response: &SurveyResponse) -> NormalizedScore {
    let mut unrecognized = 0usize;

    let practice_scores = PracticeDimension::ALL
        .iter()
        .map(|dimension| {
            let table = practice_table(*dimension);
            let answer = dimension.answer(response);
            if answer.and_then(|value| table.lookup(value)).is_none() {
                unrecognized += 1;
            }
            (*dimension, table.rank(answer))
        })
        .collect();

    let access_flags = AccessDimension::ALL
        .iter()
        .map(|dimension| {
            let adequate = dimension.answer(response) == Some(adequate_answer(*dimension));
            (*dimension, adequate)
        })
        .collect();

    tracing::debug!(
        unrecognized_practice_answers = unrecognized,
        "normalized survey response"
    );

    NormalizedScore {
        practice_scores,
        access_flags,
    }
}
