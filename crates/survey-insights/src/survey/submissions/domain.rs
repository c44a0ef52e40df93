use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::SurveyResponse;

/// Identifier of an authenticated respondent account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier of a stored survey submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyId(pub String);

/// The current submission for a user. A resubmission replaces it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "id")]
    pub survey_id: SurveyId,
    pub user_id: UserId,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub response: SurveyResponse,
}
