use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::super::analytics::{analyze, AnalyticsResult};
use super::super::domain::SurveyResponse;
use super::super::report::ChartViews;
use super::domain::{SubmissionRecord, SurveyId, UserId};
use super::repository::{RepositoryError, SubmissionRepository};
use super::session::{SessionError, SessionResolver};

/// Service composing session resolution, storage and the analytics engine.
pub struct SurveyService<R, S> {
    repository: Arc<R>,
    sessions: Arc<S>,
}

static SURVEY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_survey_id() -> SurveyId {
    let id = SURVEY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SurveyId(format!("survey-{id:06}"))
}

impl<R, S> SurveyService<R, S>
where
    R: SubmissionRepository + 'static,
    S: SessionResolver + 'static,
{
    pub fn new(repository: Arc<R>, sessions: Arc<S>) -> Self {
        Self {
            repository,
            sessions,
        }
    }

    fn authenticate(&self, token: Option<&str>) -> Result<UserId, SubmissionError> {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::Missing)?;
        let user_id = self.sessions.resolve(token, Utc::now())?;
        Ok(user_id)
    }

    /// Validate and store the caller's survey, replacing any earlier submission.
    pub fn submit(
        &self,
        token: Option<&str>,
        response: SurveyResponse,
    ) -> Result<SubmissionRecord, SubmissionError> {
        let user_id = self.authenticate(token)?;

        let missing = response.missing_identity_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing).into());
        }

        let record = SubmissionRecord {
            survey_id: next_survey_id(),
            user_id,
            submitted_at: Utc::now(),
            response,
        };

        let previous = self.repository.upsert(record.clone())?;
        tracing::info!(
            survey_id = %record.survey_id.0,
            replaced = previous.is_some(),
            "survey submission stored"
        );

        Ok(record)
    }

    /// The caller's current submission, if any.
    pub fn current(
        &self,
        token: Option<&str>,
    ) -> Result<Option<SubmissionRecord>, SubmissionError> {
        let user_id = self.authenticate(token)?;
        Ok(self.repository.fetch_for_user(&user_id)?)
    }

    /// Analytics for the caller's current submission.
    pub fn analytics(&self, token: Option<&str>) -> Result<SurveyAnalytics, SubmissionError> {
        let record = self.current(token)?.ok_or(SubmissionError::NoSurvey)?;
        let analytics = analyze(&record.response);
        let charts = ChartViews::from_scores(&analytics.scores);

        Ok(SurveyAnalytics {
            survey_id: record.survey_id,
            analytics,
            charts,
        })
    }
}

/// Analytics payload returned to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyAnalytics {
    pub survey_id: SurveyId,
    #[serde(flatten)]
    pub analytics: AnalyticsResult,
    pub charts: ChartViews,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no survey found")]
    NoSurvey,
}
