//! Submission storage, session resolution and the HTTP surface around the analytics engine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;

pub use domain::{SubmissionRecord, SurveyId, UserId};
pub use repository::{RepositoryError, SubmissionRepository};
pub use router::survey_router;
pub use service::{SubmissionError, SurveyAnalytics, SurveyService, ValidationError};
pub use session::{SessionError, SessionResolver, SESSION_HEADER};
