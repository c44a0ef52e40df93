use super::domain::{SubmissionRecord, UserId};

/// Storage abstraction keyed by user so the service can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    /// Stores the record as the user's current submission, returning the one it replaced.
    fn upsert(&self, record: SubmissionRecord)
        -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn fetch_for_user(&self, user_id: &UserId)
        -> Result<Option<SubmissionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
