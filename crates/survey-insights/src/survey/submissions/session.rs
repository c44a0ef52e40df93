use chrono::{DateTime, Utc};

use super::domain::UserId;

/// Header carrying the session token issued by the external auth provider.
pub const SESSION_HEADER: &str = "x-session-id";

/// Maps a session token onto the user it was issued for.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, SessionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no session ID provided")]
    Missing,
    #[error("invalid session")]
    Invalid,
    #[error("session expired")]
    Expired,
}
