use chrono::{DateTime, Duration, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use survey_insights::survey::submissions::{
    RepositoryError, SessionError, SessionResolver, SubmissionRecord, SubmissionRepository, UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<UserId, SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn upsert(
        &self,
        record: SubmissionRecord,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository lock poisoned".to_string()))?;
        Ok(guard.insert(record.user_id.clone(), record))
    }

    fn fetch_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository lock poisoned".to_string()))?;
        Ok(guard.get(user_id).cloned())
    }
}

#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

/// Process-local session table. Sessions issued here stand in for the external auth provider.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl InMemorySessionStore {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub(crate) fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> String {
        let sequence = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let token = format!("session-{}-{sequence:04}", now.timestamp());
        let entry = SessionEntry {
            user_id,
            expires_at: now + self.ttl,
        };
        let mut guard = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.retain(|_, existing| existing.expires_at >= now);
        guard.insert(token.clone(), entry);
        token
    }
}

impl SessionResolver for InMemorySessionStore {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, SessionError> {
        let mut guard = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let entry = guard.get(token).cloned().ok_or(SessionError::Invalid)?;
        if now > entry.expires_at {
            guard.remove(token);
            return Err(SessionError::Expired);
        }
        Ok(entry.user_id)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
