use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::survey::domain::SurveyResponse;
use crate::survey::submissions::{
    survey_router, RepositoryError, SessionError, SessionResolver, SubmissionRecord,
    SubmissionRepository, SurveyService, UserId,
};

pub(super) const VALID_TOKEN: &str = "session-valid";
pub(super) const OTHER_TOKEN: &str = "session-other";
pub(super) const EXPIRED_TOKEN: &str = "session-expired";

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Identity fields only; every categorical answer left blank.
pub(super) fn identity_only_response() -> SurveyResponse {
    SurveyResponse {
        village_name: "Rampur".to_string(),
        date: "2025-01-15".to_string(),
        student_name: "Asha Verma".to_string(),
        contact_number: "9876543210".to_string(),
        respondent_name: "Meena Devi".to_string(),
        respondent_age: Some(42),
        respondent_occupation: "Farmer".to_string(),
        respondent_contact: "9123456780".to_string(),
        ..SurveyResponse::default()
    }
}

pub(super) fn best_practice_response() -> SurveyResponse {
    SurveyResponse {
        doctor_visits: some("Regularly (once every few months)"),
        common_health_issues: some("Seasonal cough"),
        medicines_available: some("Yes"),
        vaccinations: some("Yes, regularly"),
        hand_washing: some("Always"),
        teeth_brushing: some("After every meal"),
        hygiene_items: some("Yes"),
        travel_hygiene: some("Using hand sanitizer regularly"),
        clean_water_access: some("Yes, always"),
        toilet_facility: some("Private toilet with proper sanitation"),
        waste_disposal: some("Through a formal garbage collection service"),
        community_waste_system: some("Yes"),
        food_cleaning: some("Always"),
        water_purification: some("Boiling"),
        cooking_hygiene: some("Using clean utensils"),
        biggest_hygiene_issue: some("Stagnant water after rains"),
        health_issues_due_hygiene: some("No"),
        surface_disinfection: some("Daily"),
        hygiene_programs_awareness: some("Yes"),
        healthcare_affordability: some("Yes"),
        additional_comments: some("None"),
        ..identity_only_response()
    }
}

pub(super) fn struggling_response() -> SurveyResponse {
    SurveyResponse {
        doctor_visits: some("Rarely (once a year or less)"),
        medicines_available: some("No"),
        hand_washing: some("Never"),
        teeth_brushing: some("Once a day"),
        clean_water_access: some("No, access is very limited"),
        toilet_facility: some("Open defecation"),
        community_waste_system: some("No"),
        water_purification: some("None"),
        surface_disinfection: some("Occasionally"),
        healthcare_affordability: some("No"),
        ..identity_only_response()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<UserId, SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn upsert(
        &self,
        record: SubmissionRecord,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.insert(record.user_id.clone(), record))
    }

    fn fetch_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn upsert(
        &self,
        _record: SubmissionRecord,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct MemorySessions {
    sessions: HashMap<String, (UserId, DateTime<Utc>)>,
}

impl Default for MemorySessions {
    fn default() -> Self {
        let now = Utc::now();
        let mut sessions = HashMap::new();
        sessions.insert(
            VALID_TOKEN.to_string(),
            (UserId("user-1".to_string()), now + Duration::days(7)),
        );
        sessions.insert(
            OTHER_TOKEN.to_string(),
            (UserId("user-2".to_string()), now + Duration::days(7)),
        );
        sessions.insert(
            EXPIRED_TOKEN.to_string(),
            (UserId("user-3".to_string()), now - Duration::hours(1)),
        );
        Self { sessions }
    }
}

impl SessionResolver for MemorySessions {
    fn resolve(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, SessionError> {
        let (user_id, expires_at) = self.sessions.get(token).ok_or(SessionError::Invalid)?;
        if now > *expires_at {
            return Err(SessionError::Expired);
        }
        Ok(user_id.clone())
    }
}

pub(super) fn build_service() -> (
    SurveyService<MemoryRepository, MemorySessions>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let sessions = Arc::new(MemorySessions::default());
    let service = SurveyService::new(repository.clone(), sessions);
    (service, repository)
}

pub(super) fn survey_router_with_service(
    service: SurveyService<MemoryRepository, MemorySessions>,
) -> axum::Router {
    survey_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
