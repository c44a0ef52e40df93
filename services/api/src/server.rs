use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore, InMemorySubmissionRepository};
use crate::routes::with_survey_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use survey_insights::config::AppConfig;
use survey_insights::error::AppError;
use survey_insights::survey::submissions::{SurveyService, UserId};
use survey_insights::telemetry;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let sessions = Arc::new(InMemorySessionStore::new(config.sessions.ttl()));
    if !config.environment.is_production() {
        let token = sessions.issue(UserId("local-volunteer".to_string()), Utc::now());
        warn!(%token, "issued development session; send it as the X-Session-ID header");
    }
    let survey_service = Arc::new(SurveyService::new(repository, sessions));

    let app = with_survey_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "survey insights service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
