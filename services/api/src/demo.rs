use crate::infra::{InMemorySessionStore, InMemorySubmissionRepository};
use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use survey_insights::error::AppError;
use survey_insights::survey::report::{practice_chart, render_text_report};
use survey_insights::survey::submissions::{SurveyService, UserId};
use survey_insights::survey::{analyze, SurveyResponse};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON survey response
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the plain-text participant report instead of JSON analytics
    #[arg(long)]
    pub(crate) report: bool,
    /// Date stamped on the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also print the plain-text participant report.
    #[arg(long)]
    pub(crate) report: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        input,
        report,
        today,
    } = args;

    let raw = std::fs::read_to_string(&input)?;
    let response: SurveyResponse = serde_json::from_str(&raw)?;
    let analytics = analyze(&response);

    if report {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        print!("{}", render_text_report(&response, &analytics, today));
    } else {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Community health survey demo");

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let sessions = Arc::new(InMemorySessionStore::new(chrono::Duration::days(7)));
    let token = sessions.issue(UserId("demo-volunteer".to_string()), Utc::now());
    let service = SurveyService::new(repository, sessions);

    let response = demo_survey_response();
    let record = service.submit(Some(token.as_str()), response.clone())?;
    println!(
        "- Stored survey {} for {} at {}",
        record.survey_id.0,
        record.user_id.0,
        record.submitted_at.format("%Y-%m-%d %H:%M UTC")
    );

    let view = service.analytics(Some(token.as_str()))?;
    let scores = &view.analytics.scores;
    println!(
        "- Health practices score {}/{} | adequate access {}/{}",
        scores.practice_total(),
        scores.max_practice_total(),
        scores.access_count(),
        scores.access_flags.len()
    );
    for bar in practice_chart(scores) {
        println!("    - {}: {}", bar.label, bar.score);
    }

    println!("Suggestions:");
    for suggestion in &view.analytics.suggestions {
        println!(
            "  - [{}] {}: {}",
            suggestion.category.label(),
            suggestion.title,
            suggestion.suggestion
        );
    }

    if args.report {
        let today = Local::now().date_naive();
        println!();
        print!(
            "{}",
            render_text_report(&record.response, &view.analytics, today)
        );
    }

    Ok(())
}

fn demo_survey_response() -> SurveyResponse {
    let some = |value: &str| Some(value.to_string());
    SurveyResponse {
        village_name: "Rampur".to_string(),
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        student_name: "Asha Verma".to_string(),
        contact_number: "9876543210".to_string(),
        respondent_name: "Meena Devi".to_string(),
        respondent_age: Some(42),
        respondent_occupation: "Farmer".to_string(),
        respondent_contact: "9123456780".to_string(),
        doctor_visits: some("Occasionally (only when needed)"),
        common_health_issues: some("Fever and diarrhoea during monsoon"),
        medicines_available: some("Yes"),
        vaccinations: some("Sometimes"),
        hand_washing: some("Rarely"),
        teeth_brushing: some("Once a day"),
        hygiene_items: some("Sometimes"),
        travel_hygiene: some("Avoiding touching surfaces unnecessarily"),
        clean_water_access: some("No, we rely on alternative sources"),
        toilet_facility: some("Shared toilet in the neighborhood"),
        waste_disposal: some("Burning waste"),
        community_waste_system: some("No"),
        food_cleaning: some("Occasionally"),
        water_purification: some("Filtering"),
        cooking_hygiene: some("Using clean utensils"),
        biggest_hygiene_issue: some("Open drains near houses"),
        health_issues_due_hygiene: some("Yes"),
        surface_disinfection: some("Weekly"),
        hygiene_programs_awareness: some("No"),
        healthcare_affordability: some("Sometimes"),
        additional_comments: some("Needs a community water filter"),
    }
}
