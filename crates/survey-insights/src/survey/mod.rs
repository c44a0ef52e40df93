//! Community health and hygiene survey analytics.
//!
//! Raw answers flow one way: `scoring` turns them into ordinal practice ranks and
//! access flags, `suggestions` runs the rule catalog over the same answers, and
//! `analytics::analyze` bundles both. Neither step can fail: unknown or missing
//! answers score as the worst option and never trigger a rule unless the rule
//! explicitly asks for it.

pub mod analytics;
pub mod domain;
pub mod report;
pub mod scoring;
pub mod submissions;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use analytics::{analyze, AnalyticsResult, ResponseSnapshot};
pub use domain::{AccessDimension, PracticeDimension, SurveyResponse};
pub use scoring::{normalize, NormalizedScore};
pub use suggestions::{select_suggestions, SuggestionCategory, SuggestionRecord};
