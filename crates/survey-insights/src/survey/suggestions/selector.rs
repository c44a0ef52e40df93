use super::super::domain::SurveyResponse;
use super::catalog::{SuggestionRecord, SuggestionRule, SuggestionTemplate};
use super::catalog::{MAINTAIN_GOOD_PRACTICES, RULES};

/// Runs an ordered rule catalog against a response.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionSelector {
    rules: &'static [SuggestionRule],
    fallback: Option<&'static SuggestionTemplate>,
}

impl Default for SuggestionSelector {
    fn default() -> Self {
        Self::new(RULES, Some(&MAINTAIN_GOOD_PRACTICES))
    }
}

impl SuggestionSelector {
    pub fn new(
        rules: &'static [SuggestionRule],
        fallback: Option<&'static SuggestionTemplate>,
    ) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &'static [SuggestionRule] {
        self.rules
    }

    /// Keys of the rules that fire, in catalog order.
    pub fn matching_rules(&self, response: &SurveyResponse) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(response))
            .map(|rule| rule.key)
            .collect()
    }

    pub fn select(&self, response: &SurveyResponse) -> Vec<SuggestionRecord> {
        let mut suggestions: Vec<SuggestionRecord> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(response))
            .map(|rule| rule.template.instantiate())
            .collect();

        if suggestions.is_empty() {
            if let Some(fallback) = self.fallback {
                suggestions.push(fallback.instantiate());
            }
        }

        tracing::debug!(count = suggestions.len(), "selected survey suggestions");
        suggestions
    }
}

pub fn select_suggestions(response: &SurveyResponse) -> Vec<SuggestionRecord> {
    SuggestionSelector::default().select(response)
}
