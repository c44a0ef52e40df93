mod catalog;
mod selector;

pub use catalog::{
    SuggestionCategory, SuggestionRecord, SuggestionRule, SuggestionTemplate,
    MAINTAIN_GOOD_PRACTICES, RULES,
};
pub use selector::{select_suggestions, SuggestionSelector};
