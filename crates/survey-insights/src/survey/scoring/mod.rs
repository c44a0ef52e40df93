mod normalizer;
mod tables;

pub use normalizer::{normalize, NormalizedScore};
pub use tables::{adequate_answer, practice_table, OptionTable, LOWEST_RANK};
