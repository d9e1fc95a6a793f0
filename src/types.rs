use serde::{Deserialize, Serialize};

pub use crate::error::TextaugError;

/// Mutation kind a downstream augmenter applies to the selected positions.
///
/// The base machinery only records the action; performing it is the
/// consumer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Insert,
    Substitute,
    Swap,
    Delete,
}

/// Granularity of index selection.
///
/// `Word` selects over the token sequence of a sentence, `Char` over the
/// character sequence of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Char,
    Word,
}
