use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TextaugError;
use crate::types::Action;

/// Options fixed at augmenter construction.
///
/// All fields are plain data; injected capabilities (custom tokenizer,
/// warning sink, skip hook) live on [`crate::CharAugmenter`] itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Instance label, echoed in warning events.
    pub name: String,
    /// Mutation kind the downstream augmenter performs.
    pub action: Action,
    /// Tokens shorter than this are never touched at char granularity.
    pub min_char: usize,
    /// Minimum number of characters selected per token.
    pub aug_char_min: usize,
    /// Maximum number of characters selected per token.
    pub aug_char_max: usize,
    /// Proportion of a token's characters to select, in `[0, 1]`.
    pub aug_char_p: f64,
    /// Minimum number of words selected per call.
    pub aug_word_min: usize,
    /// Maximum number of words selected per call.
    pub aug_word_max: usize,
    /// Proportion of the token sequence to select, in `[0, 1]`.
    pub aug_word_p: f64,
    /// Tokens matching any entry exactly are never selected.
    pub stopwords: Vec<String>,
    /// Pattern excluding matching tokens; compiled once at augmenter
    /// construction. Matching is anchored at the start of the token and of
    /// its space-padded variants.
    pub stopwords_regex: Option<String>,
    /// When false, punctuation tokens are excluded from word-level
    /// eligibility.
    pub include_special_char: bool,
    /// Warnings are emitted only when above zero.
    pub verbose: u8,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            name: "char_aug".to_string(),
            action: Action::Substitute,
            min_char: 2,
            aug_char_min: 1,
            aug_char_max: 10,
            aug_char_p: 0.3,
            aug_word_min: 1,
            aug_word_max: 10,
            aug_word_p: 0.3,
            stopwords: Vec::new(),
            stopwords_regex: None,
            include_special_char: true,
            verbose: 0,
        }
    }
}

impl AugmentConfig {
    /// Check bound ordering and proportion ranges.
    pub fn validate(&self) -> Result<(), TextaugError> {
        if !(0.0..=1.0).contains(&self.aug_char_p) {
            return Err(TextaugError::Config(format!(
                "aug_char_p must be within [0, 1], got {}",
                self.aug_char_p
            )));
        }
        if !(0.0..=1.0).contains(&self.aug_word_p) {
            return Err(TextaugError::Config(format!(
                "aug_word_p must be within [0, 1], got {}",
                self.aug_word_p
            )));
        }
        if self.aug_char_min > self.aug_char_max {
            return Err(TextaugError::Config(format!(
                "aug_char_min ({}) exceeds aug_char_max ({})",
                self.aug_char_min, self.aug_char_max
            )));
        }
        if self.aug_word_min > self.aug_word_max {
            return Err(TextaugError::Config(format!(
                "aug_word_min ({}) exceeds aug_word_max ({})",
                self.aug_word_min, self.aug_word_max
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TextaugError> {
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TextaugError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        let config = AugmentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_char, 2);
        assert_eq!(config.aug_word_max, 10);
        assert!(config.include_special_char);
    }

    #[test]
    fn rejects_out_of_range_proportion() {
        let config = AugmentConfig {
            aug_word_p: 1.5,
            ..AugmentConfig::default()
        };
        assert!(matches!(config.validate(), Err(TextaugError::Config(_))));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = AugmentConfig {
            aug_char_min: 5,
            aug_char_max: 2,
            ..AugmentConfig::default()
        };
        assert!(matches!(config.validate(), Err(TextaugError::Config(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AugmentConfig =
            serde_json::from_str(r#"{"aug_word_p": 0.5, "stopwords": ["the"]}"#).unwrap();
        assert_eq!(config.aug_word_p, 0.5);
        assert_eq!(config.stopwords, vec!["the".to_string()]);
        assert_eq!(config.min_char, 2);
    }
}
