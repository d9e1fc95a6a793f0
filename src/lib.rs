//! Base machinery for character-level text augmentation.
//!
//! The crate splits text into word and punctuation tokens, decides which
//! token positions a downstream augmenter may mutate, and rebuilds text from
//! a token sequence. Selection is configuration driven: count/proportion
//! bounds, stopword lists and patterns, punctuation handling, and a minimum
//! token length for character-granularity work. Performing the actual
//! insert/substitute/swap/delete is the consumer's job.

pub mod augmenter;
pub mod config;
pub mod error;
pub mod filter;
pub mod sample;
pub mod text;
pub mod tokenizer;
pub mod types;
pub mod warning;

pub use augmenter::{CharAugmenter, SkipHook};
pub use config::AugmentConfig;
pub use error::TextaugError;
pub use filter::{eligible_indices, eligible_indices_with, is_punctuation};
pub use sample::{augmentation_count, sample_indices};
pub use text::{clean, is_duplicate};
pub use tokenizer::{detokenize, token_to_chars, tokenize, DetokenizerFn, TokenizerFn};
pub use types::{Action, Granularity};
pub use warning::{Warning, WarningKind, WarningSink};
