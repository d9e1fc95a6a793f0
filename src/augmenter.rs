//! Base augmenter: configuration, injected capabilities, and index
//! selection.
//!
//! `CharAugmenter` carries everything shared by character-level augmenters:
//! the tokenizer pair, eligibility filtering, the augmentation-count policy
//! and uniform index sampling. Mutating the selected positions is left to
//! the consumer.

use std::collections::HashSet;

use rand::Rng;
use regex::Regex;

use crate::config::AugmentConfig;
use crate::error::TextaugError;
use crate::filter;
use crate::sample::{augmentation_count, sample_indices};
use crate::tokenizer::{self, DetokenizerFn, TokenizerFn};
use crate::types::Granularity;
use crate::warning::{Warning, WarningSink};

/// Hook applied to char-granularity index sets before sampling.
///
/// Consumers inject mode-specific exclusions here (keep first/last letter
/// intact, skip digits, ...). Identity when absent.
pub type SkipHook = dyn Fn(Vec<usize>, &[String]) -> Vec<usize> + Send + Sync;

/// Shared machinery for character-level augmenters.
///
/// Immutable after construction; safe to share across threads. Sampling uses
/// the calling thread's RNG unless an explicit one is supplied.
pub struct CharAugmenter {
    config: AugmentConfig,
    stopword_pattern: Option<Regex>,
    tokenizer: Option<Box<TokenizerFn>>,
    detokenizer: Option<Box<DetokenizerFn>>,
    skip_hook: Option<Box<SkipHook>>,
    warning_sink: Option<Box<WarningSink>>,
}

impl CharAugmenter {
    /// Build an augmenter, validating the configuration and compiling the
    /// stopword pattern once.
    pub fn new(config: AugmentConfig) -> Result<Self, TextaugError> {
        config.validate()?;
        let stopword_pattern = match &config.stopwords_regex {
            Some(pattern) => Some(Regex::new(pattern)?),
            None => None,
        };
        Ok(Self {
            config,
            stopword_pattern,
            tokenizer: None,
            detokenizer: None,
            skip_hook: None,
            warning_sink: None,
        })
    }

    /// Replace the default tokenizer.
    pub fn with_tokenizer(
        mut self,
        tokenizer: impl Fn(&str) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    /// Replace the default detokenizer.
    pub fn with_detokenizer(
        mut self,
        detokenizer: impl Fn(&[String]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.detokenizer = Some(Box::new(detokenizer));
        self
    }

    /// Install a char-granularity skip hook.
    pub fn with_skip_hook(
        mut self,
        hook: impl Fn(Vec<usize>, &[String]) -> Vec<usize> + Send + Sync + 'static,
    ) -> Self {
        self.skip_hook = Some(Box::new(hook));
        self
    }

    /// Route warning events to `sink` instead of stderr.
    pub fn with_warning_sink(
        mut self,
        sink: impl Fn(&Warning) + Send + Sync + 'static,
    ) -> Self {
        self.warning_sink = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Split text with the injected tokenizer, or the default one.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match &self.tokenizer {
            Some(custom) => custom(text),
            None => tokenizer::tokenize(text),
        }
    }

    /// Rebuild text with the injected detokenizer, or the default one.
    pub fn detokenize(&self, tokens: &[String]) -> String {
        match &self.detokenizer {
            Some(custom) => custom(tokens),
            None => tokenizer::detokenize(tokens),
        }
    }

    /// Ordered word-level positions that survive punctuation and stopword
    /// filtering.
    pub fn eligible_indices(&self, tokens: &[String]) -> Vec<usize> {
        filter::eligible_indices(
            tokens,
            &self.config.stopwords,
            self.stopword_pattern.as_ref(),
            self.config.include_special_char,
        )
    }

    /// Select the positions to mutate, sampling with the thread-local RNG.
    ///
    /// See [`select_indices_with_rng`](Self::select_indices_with_rng) for
    /// the selection rules.
    pub fn select_indices(
        &self,
        tokens: &[String],
        min: usize,
        max: usize,
        proportion: f64,
        granularity: Granularity,
    ) -> Option<HashSet<usize>> {
        self.select_indices_with_rng(tokens, min, max, proportion, granularity, &mut rand::thread_rng())
    }

    /// Select the positions to mutate.
    ///
    /// Char granularity returns `None` outright for tokens shorter than
    /// `min_char`. The target count follows the policy documented on
    /// [`augmentation_count`]; eligibility comes from word-level filtering
    /// or, at char granularity, every position run through the skip hook.
    /// An empty eligible set emits a [`Warning`] and yields `None`; an
    /// eligible set smaller than the target shrinks the target instead of
    /// failing.
    pub fn select_indices_with_rng<R: Rng + ?Sized>(
        &self,
        tokens: &[String],
        min: usize,
        max: usize,
        proportion: f64,
        granularity: Granularity,
        rng: &mut R,
    ) -> Option<HashSet<usize>> {
        if granularity == Granularity::Char && tokens.len() < self.config.min_char {
            return None;
        }

        let mut count = augmentation_count(tokens.len(), min, max, proportion);

        let eligible = match granularity {
            Granularity::Word => self.eligible_indices(tokens),
            Granularity::Char => {
                let all: Vec<usize> = (0..tokens.len()).collect();
                match &self.skip_hook {
                    Some(hook) => hook(all, tokens),
                    None => all,
                }
            }
        };

        if eligible.is_empty() {
            self.warn(&Warning::no_eligible_target(&self.config.name));
            return None;
        }
        if eligible.len() < count {
            count = eligible.len();
        }

        Some(sample_indices(&eligible, count, rng).into_iter().collect())
    }

    /// Word-level selection using the configured word bounds.
    pub fn select_word_indices(&self, tokens: &[String]) -> Option<HashSet<usize>> {
        self.select_indices(
            tokens,
            self.config.aug_word_min,
            self.config.aug_word_max,
            self.config.aug_word_p,
            Granularity::Word,
        )
    }

    /// Char-level selection over one token's characters using the configured
    /// char bounds.
    pub fn select_char_indices(&self, chars: &[String]) -> Option<HashSet<usize>> {
        self.select_indices(
            chars,
            self.config.aug_char_min,
            self.config.aug_char_max,
            self.config.aug_char_p,
            Granularity::Char,
        )
    }

    fn warn(&self, warning: &Warning) {
        if self.config.verbose == 0 {
            return;
        }
        match &self.warning_sink {
            Some(sink) => sink(warning),
            None => eprintln!("{warning}"),
        }
    }
}
