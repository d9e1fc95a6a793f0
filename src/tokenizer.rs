//! Default tokenizer and detokenizer.
//!
//! Tokenization splits on non-word characters, keeping each one as a
//! standalone token and dropping whitespace. Detokenization joins with
//! spaces and repairs spacing around punctuation and brackets so that an
//! unmodified token sequence reconstructs the input.

use lazy_static::lazy_static;
use regex::Regex;

/// Custom tokenizer capability, injectable on the augmenter.
pub type TokenizerFn = dyn Fn(&str) -> Vec<String> + Send + Sync;
/// Custom detokenizer capability, injectable on the augmenter.
pub type DetokenizerFn = dyn Fn(&[String]) -> String + Send + Sync;

lazy_static! {
    static ref TOKENIZER_RE: Regex = Regex::new(r"\W").expect("tokenizer pattern");
    /// Cleanup substitutions applied in order after joining tokens.
    static ref DETOKENIZER_RES: [(Regex, &'static str); 4] = [
        // Sentence-ending punctuation followed by a space or quote.
        (
            Regex::new(r#"\s([.,:;?!%]+)([ '"`])"#).expect("detokenizer pattern"),
            "$1$2",
        ),
        // Sentence-ending punctuation at end of string.
        (
            Regex::new(r"\s([.,:;?!%]+)$").expect("detokenizer pattern"),
            "$1",
        ),
        // No space after an opening bracket.
        (
            Regex::new(r"\s([\[({<])\s").expect("detokenizer pattern"),
            " $1",
        ),
        // Space after a closing bracket, none before.
        (
            Regex::new(r"\s([\])}>])\s").expect("detokenizer pattern"),
            "$1 ",
        ),
    ];
}

/// Split text into word and punctuation tokens.
///
/// Every non-word character becomes its own token; entries that are empty
/// after trimming (whitespace separators) are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for sep in TOKENIZER_RE.find_iter(text) {
        if sep.start() > last {
            push_nonblank(&mut tokens, &text[last..sep.start()]);
        }
        push_nonblank(&mut tokens, sep.as_str());
        last = sep.end();
    }
    if last < text.len() {
        push_nonblank(&mut tokens, &text[last..]);
    }
    tokens
}

fn push_nonblank(tokens: &mut Vec<String>, piece: &str) {
    if !piece.trim().is_empty() {
        tokens.push(piece.to_string());
    }
}

/// Rebuild text from a token sequence.
///
/// Inverse of [`tokenize`] up to whitespace normalization: tokens are joined
/// with single spaces, then spacing around punctuation and brackets is
/// repaired and the result trimmed.
pub fn detokenize(tokens: &[String]) -> String {
    let mut text = tokens.join(" ");
    for (pattern, replacement) in DETOKENIZER_RES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.trim().to_string()
}

/// Explode a token into per-character tokens for char-granularity selection.
pub fn token_to_chars(token: &str) -> Vec<String> {
    token.chars().map(String::from).collect()
}
