use proptest::prelude::*;
use textaug::{detokenize, tokenize};

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z0-9]{1,10}", 1..12)
}

proptest! {
    #[test]
    fn plain_words_roundtrip(words in words()) {
        let text = words.join(" ");
        prop_assert_eq!(detokenize(&tokenize(&text)), text);
    }

    #[test]
    fn comma_separated_words_roundtrip(words in words()) {
        let text = words.join(", ");
        prop_assert_eq!(detokenize(&tokenize(&text)), text);
    }

    #[test]
    fn trailing_period_roundtrip(words in words()) {
        let text = format!("{}.", words.join(" "));
        prop_assert_eq!(detokenize(&tokenize(&text)), text);
    }

    #[test]
    fn extra_spaces_normalize_to_single(words in words(), spaces in 2usize..5) {
        let text = words.join(&" ".repeat(spaces));
        prop_assert_eq!(detokenize(&tokenize(&text)), words.join(" "));
    }

    #[test]
    fn tokenize_never_emits_blank_tokens(text in ".{0,60}") {
        for token in tokenize(&text) {
            prop_assert!(!token.trim().is_empty());
        }
    }

    #[test]
    fn detokenize_never_panics(words in proptest::collection::vec(".{0,6}", 0..10)) {
        let _ = detokenize(&words);
    }
}

#[test]
fn hello_world_example() {
    let tokens = tokenize("Hello, world!");
    assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
    assert_eq!(detokenize(&tokens), "Hello, world!");
}

#[test]
fn sentence_with_brackets() {
    let text = "results (see below) follow";
    assert_eq!(detokenize(&tokenize(text)), text);
}

#[test]
fn leading_and_trailing_whitespace_is_dropped() {
    assert_eq!(detokenize(&tokenize("  padded text  ")), "padded text");
}
