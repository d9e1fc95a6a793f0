use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use textaug::{augmentation_count, AugmentConfig, CharAugmenter, Granularity};

proptest! {
    #[test]
    fn selection_is_bounded_subset(
        tokens in proptest::collection::vec("[a-z]{1,8}", 1..20),
        min in 0usize..5,
        span in 0usize..10,
        proportion in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let max = min + span;
        let aug = CharAugmenter::new(AugmentConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = aug
            .select_indices_with_rng(&tokens, min, max, proportion, Granularity::Word, &mut rng)
            .expect("all tokens eligible under the default config");
        prop_assert!(picked.len() <= max.min(tokens.len()));
        for idx in picked {
            prop_assert!(idx < tokens.len());
        }
    }

    #[test]
    fn count_never_exceeds_bounds(size in 0usize..200, min in 0usize..5, span in 0usize..10, p in 0.0f64..1.0) {
        let max = min + span;
        let count = augmentation_count(size, min, max, p);
        prop_assert!(count >= min.min(max));
        prop_assert!(count <= max);
    }

    #[test]
    fn all_stopwords_yield_nothing(
        tokens in proptest::collection::vec("[a-z]{1,8}", 1..10),
        seed in any::<u64>(),
    ) {
        let aug = CharAugmenter::new(AugmentConfig {
            stopwords: tokens.clone(),
            ..AugmentConfig::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let picked =
            aug.select_indices_with_rng(&tokens, 1, 10, 0.3, Granularity::Word, &mut rng);
        prop_assert_eq!(picked, None);
    }
}

#[test]
fn worked_count_example() {
    // proportion 0.3 over 20 tokens, bounds [1, 10].
    assert_eq!(augmentation_count(20, 1, 10, 0.3), 6);
}

#[test]
fn selection_is_deterministic_for_a_fixed_seed() {
    let tokens: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let aug = CharAugmenter::new(AugmentConfig::default()).unwrap();
    let mut rng1 = StdRng::seed_from_u64(99);
    let mut rng2 = StdRng::seed_from_u64(99);
    let first =
        aug.select_indices_with_rng(&tokens, 1, 10, 0.6, Granularity::Word, &mut rng1);
    let second =
        aug.select_indices_with_rng(&tokens, 1, 10, 0.6, Granularity::Word, &mut rng2);
    assert_eq!(first, second);
}
