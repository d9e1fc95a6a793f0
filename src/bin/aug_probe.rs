use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use textaug::{token_to_chars, AugmentConfig, CharAugmenter, Granularity};

/// Inspect tokenization and index selection for a piece of text.
#[derive(Parser)]
struct Args {
    /// Text to probe
    text: String,
    /// JSON configuration file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also show char-granularity selection for each eligible token
    #[arg(long)]
    chars: bool,
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AugmentConfig::load(path)?,
        None => AugmentConfig::default(),
    };
    let aug = CharAugmenter::new(config)?;

    let tokens = aug.tokenize(&args.text);
    println!("tokens ({}):", tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        println!("  [{idx}] {token}");
    }
    println!("detokenized: {}", aug.detokenize(&tokens));

    let eligible = aug.eligible_indices(&tokens);
    println!("eligible word indices: {eligible:?}");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cfg = aug.config();
    let picked = aug.select_indices_with_rng(
        &tokens,
        cfg.aug_word_min,
        cfg.aug_word_max,
        cfg.aug_word_p,
        Granularity::Word,
        &mut rng,
    );
    println!("selected word indices: {}", render(picked));

    if args.chars {
        for &idx in &eligible {
            let chars = token_to_chars(&tokens[idx]);
            let picked = aug.select_indices_with_rng(
                &chars,
                cfg.aug_char_min,
                cfg.aug_char_max,
                cfg.aug_char_p,
                Granularity::Char,
                &mut rng,
            );
            println!("  [{idx}] {}: {}", tokens[idx], render(picked));
        }
    }

    Ok(())
}

fn render(picked: Option<std::collections::HashSet<usize>>) -> String {
    match picked {
        Some(set) => {
            let mut sorted: Vec<usize> = set.into_iter().collect();
            sorted.sort_unstable();
            format!("{sorted:?}")
        }
        None => "none".to_string(),
    }
}
