use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use markov_chain_core::{GenerationInput, Generator, Order, StartSeed};

/// Generate pseudo-random text from the word chains of a corpus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file used as corpus
    #[arg(default_value = "data/green-eggs.txt")]
    corpus: PathBuf,

    /// Number of words per chain state (2 = bigram, 3 = trigram)
    #[arg(long, default_value_t = 2)]
    order: usize,

    /// Only start on states whose first word is capitalized
    #[arg(long, conflicts_with = "start")]
    capitalized: bool,

    /// Start from these exact words (as many as the order)
    #[arg(long)]
    start: Option<String>,

    /// Maximum number of words per text, 0 for no limit
    #[arg(long, default_value_t = 500)]
    max_words: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of texts to generate
    #[arg(long, default_value_t = 1)]
    count: usize,
}

impl Args {
    fn generation_input(&self) -> Result<GenerationInput, markov_chain_core::ChainError> {
        let start = match (&self.start, self.capitalized) {
            (Some(words), _) => StartSeed::Custom(words.clone()),
            (None, true) => StartSeed::Capitalized,
            (None, false) => StartSeed::Any,
        };
        let max_words = if self.max_words == 0 { None } else { Some(self.max_words) };
        GenerationInput::new().with_start(start).with_max_words(max_words)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let order = Order::try_from(args.order)?;
    let input = args.generation_input()?;

    // Read the corpus and build its chain table once
    let generator = Generator::from_file(&args.corpus, order)?;
    info!(
        "{} chain from {}: {} states, {} transitions",
        order,
        args.corpus.display(),
        generator.table().len(),
        generator.table().transition_count()
    );

    let mut texts = Vec::with_capacity(args.count);
    match args.seed {
        Some(seed) => {
            debug!("using seed {}", seed);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..args.count {
                texts.push(generator.generate_with(&input, &mut rng)?);
            }
        }
        None => {
            for _ in 0..args.count {
                texts.push(generator.generate(&input)?);
            }
        }
    }

    for text in texts {
        println!("{}", text);
    }

    Ok(())
}
