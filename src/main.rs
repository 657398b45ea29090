//! Corvophraseur CLI
//!
//! Usage:
//!   corvo [OPTIONS]
//!
//! Options:
//!   -d, --data <FILE>     Lexicon file (bundled space lexicon if omitted)
//!   -r, --repeat <N>      Number of sentences to generate
//!   -s, --seed <SEED>     Seed for reproducible output
//!   -c, --config <FILE>   Generator configuration (TOML format)
//!   -v, --verbose         Increase log verbosity (repeatable)
//!       --summary         Print the lexicon's entry counts
//!   -h, --help            Print help

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use corvo::{Generator, GeneratorConfig, Lexicon, DEFAULT_LEXICON};

#[derive(Parser)]
#[command(name = "corvo")]
#[command(about = "Corvophraseur: random French techno-babble from a lexicon of templates")]
#[command(version)]
struct Cli {
    /// Lexicon file (uses the bundled space lexicon if not provided)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Number of sentences to generate
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    /// Seed for the random generator, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generator configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the number of entries per category to stderr
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };

    // Read lexicon
    let (source, filename) = match &cli.data {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => (DEFAULT_LEXICON.to_string(), "space.txt".to_string()),
    };

    let lexicon = match Lexicon::from_str(&source) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            return ExitCode::FAILURE;
        }
    };
    log::info!("{}: {}", filename, lexicon.summary());
    if cli.summary {
        eprintln!("{}: {}", filename, lexicon.summary());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Each sentence is independent; a failed one does not stop the rest
    let generator = Generator::with_config(&lexicon, config);
    let mut failed = false;
    for _ in 0..cli.repeat {
        match generator.generate(&mut rng) {
            Ok(sentence) => println!("{}", sentence),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
