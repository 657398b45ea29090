//! Corvophraseur - random French techno-babble
//!
//! This library loads a lexicon of verbs, adjectives, nouns, prefixes and
//! sentence templates, and fills the templates with randomly drawn words
//! that follow French gender agreement and elision rules.
//!
//! # Example
//!
//! ```rust
//! use corvo::{Generator, Lexicon};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let lexicon = Lexicon::from_str(r#"
//! [Verbes]
//! phaser, 0
//! [Adjectifs]
//! temporel, temporelle, 0
//! [Noms]
//! multiplexeur, 1, 0
//! [Gabarits]
//! "il faut [v] [n] [a]"
//! "#).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sentence = Generator::new(&lexicon).generate(&mut rng).unwrap();
//! assert_eq!(sentence, "il faut phaser le multiplexeur temporel");
//! ```

pub mod error;
pub mod generator;
pub mod lexicon;
pub mod template;

pub use error::FormatError;
pub use generator::{ConfigError, GenerateError, Generator, GeneratorConfig};
pub use lexicon::{Category, Gender, Lexicon, LexiconError, LexiconSummary, PrefixMode};
pub use template::{TagKind, Template};

use rand::Rng;
use thiserror::Error;

/// The science-fiction lexicon shipped with the crate
pub const DEFAULT_LEXICON: &str = include_str!("../data/space.txt");

/// Errors that can occur between lexicon text and a finished sentence
#[derive(Debug, Error)]
pub enum CorvoError {
    /// Error while loading the lexicon
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Error while filling a template
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

impl From<FormatError> for CorvoError {
    fn from(err: FormatError) -> Self {
        CorvoError::Lexicon(LexiconError::Format(err))
    }
}

/// Generate one sentence from lexicon text with the default configuration
///
/// # Example
///
/// ```rust
/// let sentence = corvo::phrase(corvo::DEFAULT_LEXICON).unwrap();
/// assert!(!sentence.is_empty());
/// ```
pub fn phrase(source: &str) -> Result<String, CorvoError> {
    phrase_with_config(source, &GeneratorConfig::default(), &mut rand::thread_rng())
}

/// Generate one sentence from lexicon text with a custom configuration and RNG
pub fn phrase_with_config<R: Rng + ?Sized>(
    source: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<String, CorvoError> {
    let lexicon = Lexicon::from_str(source)?;
    let sentence = Generator::with_config(&lexicon, config.clone()).generate(rng)?;
    Ok(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_lexicon_loads() {
        let lexicon = Lexicon::from_str(DEFAULT_LEXICON).expect("bundled lexicon is valid");
        let summary = lexicon.summary();
        assert!(summary.verbs > 0);
        assert!(summary.adjectives > 0);
        assert!(summary.nouns > 0);
        assert!(summary.prefixes > 0);
        assert!(summary.templates > 0);
    }

    #[test]
    fn test_default_lexicon_always_generates() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let sentence = phrase_with_config(DEFAULT_LEXICON, &GeneratorConfig::default(), &mut rng)
                .expect("every bundled template resolves");
            assert!(!sentence.contains("[v]"));
            assert!(!sentence.contains("[n]"));
        }
    }

    #[test]
    fn test_phrase_format_error() {
        let result = phrase("[Noms]\nmultiplexeur\n");
        assert!(matches!(
            result,
            Err(CorvoError::Lexicon(LexiconError::Format(_)))
        ));
    }

    #[test]
    fn test_phrase_generate_error() {
        let result = phrase("[Gabarits]\n[v]\n");
        assert!(matches!(
            result,
            Err(CorvoError::Generate(GenerateError::EmptyCategory {
                category: Category::Verbs
            }))
        ));
    }
}
