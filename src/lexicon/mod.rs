//! Lexicon store and loader
//!
//! A lexicon file lists verbs, adjectives, nouns, prefixes and sentence
//! templates, one entry per line, grouped under section headers:
//!
//! ```text
//! [Verbes]
//! phaser, 0
//! [Adjectifs]
//! temporel, temporelle, 0
//! [Noms]
//! multiplexeur, 1, 2
//! [Prefix]
//! bi
//! [Gabarits]
//! "Il faut [v] [n] [a] !"
//! ```
//!
//! Lines containing `#` are comments. Once loaded, a [`Lexicon`] is never
//! mutated and can be shared freely between generators.

pub mod entry;
mod loader;
mod row;

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::error::FormatError;
use crate::template::Template;

pub use entry::{AdjectiveEntry, Gender, NounEntry, PrefixEntry, PrefixMode, Section, VerbEntry};

/// Errors that can occur when loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed lexicon: {0}")]
    Format(#[from] FormatError),
}

/// A group of entries a template slot draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Verbs,
    Adjectives,
    Nouns,
    MasculineNouns,
    FeminineNouns,
    Prefixes,
    Templates,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Verbs => "verbs",
            Category::Adjectives => "adjectives",
            Category::Nouns => "nouns",
            Category::MasculineNouns => "masculine nouns",
            Category::FeminineNouns => "feminine nouns",
            Category::Prefixes => "prefixes",
            Category::Templates => "templates",
        };
        f.write_str(name)
    }
}

/// All entries of one lexicon file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    verbs: Vec<VerbEntry>,
    adjectives: Vec<AdjectiveEntry>,
    nouns: Vec<NounEntry>,
    prefixes: Vec<PrefixEntry>,
    templates: Vec<Template>,
    /// Indices into `nouns`, partitioned by gender
    masculine: Vec<usize>,
    feminine: Vec<usize>,
}

impl Lexicon {
    /// Load a lexicon from a file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::from_str(&content)?;
        log::info!("{}: {}", path.display(), lexicon.summary());
        Ok(lexicon)
    }

    /// Load a lexicon from its text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Result<Self, FormatError> {
        let lexicon = loader::load(source)?;
        log::debug!("lexicon loaded: {}", lexicon.summary());
        Ok(lexicon)
    }

    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    pub fn adjectives(&self) -> &[AdjectiveEntry] {
        &self.adjectives
    }

    pub fn nouns(&self) -> &[NounEntry] {
        &self.nouns
    }

    pub fn prefixes(&self) -> &[PrefixEntry] {
        &self.prefixes
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Positions in [`Lexicon::nouns`] of the nouns of one gender
    pub fn noun_indices(&self, gender: Gender) -> &[usize] {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
        }
    }

    /// Nouns of one gender, in file order
    pub fn nouns_of(&self, gender: Gender) -> impl Iterator<Item = &NounEntry> + '_ {
        self.noun_indices(gender).iter().map(|&i| &self.nouns[i])
    }

    /// Number of entries available in a category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Verbs => self.verbs.len(),
            Category::Adjectives => self.adjectives.len(),
            Category::Nouns => self.nouns.len(),
            Category::MasculineNouns => self.masculine.len(),
            Category::FeminineNouns => self.feminine.len(),
            Category::Prefixes => self.prefixes.len(),
            Category::Templates => self.templates.len(),
        }
    }

    pub fn summary(&self) -> LexiconSummary {
        LexiconSummary {
            verbs: self.verbs.len(),
            adjectives: self.adjectives.len(),
            nouns: self.nouns.len(),
            prefixes: self.prefixes.len(),
            templates: self.templates.len(),
        }
    }

    /// Add a verb
    pub fn with_verb(mut self, verb: VerbEntry) -> Self {
        self.verbs.push(verb);
        self
    }

    /// Add an adjective
    pub fn with_adjective(mut self, adjective: AdjectiveEntry) -> Self {
        self.adjectives.push(adjective);
        self
    }

    /// Add a noun
    pub fn with_noun(mut self, noun: NounEntry) -> Self {
        self.push_noun(noun);
        self
    }

    /// Add a prefix
    pub fn with_prefix(mut self, prefix: PrefixEntry) -> Self {
        self.prefixes.push(prefix);
        self
    }

    /// Add a template
    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    fn push_noun(&mut self, noun: NounEntry) {
        let index = self.nouns.len();
        match noun.gender {
            Gender::Masculine => self.masculine.push(index),
            Gender::Feminine => self.feminine.push(index),
        }
        self.nouns.push(noun);
    }
}

/// Entry counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconSummary {
    pub verbs: usize,
    pub adjectives: usize,
    pub nouns: usize,
    pub prefixes: usize,
    pub templates: usize,
}

impl fmt::Display for LexiconSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} verbe(s), {} adjectif(s), {} nom(s), {} prefixe(s), {} gabarit(s)",
            self.verbs, self.adjectives, self.nouns, self.prefixes, self.templates
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_partition_keeps_file_order() {
        let lexicon = Lexicon::default()
            .with_noun(NounEntry::new("flux", Gender::Masculine, PrefixMode::Never))
            .with_noun(NounEntry::new("bobine", Gender::Feminine, PrefixMode::Never))
            .with_noun(NounEntry::new("champ", Gender::Masculine, PrefixMode::Never));

        assert_eq!(lexicon.noun_indices(Gender::Masculine), &[0, 2]);
        assert_eq!(lexicon.noun_indices(Gender::Feminine), &[1]);
        let masculine: Vec<_> = lexicon
            .nouns_of(Gender::Masculine)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(masculine, vec!["flux", "champ"]);
        assert_eq!(lexicon.count(Category::FeminineNouns), 1);
        assert_eq!(lexicon.count(Category::Nouns), 3);
    }

    #[test]
    fn test_summary_display() {
        let lexicon = Lexicon::default()
            .with_verb(VerbEntry::new("phaser", PrefixMode::Never))
            .with_prefix(PrefixEntry::new("bi"));
        assert_eq!(
            lexicon.summary().to_string(),
            "1 verbe(s), 0 adjectif(s), 0 nom(s), 1 prefixe(s), 0 gabarit(s)"
        );
    }

    #[test]
    fn test_format_error_converts() {
        let err: LexiconError = Lexicon::from_str("[Verbes]\nphaser\n")
            .expect_err("missing mode")
            .into();
        assert!(matches!(err, LexiconError::Format(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Lexicon::from_file(Path::new("/nonexistent/corvo/space.txt"))
            .expect_err("file does not exist");
        assert!(matches!(err, LexiconError::Io(_)));
    }
}
