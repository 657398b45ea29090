//! Sentence templates ("gabarits")
//!
//! A template is free text in which some whitespace-delimited words carry a
//! tag marking a grammatical slot:
//!
//! ```text
//! Pas de panique ! [v] [n] [a] ne nous empêche pas [d] [m] [a]
//! ```
//!
//! A word containing a tag is replaced as a whole when the template is
//! resolved, so `[a].` loses its trailing period. Tags must own their word.

pub mod lexer;

use std::fmt;

use crate::lexicon::Category;

/// Grammatical slot kinds, in tag-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    /// `[v]` an infinitive
    Verb,
    /// `[n]` a noun of either gender, with its article
    Noun,
    /// `[a]` an adjective agreeing with the last noun
    Adjective,
    /// `[d]` an infinitive introduced by "de" / "d'"
    VerbWithDe,
    /// `[m]` a masculine noun
    Masculine,
    /// `[f]` a feminine noun
    Feminine,
}

impl TagKind {
    pub const ALL: [TagKind; 6] = [
        TagKind::Verb,
        TagKind::Noun,
        TagKind::Adjective,
        TagKind::VerbWithDe,
        TagKind::Masculine,
        TagKind::Feminine,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            TagKind::Verb => "[v]",
            TagKind::Noun => "[n]",
            TagKind::Adjective => "[a]",
            TagKind::VerbWithDe => "[d]",
            TagKind::Masculine => "[m]",
            TagKind::Feminine => "[f]",
        }
    }

    /// The lexicon category a slot of this kind draws from
    pub fn category(self) -> Category {
        match self {
            TagKind::Verb | TagKind::VerbWithDe => Category::Verbs,
            TagKind::Noun => Category::Nouns,
            TagKind::Adjective => Category::Adjectives,
            TagKind::Masculine => Category::MasculineNouns,
            TagKind::Feminine => Category::FeminineNouns,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One whitespace-delimited word of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    /// Copied to the output unchanged
    Literal(String),
    /// Replaced by a resolved word or phrase
    Slot(TagKind),
}

/// A template split into literal words and tag slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    tokens: Vec<TemplateToken>,
}

impl Template {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split_whitespace()
            .map(|word| match lexer::classify(word) {
                Some(kind) => TemplateToken::Slot(kind),
                None => TemplateToken::Literal(word.to_string()),
            })
            .collect();
        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    /// The template text as written in the lexicon
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    /// Tag slots in template order
    pub fn slots(&self) -> impl Iterator<Item = TagKind> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            TemplateToken::Slot(kind) => Some(*kind),
            TemplateToken::Literal(_) => None,
        })
    }

    /// Categories that must be non-empty for this template to resolve
    ///
    /// Prefixes are not listed: whether one is needed depends on the words drawn.
    pub fn required_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for category in self.slots().map(TagKind::category) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
