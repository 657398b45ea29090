//! Sentence generator
//!
//! Picks a template at random and replaces each of its tag slots with a word
//! drawn from the lexicon. Nouns set the gender that following adjectives
//! agree with; the gender starts out masculine for every sentence.
//!
//! A noun slot right after a literal "le" or "la" in the template is emitted
//! without its own article.

mod config;
pub mod grammar;

pub use config::{ConfigError, GeneratorConfig};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::lexicon::{Category, Gender, Lexicon, PrefixMode};
use crate::template::{TagKind, Template, TemplateToken};

/// Errors that can occur while generating a sentence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A slot needs a category the lexicon has no entries for
    #[error("no {category} in the lexicon")]
    EmptyCategory { category: Category },
}

impl GenerateError {
    fn empty(category: Category) -> Self {
        Self::EmptyCategory { category }
    }
}

/// Generates sentences from a borrowed lexicon
///
/// A generator holds no state between sentences; all randomness comes from
/// the `Rng` passed to each call.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    lexicon: &'a Lexicon,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_config(lexicon, GeneratorConfig::default())
    }

    pub fn with_config(lexicon: &'a Lexicon, config: GeneratorConfig) -> Self {
        Self { lexicon, config }
    }

    /// Generate one sentence from a randomly chosen template
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        let template = self
            .lexicon
            .templates()
            .choose(rng)
            .ok_or(GenerateError::empty(Category::Templates))?;
        self.generate_from(template, rng)
    }

    /// Generate one sentence from the given template
    ///
    /// Fails before drawing anything if the template needs an empty category.
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        template: &Template,
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        log::debug!("gabarit: {}", template.raw());

        if let Some(category) = template
            .required_categories()
            .into_iter()
            .find(|c| self.lexicon.count(*c) == 0)
        {
            return Err(GenerateError::empty(category));
        }

        let mut gender = Gender::Masculine;
        let mut words = Vec::with_capacity(template.tokens().len());
        let mut after_article = false;
        for token in template.tokens() {
            match token {
                TemplateToken::Literal(word) => {
                    after_article = grammar::is_article(word);
                    words.push(word.clone());
                }
                TemplateToken::Slot(kind) => {
                    let replacement = self.resolve(*kind, &mut gender, after_article, rng)?;
                    log::trace!("{} -> {}", kind, replacement);
                    words.push(replacement);
                    after_article = false;
                }
            }
        }

        Ok(words.join(" "))
    }

    fn resolve<R: Rng + ?Sized>(
        &self,
        kind: TagKind,
        gender: &mut Gender,
        after_article: bool,
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        match kind {
            TagKind::Verb => self.verb(rng),
            TagKind::VerbWithDe => {
                let verb = self.verb(rng)?;
                Ok(grammar::with_preposition(&verb, &self.config.elision_chars))
            }
            TagKind::Noun | TagKind::Masculine | TagKind::Feminine => {
                let wanted = match kind {
                    TagKind::Masculine => Some(Gender::Masculine),
                    TagKind::Feminine => Some(Gender::Feminine),
                    _ => None,
                };
                let (bare, noun_gender) = self.bare_noun(wanted, rng)?;
                *gender = noun_gender;
                if after_article {
                    Ok(bare)
                } else {
                    Ok(grammar::with_article(
                        &bare,
                        noun_gender,
                        &self.config.elision_chars,
                    ))
                }
            }
            TagKind::Adjective => self.adjective(*gender, rng),
        }
    }

    /// A random infinitive, possibly prefixed
    pub fn verb<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        let verb = self
            .lexicon
            .verbs()
            .choose(rng)
            .ok_or(GenerateError::empty(Category::Verbs))?;
        self.attach_prefix(&verb.infinitive, verb.prefix_mode, rng)
    }

    /// A random noun with its article, and the noun's gender
    ///
    /// With `Some(gender)` the draw is restricted to nouns of that gender.
    pub fn noun<R: Rng + ?Sized>(
        &self,
        gender: Option<Gender>,
        rng: &mut R,
    ) -> Result<(String, Gender), GenerateError> {
        let (bare, gender) = self.bare_noun(gender, rng)?;
        let phrase = grammar::with_article(&bare, gender, &self.config.elision_chars);
        Ok((phrase, gender))
    }

    /// A random noun, possibly prefixed, without article
    pub fn bare_noun<R: Rng + ?Sized>(
        &self,
        gender: Option<Gender>,
        rng: &mut R,
    ) -> Result<(String, Gender), GenerateError> {
        let nouns = self.lexicon.nouns();
        let noun = match gender {
            None => nouns.choose(rng).ok_or(GenerateError::empty(Category::Nouns))?,
            Some(wanted) => {
                let category = match wanted {
                    Gender::Masculine => Category::MasculineNouns,
                    Gender::Feminine => Category::FeminineNouns,
                };
                let index = self
                    .lexicon
                    .noun_indices(wanted)
                    .choose(rng)
                    .ok_or(GenerateError::empty(category))?;
                &nouns[*index]
            }
        };

        let bare = self.attach_prefix(&noun.text, noun.prefix_mode, rng)?;
        Ok((bare, noun.gender))
    }

    /// A random adjective in the form agreeing with `gender`
    pub fn adjective<R: Rng + ?Sized>(
        &self,
        gender: Gender,
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        let adjective = self
            .lexicon
            .adjectives()
            .choose(rng)
            .ok_or(GenerateError::empty(Category::Adjectives))?;
        Ok(adjective.form(gender).to_string())
    }

    fn attach_prefix<R: Rng + ?Sized>(
        &self,
        word: &str,
        mode: PrefixMode,
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        let attach = match mode {
            PrefixMode::Never => false,
            PrefixMode::Always => true,
            PrefixMode::Random => rng.gen::<f64>() < self.config.prefix_probability,
        };
        if !attach {
            return Ok(word.to_string());
        }

        let prefix = self
            .lexicon
            .prefixes()
            .choose(rng)
            .ok_or(GenerateError::empty(Category::Prefixes))?;
        Ok(grammar::prefixed(&prefix.text, word))
    }
}
