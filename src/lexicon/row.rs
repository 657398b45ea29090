//! Row grammars for the data lines of each lexicon section, using chumsky

use chumsky::prelude::*;

use super::entry::{AdjectiveEntry, Gender, NounEntry, PrefixEntry, PrefixMode, Section, VerbEntry};
use crate::template::Template;

type Extra<'a> = extra::Err<Rich<'a, char>>;

/// One parsed data line
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Row {
    Verb(VerbEntry),
    Adjective(AdjectiveEntry),
    Noun(NounEntry),
    Prefix(PrefixEntry),
    Template(Template),
}

/// Parse a trimmed, non-comment data line belonging to `section`
pub(crate) fn parse(section: Section, line: &str) -> Result<Row, Vec<Rich<'_, char>>> {
    match section {
        Section::Verbs => verb_row().parse(line).into_result(),
        Section::Adjectives => adjective_row().parse(line).into_result(),
        Section::Nouns => noun_row().parse(line).into_result(),
        Section::Prefixes => prefix_row().parse(line).into_result(),
        Section::Templates => template_row().parse(line).into_result(),
    }
}

/// Strip surrounding blanks and quotes from a field
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == ' ' || c == '\t' || c == '"')
}

/// A non-empty comma-free field
fn text<'a>(what: &'static str) -> impl Parser<'a, &'a str, String, Extra<'a>> + Clone {
    any()
        .filter(|c: &char| *c != ',')
        .repeated()
        .collect::<String>()
        .try_map(move |raw, span| {
            let field = trim_field(&raw);
            if field.is_empty() {
                Err(Rich::custom(span, format!("empty {}", what)))
            } else {
                Ok(field.to_string())
            }
        })
}

/// An integer code field decoded into `T`
fn code<'a, T: 'a>(
    what: &'static str,
    decode: fn(u8) -> Option<T>,
) -> impl Parser<'a, &'a str, T, Extra<'a>> + Clone {
    text(what).try_map(move |field, span| {
        let value: u8 = field.parse().map_err(|_| {
            Rich::custom(
                span,
                format!("{} must be an integer code, found '{}'", what, field),
            )
        })?;
        decode(value).ok_or_else(|| Rich::custom(span, format!("invalid {} {}", what, value)))
    })
}

fn prefix_mode<'a>() -> impl Parser<'a, &'a str, PrefixMode, Extra<'a>> + Clone {
    code("prefix mode", PrefixMode::from_code)
}

fn gender<'a>() -> impl Parser<'a, &'a str, Gender, Extra<'a>> + Clone {
    code("gender", Gender::from_code)
}

fn comma<'a>() -> impl Parser<'a, &'a str, char, Extra<'a>> + Clone {
    just(',')
}

/// `infinitive, prefix mode`
fn verb_row<'a>() -> impl Parser<'a, &'a str, Row, Extra<'a>> {
    text("infinitive")
        .then_ignore(comma())
        .then(prefix_mode())
        .then_ignore(end())
        .map(|(infinitive, mode)| Row::Verb(VerbEntry::new(infinitive, mode)))
}

/// `masculine, feminine, prefix mode`
fn adjective_row<'a>() -> impl Parser<'a, &'a str, Row, Extra<'a>> {
    text("masculine form")
        .then_ignore(comma())
        .then(text("feminine form"))
        .then_ignore(comma())
        .then(prefix_mode())
        .then_ignore(end())
        .map(|((masculine, feminine), mode)| {
            Row::Adjective(AdjectiveEntry::new(masculine, feminine, mode))
        })
}

/// `noun, gender, prefix mode`
fn noun_row<'a>() -> impl Parser<'a, &'a str, Row, Extra<'a>> {
    text("noun")
        .then_ignore(comma())
        .then(gender())
        .then_ignore(comma())
        .then(prefix_mode())
        .then_ignore(end())
        .map(|((noun, gender), mode)| Row::Noun(NounEntry::new(noun, gender, mode)))
}

/// `prefix`
fn prefix_row<'a>() -> impl Parser<'a, &'a str, Row, Extra<'a>> {
    text("prefix")
        .then_ignore(end())
        .map(|prefix| Row::Prefix(PrefixEntry::new(prefix)))
}

/// The whole line, commas included, is one template
fn template_row<'a>() -> impl Parser<'a, &'a str, Row, Extra<'a>> {
    any()
        .repeated()
        .collect::<String>()
        .try_map(|raw, span| {
            let template = trim_field(&raw);
            if template.is_empty() {
                Err(Rich::custom(span, "empty template"))
            } else {
                Ok(Row::Template(Template::parse(template)))
            }
        })
}
