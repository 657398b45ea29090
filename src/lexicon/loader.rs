//! Line-oriented lexicon loader

use super::entry::Section;
use super::row::{self, Row};
use super::Lexicon;
use crate::error::FormatError;

/// Parse a whole lexicon source in one pass
///
/// The first malformed line aborts the load; nothing parsed so far is kept.
pub(crate) fn load(source: &str) -> Result<Lexicon, FormatError> {
    let mut lexicon = Lexicon::default();
    let mut section: Option<Section> = None;
    let body = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut line_start = source.len() - body.len();

    for (index, raw) in body.split_inclusive('\n').enumerate() {
        let number = index + 1;
        let offset = line_start + (raw.len() - raw.trim_start().len());
        line_start += raw.len();

        let line = raw.trim();
        if line.is_empty() || line.contains('#') {
            continue;
        }
        let span = offset..offset + line.len();

        if let Some(next) = Section::from_header(line) {
            log::debug!("line {}: entering section {}", number, next);
            section = Some(next);
            continue;
        }
        if section != Some(Section::Templates) && looks_like_header(line) {
            return Err(FormatError::UnknownSection {
                line: number,
                span,
                header: line.to_string(),
            });
        }

        let Some(current) = section else {
            return Err(FormatError::OutsideSection { line: number, span });
        };

        let parsed = row::parse(current, line).map_err(|errs| match errs.into_iter().next() {
            Some(err) => FormatError::from_rich(number, offset, err),
            None => FormatError::Row {
                line: number,
                span: span.clone(),
                message: format!("malformed {} row", current),
                expected: Vec::new(),
            },
        })?;
        log::trace!("line {}: {:?}", number, parsed);
        push(&mut lexicon, parsed);
    }

    Ok(lexicon)
}

fn push(lexicon: &mut Lexicon, row: Row) {
    match row {
        Row::Verb(verb) => lexicon.verbs.push(verb),
        Row::Adjective(adjective) => lexicon.adjectives.push(adjective),
        Row::Noun(noun) => lexicon.push_noun(noun),
        Row::Prefix(prefix) => lexicon.prefixes.push(prefix),
        Row::Template(template) => lexicon.templates.push(template),
    }
}

/// `[Word]` with two or more letters: a header, though maybe not one we know.
/// Single-letter brackets are tags. Inside `[Gabarits]` such a line is a template.
fn looks_like_header(line: &str) -> bool {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|name| name.chars().count() >= 2 && name.chars().all(char::is_alphabetic))
}
