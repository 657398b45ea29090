//! Tag scanner for template words using logos

use logos::Logos;

use super::TagKind;

/// The six tag markers; everything else in a word is skipped
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    #[token("[v]")]
    Verb,
    #[token("[n]")]
    Noun,
    #[token("[a]")]
    Adjective,
    #[token("[d]")]
    VerbWithDe,
    #[token("[m]")]
    Masculine,
    #[token("[f]")]
    Feminine,
}

impl From<Tag> for TagKind {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Verb => TagKind::Verb,
            Tag::Noun => TagKind::Noun,
            Tag::Adjective => TagKind::Adjective,
            Tag::VerbWithDe => TagKind::VerbWithDe,
            Tag::Masculine => TagKind::Masculine,
            Tag::Feminine => TagKind::Feminine,
        }
    }
}

/// All tags contained in a word, in the order they appear
pub fn scan(word: &str) -> impl Iterator<Item = TagKind> + '_ {
    Tag::lexer(word).filter_map(|tok| tok.ok().map(TagKind::from))
}

/// The tag that decides a word's replacement, if any
///
/// When a word holds several tags, the one earliest in `TagKind::ALL` wins.
pub fn classify(word: &str) -> Option<TagKind> {
    scan(word).min()
}
