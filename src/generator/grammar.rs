//! French article, preposition and elision rules

use crate::lexicon::Gender;

/// Whether `word` starts with a character of the elision class
pub fn elides(word: &str, elision_chars: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|first| elision_chars.contains(first))
}

/// Put the definite article in front of a noun: "l'", "le " or "la "
pub fn with_article(noun: &str, gender: Gender, elision_chars: &str) -> String {
    if elides(noun, elision_chars) {
        format!("l'{}", noun)
    } else {
        match gender {
            Gender::Masculine => format!("le {}", noun),
            Gender::Feminine => format!("la {}", noun),
        }
    }
}

/// Introduce an infinitive with "d'" or "de "
pub fn with_preposition(verb: &str, elision_chars: &str) -> String {
    if elides(verb, elision_chars) {
        format!("d'{}", verb)
    } else {
        format!("de {}", verb)
    }
}

/// Whether a template word is a definite article written out literally
pub fn is_article(word: &str) -> bool {
    word.eq_ignore_ascii_case("le") || word.eq_ignore_ascii_case("la")
}

/// Hyphen-join a prefix and a word
pub fn prefixed(prefix: &str, word: &str) -> String {
    format!("{}-{}", prefix, word)
}
