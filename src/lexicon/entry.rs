//! Typed lexicon entries

use std::fmt;

/// Lexicon file sections, in the order they usually appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Verbs,
    Adjectives,
    Nouns,
    Prefixes,
    Templates,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Verbs,
        Section::Adjectives,
        Section::Nouns,
        Section::Prefixes,
        Section::Templates,
    ];

    /// The header line that opens this section
    pub fn header(self) -> &'static str {
        match self {
            Section::Verbs => "[Verbes]",
            Section::Adjectives => "[Adjectifs]",
            Section::Nouns => "[Noms]",
            Section::Prefixes => "[Prefix]",
            Section::Templates => "[Gabarits]",
        }
    }

    /// Match a trimmed line against the five section headers
    pub fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.header() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Whether a hyphenated prefix is attached to an entry's surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrefixMode {
    #[default]
    Never,
    Always,
    /// Attached with the generator's prefix probability
    Random,
}

impl PrefixMode {
    /// Decode the file's integer code (0 = never, 1 = always, 2 = random)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PrefixMode::Never),
            1 => Some(PrefixMode::Always),
            2 => Some(PrefixMode::Random),
            _ => None,
        }
    }
}

/// Grammatical gender of a noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    /// Decode the file's integer code (1 = masculine, 2 = feminine)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Gender::Masculine),
            2 => Some(Gender::Feminine),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbEntry {
    /// Infinitive form
    pub infinitive: String,
    pub prefix_mode: PrefixMode,
}

impl VerbEntry {
    pub fn new(infinitive: impl Into<String>, prefix_mode: PrefixMode) -> Self {
        Self {
            infinitive: infinitive.into(),
            prefix_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveEntry {
    pub masculine: String,
    pub feminine: String,
    /// Parsed and kept, but adjectives are never prefixed
    pub prefix_mode: PrefixMode,
}

impl AdjectiveEntry {
    pub fn new(
        masculine: impl Into<String>,
        feminine: impl Into<String>,
        prefix_mode: PrefixMode,
    ) -> Self {
        Self {
            masculine: masculine.into(),
            feminine: feminine.into(),
            prefix_mode,
        }
    }

    /// The surface form agreeing with `gender`
    pub fn form(&self, gender: Gender) -> &str {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounEntry {
    pub text: String,
    pub gender: Gender,
    pub prefix_mode: PrefixMode,
}

impl NounEntry {
    pub fn new(text: impl Into<String>, gender: Gender, prefix_mode: PrefixMode) -> Self {
        Self {
            text: text.into(),
            gender,
            prefix_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    pub text: String,
}

impl PrefixEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_headers_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_header(section.header()), Some(section));
        }
        assert_eq!(Section::from_header("[Verbs]"), None);
        assert_eq!(Section::from_header("[v] le [n]"), None);
    }

    #[test]
    fn test_prefix_mode_codes() {
        assert_eq!(PrefixMode::from_code(0), Some(PrefixMode::Never));
        assert_eq!(PrefixMode::from_code(1), Some(PrefixMode::Always));
        assert_eq!(PrefixMode::from_code(2), Some(PrefixMode::Random));
        assert_eq!(PrefixMode::from_code(3), None);
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code(1), Some(Gender::Masculine));
        assert_eq!(Gender::from_code(2), Some(Gender::Feminine));
        assert_eq!(Gender::from_code(0), None);
    }

    #[test]
    fn test_adjective_form_follows_gender() {
        let adj = AdjectiveEntry::new("temporel", "temporelle", PrefixMode::Never);
        assert_eq!(adj.form(Gender::Masculine), "temporel");
        assert_eq!(adj.form(Gender::Feminine), "temporelle");
    }
}
