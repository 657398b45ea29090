//! Property tests for agreement, elision and loading

use corvo::generator::grammar::{with_article, with_preposition};
use corvo::lexicon::{AdjectiveEntry, NounEntry, PrefixEntry, VerbEntry};
use corvo::{Gender, Generator, GeneratorConfig, Lexicon, PrefixMode, Template};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ELISION: &str = "aeiouyéh";

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Masculine), Just(Gender::Feminine)]
}

fn prefix_mode() -> impl Strategy<Value = PrefixMode> {
    prop_oneof![
        Just(PrefixMode::Never),
        Just(PrefixMode::Always),
        Just(PrefixMode::Random)
    ]
}

fn word() -> impl Strategy<Value = String> {
    "[a-zéè]{1,10}"
}

fn mode_code(mode: PrefixMode) -> u8 {
    match mode {
        PrefixMode::Never => 0,
        PrefixMode::Always => 1,
        PrefixMode::Random => 2,
    }
}

fn gender_code(gender: Gender) -> u8 {
    match gender {
        Gender::Masculine => 1,
        Gender::Feminine => 2,
    }
}

proptest! {
    #[test]
    fn elided_nouns_take_l_apostrophe(noun in "[aeiouyéh][a-z]{0,8}", g in gender()) {
        let phrase = with_article(&noun, g, ELISION);
        prop_assert!(phrase.starts_with("l'"));
        prop_assert!(!phrase.starts_with("le ") && !phrase.starts_with("la "));
    }

    #[test]
    fn other_nouns_take_gendered_article(noun in "[bcdfgjklmnpqrstvwxz][a-z]{0,8}", g in gender()) {
        let phrase = with_article(&noun, g, ELISION);
        match g {
            Gender::Masculine => prop_assert!(phrase.starts_with("le ")),
            Gender::Feminine => prop_assert!(phrase.starts_with("la ")),
        }
    }

    #[test]
    fn de_verbs_use_exactly_one_preposition(verb in word()) {
        let phrase = with_preposition(&verb, ELISION);
        prop_assert!(phrase.starts_with("d'") != phrase.starts_with("de "));
    }

    #[test]
    fn complete_lexicons_always_generate(
        verbs in prop::collection::vec((word(), prefix_mode()), 1..5),
        adjectives in prop::collection::vec((word(), word()), 1..5),
        masculine in prop::collection::vec((word(), prefix_mode()), 1..5),
        feminine in prop::collection::vec((word(), prefix_mode()), 1..5),
        prefixes in prop::collection::vec(word(), 1..4),
        seed in any::<u64>(),
    ) {
        let mut lexicon = Lexicon::default()
            .with_template(Template::parse("[v] [n] [a] , [d] [m] [a] et [f] [a] ."));
        for (verb, mode) in &verbs {
            lexicon = lexicon.with_verb(VerbEntry::new(verb.as_str(), *mode));
        }
        for (masc, fem) in &adjectives {
            lexicon = lexicon.with_adjective(AdjectiveEntry::new(masc.as_str(), fem.as_str(), PrefixMode::Never));
        }
        for (noun, mode) in &masculine {
            lexicon = lexicon.with_noun(NounEntry::new(noun.as_str(), Gender::Masculine, *mode));
        }
        for (noun, mode) in &feminine {
            lexicon = lexicon.with_noun(NounEntry::new(noun.as_str(), Gender::Feminine, *mode));
        }
        for prefix in &prefixes {
            lexicon = lexicon.with_prefix(PrefixEntry::new(prefix.as_str()));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let sentence = Generator::with_config(&lexicon, GeneratorConfig::default())
            .generate(&mut rng);
        prop_assert!(sentence.is_ok());
        let sentence = sentence.unwrap_or_default();
        prop_assert!(!sentence.is_empty());
        prop_assert!(!sentence.contains('['));
        prop_assert!(sentence.ends_with(" ."));
    }

    #[test]
    fn loading_is_idempotent(
        verbs in prop::collection::vec((word(), prefix_mode()), 0..6),
        nouns in prop::collection::vec((word(), gender(), prefix_mode()), 0..6),
        prefixes in prop::collection::vec(word(), 0..4),
    ) {
        let mut source = String::from("[Verbes]\n");
        for (verb, mode) in &verbs {
            source.push_str(&format!("\"{}\", {}\n", verb, mode_code(*mode)));
        }
        source.push_str("[Noms]\n");
        for (noun, g, mode) in &nouns {
            source.push_str(&format!("{}, {}, {}\n", noun, gender_code(*g), mode_code(*mode)));
        }
        source.push_str("[Prefix]\n");
        for prefix in &prefixes {
            source.push_str(&format!("{}\n", prefix));
        }

        let first = Lexicon::from_str(&source);
        let second = Lexicon::from_str(&source);
        prop_assert!(first.is_ok());
        prop_assert_eq!(&first, &second);

        let lexicon = first.unwrap_or_default();
        prop_assert_eq!(lexicon.verbs().len(), verbs.len());
        prop_assert_eq!(lexicon.nouns().len(), nouns.len());
        prop_assert_eq!(lexicon.prefixes().len(), prefixes.len());
        for (entry, (noun, g, _)) in lexicon.nouns().iter().zip(&nouns) {
            prop_assert_eq!(&entry.text, noun);
            prop_assert_eq!(entry.gender, *g);
        }
    }
}
