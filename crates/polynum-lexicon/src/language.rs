//! Built-in languages and their number-word vocabularies.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ENGLISH: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const GERMAN: &[(&str, u32)] = &[
    ("null", 0),
    ("eins", 1),
    ("zwei", 2),
    ("drei", 3),
    ("vier", 4),
    ("fünf", 5),
    ("sechs", 6),
    ("sieben", 7),
    ("acht", 8),
    ("neun", 9),
];

const SPANISH: &[(&str, u32)] = &[
    ("cero", 0),
    ("uno", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
];

const RUSSIAN: &[(&str, u32)] = &[
    ("ноль", 0),
    ("один", 1),
    ("два", 2),
    ("три", 3),
    ("четыре", 4),
    ("пять", 5),
    ("шесть", 6),
    ("семь", 7),
    ("восемь", 8),
    ("девять", 9),
];

// Simplified Chinese
const CHINESE: &[(&str, u32)] = &[
    ("零", 0),
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
];

// Roman numerals I through X, no zero.
const LATIN: &[(&str, u32)] = &[
    ("i", 1),
    ("ii", 2),
    ("iii", 3),
    ("iv", 4),
    ("v", 5),
    ("vi", 6),
    ("vii", 7),
    ("viii", 8),
    ("ix", 9),
    ("x", 10),
];

/// A named list of `(word, value)` pairs.
///
/// Words are lowercase and unique within a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordTable {
    name: &'static str,
    words: &'static [(&'static str, u32)],
}

impl WordTable {
    /// Creates a table from a name and its word list.
    #[must_use]
    pub const fn new(name: &'static str, words: &'static [(&'static str, u32)]) -> Self {
        Self { name, words }
    }

    /// Returns the table's language identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the word list in declaration order.
    #[must_use]
    pub const fn words(&self) -> &'static [(&'static str, u32)] {
        self.words
    }

    /// Looks up an already-lowercased word in this table only.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u32> {
        self.words
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, v)| *v)
    }
}

/// A language (or script) with a built-in number-word vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// zero through nine
    English,
    /// null through neun
    German,
    /// cero through nueve
    Spanish,
    /// ноль through девять
    Russian,
    /// 零 through 九
    Chinese,
    /// Roman numerals i through x
    Latin,
}

impl Language {
    /// All built-in languages in merge order.
    ///
    /// When two languages share a spelling, the one later in this list
    /// supplies the value in the flattened lexicon.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::German,
        Language::Spanish,
        Language::Russian,
        Language::Chinese,
        Language::Latin,
    ];

    /// Returns the lowercase language identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Russian => "russian",
            Language::Chinese => "chinese",
            Language::Latin => "latin",
        }
    }

    /// Returns the word table for this language.
    #[must_use]
    pub const fn table(self) -> WordTable {
        let words = match self {
            Language::English => ENGLISH,
            Language::German => GERMAN,
            Language::Spanish => SPANISH,
            Language::Russian => RUSSIAN,
            Language::Chinese => CHINESE,
            Language::Latin => LATIN,
        };
        WordTable::new(self.name(), words)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized language identifier.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown language: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == lower)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
