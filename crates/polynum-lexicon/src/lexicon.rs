//! The flattened number-word lexicon.
//!
//! Per-language tables are merged into a single hash map so a word can be
//! resolved in one probe regardless of its language. Merging is ordered:
//! a spelling defined by more than one table resolves to the table merged
//! last. The built-in lexicon is built once on first use and never mutated.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::language::{Language, WordTable};

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::builtin);

/// A resolved lexicon entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The integer the word denotes.
    pub value: u32,
    /// Identifier of the table that supplied the value.
    pub source: &'static str,
}

/// A merged mapping from lowercase number-word to integer.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: FxHashMap<&'static str, Entry>,
}

impl Lexicon {
    /// Builds the lexicon from all built-in languages in `Language::ALL` order.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_tables(Language::ALL.map(Language::table))
    }

    /// Merges tables in iteration order; later tables override earlier ones.
    #[must_use]
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = WordTable>,
    {
        let mut entries = FxHashMap::default();

        for table in tables {
            for &(word, value) in table.words() {
                let entry = Entry {
                    value,
                    source: table.name(),
                };
                if let Some(prev) = entries.insert(word, entry) {
                    tracing::trace!(
                        word,
                        shadowed = prev.source,
                        winner = table.name(),
                        "number-word redefined during merge"
                    );
                }
            }
        }

        Self { entries }
    }

    /// Returns the value of an already-lowercased word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u32> {
        self.entries.get(word).map(|e| e.value)
    }

    /// Returns the full entry for a word, including its source table.
    #[must_use]
    pub fn entry(&self, word: &str) -> Option<Entry> {
        self.entries.get(word).copied()
    }

    /// Returns true if the word is present.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no words are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(word, entry)` pairs in unspecified order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Entry)> + '_ {
        self.entries.iter().map(|(w, e)| (*w, *e))
    }
}

/// Returns the process-wide built-in lexicon.
#[must_use]
pub fn lexicon() -> &'static Lexicon {
    &BUILTIN
}

/// Resolves an already-lowercased word against the built-in lexicon.
#[must_use]
pub fn lookup(word: &str) -> Option<u32> {
    let value = BUILTIN.get(word);
    if let Some(v) = value {
        tracing::trace!(word, value = v, "lexicon hit");
    }
    value
}

/// Resolves an already-lowercased word against a single language.
#[must_use]
pub fn lookup_in(language: Language, word: &str) -> Option<u32> {
    language.table().get(word)
}
