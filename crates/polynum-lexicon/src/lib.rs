//! # polynum-lexicon
//!
//! Number-word vocabularies for the polynum calculator.
//!
//! This crate provides:
//! - Per-language word tables (`Language`, `WordTable`)
//! - A flattened, merge-ordered lookup table (`Lexicon`)
//! - A process-wide, lazily built lexicon behind read-only accessors
//!
//! All keys are stored lowercase; callers fold case before lookup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod language;
pub mod lexicon;

pub use language::{Language, UnknownLanguage, WordTable};
pub use lexicon::{lexicon, lookup, lookup_in, Entry, Lexicon};
