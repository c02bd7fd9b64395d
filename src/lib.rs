//! A dictionary-based spelling checker.
//!
//! Input text is split into tokens, tokens missing from the dictionary are reported as
//! misspelled, and each distinct misspelled word gets the dictionary words within a
//! configurable Levenshtein distance as suggestions.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod report;
pub mod spellcheck;
pub mod tokenizer;

pub use config::{CheckerConfig, DEFAULT_THRESHOLD};
pub use dictionary::Dictionary;
pub use error::{CheckerError, Result};
pub use report::{CheckReport, FileFailure, FileReport};
pub use spellcheck::{
    CorrectionMap, SpellChecker, bounded_levenshtein, classify, levenshtein, suggest,
    suggest_serial,
};
pub use tokenizer::{PUNCTUATION, read_tokens, tokenize, tokenize_reader};
