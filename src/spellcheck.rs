use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::config::CheckerConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::report::FileReport;
use crate::tokenizer::{read_tokens, tokenize};

/// Misspelled word -> dictionary words within the threshold.
/// Words without any candidate are never present.
pub type CorrectionMap = BTreeMap<String, BTreeSet<String>>;

/// Classic dynamic-programming Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Levenshtein distance restricted to a diagonal band of width `max_dist`.
///
/// Returns `Some(d)` exactly when the true distance `d` is at most `max_dist`.
pub fn bounded_levenshtein(a: &str, b: &str, max_dist: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if longer.len() - shorter.len() > max_dist {
        return None;
    }

    let n = longer.len();
    let out_of_band = max_dist.saturating_add(1);
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &sc) in shorter.iter().enumerate() {
        let row = i + 1;
        curr[0] = row;
        let mut row_min = row;

        let col_min = row.saturating_sub(max_dist).max(1);
        let col_max = row.saturating_add(max_dist).min(n);

        for j in 1..=n {
            if j < col_min || j > col_max {
                curr[j] = out_of_band;
                continue;
            }
            let cost = usize::from(sc != longer[j - 1]);
            let ins = curr[j - 1].saturating_add(1);
            let del = prev[j].saturating_add(1);
            let sub = prev[j - 1].saturating_add(cost);
            curr[j] = ins.min(del).min(sub);
            row_min = row_min.min(curr[j]);
        }
        if row_min > max_dist {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= max_dist).then_some(distance)
}

/// Tokens absent from the dictionary, case-folded, in input order with repeats.
pub fn classify<S: AsRef<str>>(dictionary: &Dictionary, tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.as_ref().to_lowercase())
        .filter(|token| !dictionary.contains(token))
        .collect()
}

fn distinct_words<S: AsRef<str>>(misspelled: &[S]) -> Vec<String> {
    misspelled
        .iter()
        .map(|word| word.as_ref().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn candidates(dictionary: &Dictionary, word: &str, threshold: usize) -> BTreeSet<String> {
    dictionary
        .words_near_length(word.chars().count(), threshold)
        .filter(|candidate| bounded_levenshtein(word, candidate, threshold).is_some())
        .map(str::to_owned)
        .collect()
}

fn entry(
    dictionary: &Dictionary,
    word: String,
    threshold: usize,
) -> Option<(String, BTreeSet<String>)> {
    let found = candidates(dictionary, &word, threshold);
    (!found.is_empty()).then_some((word, found))
}

/// Every dictionary word within `threshold` edits of each distinct misspelled word.
///
/// Distinct words are searched in parallel on the rayon pool.
pub fn suggest<S: AsRef<str>>(
    dictionary: &Dictionary,
    misspelled: &[S],
    threshold: usize,
) -> CorrectionMap {
    distinct_words(misspelled)
        .into_par_iter()
        .filter_map(|word| entry(dictionary, word, threshold))
        .collect()
}

/// Same result as [`suggest`], computed on the calling thread.
pub fn suggest_serial<S: AsRef<str>>(
    dictionary: &Dictionary,
    misspelled: &[S],
    threshold: usize,
) -> CorrectionMap {
    distinct_words(misspelled)
        .into_iter()
        .filter_map(|word| entry(dictionary, word, threshold))
        .collect()
}

/// A loaded dictionary bound to a configuration, reused across input files.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    config: CheckerConfig,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, config: CheckerConfig) -> Self {
        SpellChecker { dictionary, config }
    }

    pub fn from_word_list_file<P: AsRef<Path>>(path: P, config: CheckerConfig) -> Result<Self> {
        Ok(Self::new(Dictionary::load(path)?, config))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        classify(&self.dictionary, tokens)
    }

    pub fn suggest<S: AsRef<str>>(&self, misspelled: &[S]) -> CorrectionMap {
        if self.config.parallel {
            suggest(&self.dictionary, misspelled, self.config.threshold)
        } else {
            suggest_serial(&self.dictionary, misspelled, self.config.threshold)
        }
    }

    /// Classify `tokens` and compute corrections for whatever is misspelled.
    pub fn check_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> (Vec<String>, CorrectionMap) {
        let misspelled = self.classify(tokens);
        let corrections = self.suggest(&misspelled);
        (misspelled, corrections)
    }

    pub fn check_text<I, S>(&self, lines: I) -> (Vec<String>, CorrectionMap)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_tokens(&tokenize(lines))
    }

    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<FileReport> {
        let path = path.as_ref();
        let tokens = read_tokens(path)?;
        let (misspelled, corrections) = self.check_tokens(&tokens);
        Ok(FileReport {
            path: path.to_path_buf(),
            token_count: tokens.len(),
            misspelled,
            corrections,
        })
    }
}
