//! Loading and querying the word list.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CheckerError, Result};

/// A case-folded, read-only set of correctly spelled words.
///
/// Words are stored once, bucketed by character count, so the suggestion search can
/// skip entries whose length alone puts them out of reach.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: BTreeMap<usize, HashSet<String>>,
    len: usize,
}

/// Trim and case-fold a dictionary entry. Inner whitespace is kept, so a
/// multi-word line becomes a single key.
fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: BTreeMap<usize, HashSet<String>> = BTreeMap::new();
        let mut len = 0;
        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            if by_length
                .entry(word.chars().count())
                .or_default()
                .insert(word)
            {
                len += 1;
            }
        }

        Dictionary { by_length, len }
    }

    /// Read one word per line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a word list file. The file handle is dropped before returning.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| CheckerError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        Self::from_reader(BufReader::new(file)).map_err(unavailable)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.by_length
            .get(&word.chars().count())
            .is_some_and(|bucket| bucket.contains(&word))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Words whose character count lies within `slack` of `len`.
    pub fn words_near_length(&self, len: usize, slack: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .range(len.saturating_sub(slack)..=len.saturating_add(slack))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
    }
}
