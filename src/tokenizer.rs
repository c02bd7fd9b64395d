//! Splitting input text into lower-cased word tokens.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CheckerError, Result};

/// Characters removed from every piece before lookup.
pub const PUNCTUATION: [char; 6] = ['.', '?', '!', ',', ';', '-'];

fn clean(piece: &str) -> String {
    piece
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Tokenize a sequence of lines. Tokens that are empty after stripping are dropped.
pub fn tokenize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        for piece in line.as_ref().split_whitespace() {
            let token = clean(piece);
            if !token.is_empty() {
                tokens.push(token);
            }
        }
    }
    tokens
}

pub fn tokenize_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(tokenize(lines))
}

/// Read and tokenize a whole file.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source| CheckerError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    tokenize_reader(BufReader::new(file)).map_err(unavailable)
}
