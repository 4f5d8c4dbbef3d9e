//! Word list loading utilities
//!
//! Provides functions to load candidate words from files or use the embedded list.

use super::WORDS;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the candidate words come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordList {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-separated text file
    File(PathBuf),
}

impl WordList {
    /// Read the raw candidate lines
    ///
    /// Entries are not validated here; invalid words are dropped when the
    /// secret is selected.
    ///
    /// # Errors
    ///
    /// Returns an error naming the path if the file cannot be read.
    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            Self::Embedded => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
            Self::File(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display())),
        }
    }
}

/// Load candidate words from a file
///
/// Returns one entry per non-blank line, with surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wyrdl::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(words)
}
