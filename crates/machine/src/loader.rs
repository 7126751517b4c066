//! Program Loading and Token Parsing.
//!
//! This module provides the pure parsing utilities that sit between puzzle
//! input files and the machine. It performs:
//! 1. **Program extraction:** Reads a text file and yields the ordered
//!    signed-integer listing from comma/whitespace/newline-separated decimal
//!    tokens (with an optional leading minus).
//! 2. **Line reading:** Yields raw text lines for drivers whose inputs are
//!    not programs.
//!
//! The machine treats any integer sequence as a valid tape, so malformed
//! programs are only detectable here, at parse time.

use std::fs;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use crate::common::Word;

/// An error producing a program listing from text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read {path}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A separated token was not a signed decimal integer.
    #[error("invalid program token {token:?}")]
    InvalidToken {
        /// The offending token, as it appeared in the text.
        token: String,
        /// The underlying parse error.
        #[source]
        source: ParseIntError,
    },
}

/// Splits program text into its integer listing.
///
/// Tokens are separated by any run of commas and whitespace (newlines
/// included); each token must parse as a signed decimal integer. Empty text
/// yields an empty listing.
///
/// # Errors
///
/// Returns [`LoadError::InvalidToken`] for the first token that is not an
/// integer.
pub fn parse_program(text: &str) -> Result<Vec<Word>, LoadError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|source| LoadError::InvalidToken {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Reads a program file and parses its integer listing.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::InvalidToken`] if its text is not a program.
pub fn read_program(path: impl AsRef<Path>) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_program(&text)
}

/// Reads a text file as raw lines, without trailing newlines.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}
