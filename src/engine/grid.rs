//! Text-to-grid parsing.
//!
//! A level is a block of text: rows separated by CRLF, tokens inside a row
//! separated by a single space. Parsing never fails and never validates the
//! shape of the result; a short or long row is reported by
//! [`TokenMatrix::ragged_rows`] but otherwise kept as written.

use super::config::GridConfig;
use std::fmt;

/// Rows of tokens, top of file first, left to right within a row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenMatrix {
    rows: Vec<Vec<String>>,
}

impl TokenMatrix {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of row 0. The mapper walks every row up to this bound.
    pub fn column_bound(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Token at row `y`, column `x`, or `None` when the row is too short.
    pub fn get(&self, y: usize, x: usize) -> Option<&str> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .map(String::as_str)
    }

    /// Indices of rows whose width differs from row 0.
    pub fn ragged_rows(&self) -> Vec<usize> {
        let bound = self.column_bound();
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.len() != bound)
            .map(|(y, _)| y)
            .collect()
    }

    /// Writes the matrix back out with the given separators.
    /// No separator follows the last row.
    pub fn to_text(&self, config: &GridConfig) -> String {
        let separator = config.token_separator.to_string();
        self.rows
            .iter()
            .map(|row| row.join(&separator))
            .collect::<Vec<_>>()
            .join(&config.row_separator)
    }
}

impl fmt::Display for TokenMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(&GridConfig::default()))
    }
}

/// Parses level text using CRLF rows and single-space tokens.
pub fn parse(raw: &str) -> TokenMatrix {
    parse_with(raw, &GridConfig::default())
}

/// Parses level text with explicit separators.
///
/// Splitting is literal: a lone `\n` under the default config stays inside
/// its row, and two adjacent spaces produce an empty token between them.
pub fn parse_with(raw: &str, config: &GridConfig) -> TokenMatrix {
    let rows: Vec<Vec<String>> = raw
        .split(config.row_separator.as_str())
        .map(|line| {
            line.split(config.token_separator)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    TokenMatrix { rows }
}
