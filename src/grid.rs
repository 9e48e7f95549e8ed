//! Grid puzzle input and rendering.
//!
//! A puzzle is eight lines of six letters. It is stored case-folded inside
//! the padded layout from [`crate::geometry`].

use std::fmt;

use thiserror::Error;

use crate::config::{PUZZLE_HEIGHT, PUZZLE_SIZE, PUZZLE_WIDTH};
use crate::geometry::{padded_index, PADDED_SIZE, SENTINEL};

/// Why a puzzle file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(
        "expected {height} lines of {width} letters, found {0} lines",
        height = PUZZLE_HEIGHT,
        width = PUZZLE_WIDTH
    )]
    LineCount(usize),
    #[error("line {line} has {found} characters, expected {width}", width = PUZZLE_WIDTH)]
    RowWidth { line: usize, found: usize },
    #[error("line {line} contains non-letter {found:?}")]
    NotALetter { line: usize, found: char },
}

/// An 8x6 letter grid surrounded by sentinel cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; PADDED_SIZE],
}

impl Grid {
    /// Parses eight lines of six ASCII letters. Trailing blank lines and
    /// `\r\n` line endings are accepted; letters are folded to uppercase.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }
        if rows.len() != PUZZLE_HEIGHT {
            return Err(GridError::LineCount(rows.len()));
        }

        let mut cells = [SENTINEL; PADDED_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != PUZZLE_WIDTH {
                return Err(GridError::RowWidth {
                    line: row + 1,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridError::NotALetter {
                        line: row + 1,
                        found: ch,
                    });
                }
                cells[padded_index(row, col)] = ch.to_ascii_uppercase() as u8;
            }
        }

        Ok(Self { cells })
    }

    /// The padded cell array, border included.
    #[inline(always)]
    pub fn padded(&self) -> &[u8; PADDED_SIZE] {
        &self.cells
    }

    /// Letter at a puzzle coordinate.
    pub fn letter(&self, row: usize, col: usize) -> u8 {
        self.cells[padded_index(row, col)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..PUZZLE_HEIGHT {
            for col in 0..PUZZLE_WIDTH {
                write!(f, "{}", char::from(self.letter(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\n{self})")
    }
}

/// Draws which cells a set of non-overlapping words covers.
///
/// The word at position `i` in `masks` labels its cells with the `i`th
/// lowercase letter; uncovered cells show as '.'.
pub fn format_cover(masks: &[u64]) -> String {
    let mut labels = [b'.'; PUZZLE_SIZE];
    for (member, &mask) in masks.iter().enumerate() {
        let label = b'a' + (member % 26) as u8;
        for (cell, slot) in labels.iter_mut().enumerate() {
            if mask & (1 << cell) != 0 {
                *slot = label;
            }
        }
    }

    let mut output = String::with_capacity(PUZZLE_SIZE + PUZZLE_HEIGHT);
    for row in labels.chunks(PUZZLE_WIDTH) {
        output.extend(row.iter().map(|&b| char::from(b)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "abcdef\nghijkl\nmnopqr\nstuvwx\nyzabcd\nefghij\nklmnop\nqrstuv\n";

    #[test]
    fn test_parse_folds_case_and_pads() {
        let grid = Grid::parse(PUZZLE).unwrap();
        assert_eq!(grid.letter(0, 0), b'A');
        assert_eq!(grid.letter(7, 5), b'V');
        assert_eq!(grid.padded()[0], SENTINEL, "Border must hold the sentinel");
        assert_eq!(grid.padded()[PADDED_SIZE - 1], SENTINEL);
    }

    #[test]
    fn test_parse_accepts_crlf() {
        let crlf = PUZZLE.replace('\n', "\r\n");
        assert_eq!(Grid::parse(&crlf).unwrap(), Grid::parse(PUZZLE).unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert_eq!(
            Grid::parse("abcdef\nghijkl\n"),
            Err(GridError::LineCount(2))
        );
        let wide = PUZZLE.replacen("abcdef", "abcdefg", 1);
        assert_eq!(
            Grid::parse(&wide),
            Err(GridError::RowWidth { line: 1, found: 7 })
        );
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        let bad = PUZZLE.replacen("stuvwx", "stu?wx", 1);
        assert_eq!(
            Grid::parse(&bad),
            Err(GridError::NotALetter { line: 4, found: '?' })
        );
    }

    #[test]
    fn test_display_roundtrips_uppercase() {
        let grid = Grid::parse(PUZZLE).unwrap();
        assert_eq!(grid.to_string(), PUZZLE.to_uppercase());
    }

    #[test]
    fn test_format_cover_labels_members() {
        let first_row = 0b1111u64;
        let last_cell = 1u64 << 47;
        let picture = format_cover(&[first_row, last_cell]);
        let lines: Vec<&str> = picture.lines().collect();
        assert_eq!(lines.len(), PUZZLE_HEIGHT);
        assert_eq!(lines[0], "aaaa..");
        assert_eq!(lines[7], ".....b");
    }
}
