//! Word Puzzle Solver Library
//!
//! Solves two dictionary word puzzles:
//! - an 8x6 letter grid, where words are traced through adjacent cells and
//!   the best set of non-overlapping words is the one covering most cells
//! - a seven-letter bank, where words are spelled from the bank letters and
//!   must contain the bank's core letter
//!
//! Both searches run against a [`trie::Trie`] built once from a word list.
//! All results live in fixed-capacity [`arena::Arena`]s sized by
//! [`config::Capacities`].

pub mod arena;
pub mod bee;
pub mod config;
pub mod cover;
pub mod dictionary;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod strands;
pub mod trie;

pub use error::{Error, Result};

use config::Capacities;
use cover::{BestCover, Combinations};
use grid::Grid;
use strands::GridSolutions;
use trie::Trie;

/// Everything a grid run produces.
pub struct GridReport {
    pub solutions: GridSolutions,
    pub combinations: Combinations,
    pub best: Option<BestCover>,
}

/// Finds the grid's words, enumerates their non-overlapping combinations and
/// picks the one covering the most cells.
pub fn solve_grid(trie: &Trie, grid: &Grid, capacities: &Capacities) -> Result<GridReport> {
    let solutions = strands::solve(trie, grid, capacities)?;
    let masks = solutions.masks();
    let combinations = cover::enumerate(&masks, capacities)?;
    let best = cover::best_cover(&masks, &combinations);
    Ok(GridReport {
        solutions,
        combinations,
        best,
    })
}
