//! Depth-first word search over the letter grid.
//!
//! Every cell is tried as a starting point. From each cell the search steps
//! to any of the eight neighbours that is not already on the current path,
//! following the trie so that only dictionary prefixes are explored. Every
//! terminal node reached with at least [`MIN_WORD_LENGTH`] letters is
//! recorded together with the cells its path occupies.
//!
//! A word reachable along two different paths is recorded twice: the paths
//! cover different cells and so are different candidates for the cover.

use crate::arena::{Arena, ArenaError, Span};
use crate::config::{Capacities, MIN_WORD_LENGTH, PUZZLE_SIZE};
use crate::geometry::{cell_mask, cell_to_padded, neighbour, OFFSETS, PADDED_SIZE};
use crate::grid::Grid;
use crate::trie::{NodeId, Trie};

/// A dictionary word found along one path through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSolution {
    /// The word's letters in the text arena.
    pub word: Span,
    /// Bit `row * 6 + col` is set for every cell on the path.
    pub cell_mask: u64,
}

impl GridSolution {
    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Found words in discovery order, with their text.
#[derive(Debug, Clone)]
pub struct GridSolutions {
    solutions: Arena<GridSolution>,
    text: Arena<u8>,
}

impl GridSolutions {
    pub fn new(capacities: &Capacities) -> Self {
        Self {
            solutions: Arena::with_capacity("grid solutions", capacities.solutions),
            text: Arena::with_capacity("grid strings", capacities.text_bytes),
        }
    }

    fn record(&mut self, path: &[u8], cell_mask: u64) -> Result<(), ArenaError> {
        let word = self.text.extend_from_slice(path)?;
        self.solutions.push(GridSolution { word, cell_mask })?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn as_slice(&self) -> &[GridSolution] {
        self.solutions.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridSolution> {
        self.solutions.iter()
    }

    /// The text of a solution from this set.
    pub fn word(&self, solution: &GridSolution) -> &str {
        std::str::from_utf8(self.text.slice(solution.word)).unwrap_or_default()
    }

    /// Cell masks in solution order, ready for the cover search.
    pub fn masks(&self) -> Vec<u64> {
        self.iter().map(|solution| solution.cell_mask).collect()
    }

    pub fn log_stats(&self) {
        self.solutions.log_stats();
        self.text.log_stats();
    }
}

/// Scratch state for one starting cell's search.
///
/// `visited` and `path` are restored on every return, so after the walk
/// from one cell finishes they are clean for the next.
struct Walk<'a> {
    trie: &'a Trie,
    cells: &'a [u8; PADDED_SIZE],
    visited: [bool; PADDED_SIZE],
    path: Vec<u8>,
    found: &'a mut GridSolutions,
}

impl Walk<'_> {
    fn visit(&mut self, padded: usize, node: NodeId) -> Result<(), ArenaError> {
        if self.visited[padded] {
            return Ok(());
        }
        self.visited[padded] = true;
        let result = self.step(padded, node);
        self.visited[padded] = false;
        result
    }

    fn step(&mut self, padded: usize, node: NodeId) -> Result<(), ArenaError> {
        // border cells hold the sentinel, which never has a child
        let letter = self.cells[padded];
        let Some(child) = self.trie.find_child(node, letter) else {
            return Ok(());
        };

        self.path.push(letter);
        let result = self.descend(padded, child);
        self.path.pop();
        result
    }

    fn descend(&mut self, padded: usize, child: NodeId) -> Result<(), ArenaError> {
        if self.path.len() >= MIN_WORD_LENGTH && self.trie.is_terminal(child) {
            let mask = cell_mask(&self.visited);
            log::trace!(
                "found {} ({mask:#014x})",
                String::from_utf8_lossy(&self.path)
            );
            self.found.record(&self.path, mask)?;
        }

        for offset in OFFSETS {
            self.visit(neighbour(padded, offset), child)?;
        }
        Ok(())
    }
}

/// Finds every dictionary word of at least four letters that can be traced
/// through adjacent, non-repeating grid cells.
///
/// Solutions are ordered by starting cell (row-major), then by the
/// neighbour order of [`OFFSETS`] at each step.
pub fn solve(
    trie: &Trie,
    grid: &Grid,
    capacities: &Capacities,
) -> Result<GridSolutions, ArenaError> {
    let mut found = GridSolutions::new(capacities);

    for cell in 0..PUZZLE_SIZE {
        let mut walk = Walk {
            trie,
            cells: grid.padded(),
            visited: [false; PADDED_SIZE],
            path: Vec::with_capacity(PUZZLE_SIZE),
            found: &mut found,
        };
        walk.visit(cell_to_padded(cell), Trie::ROOT)?;
    }

    log::info!("found {} words in the grid", found.len());
    found.log_stats();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler_rows(first: &[&str]) -> String {
        let mut rows: Vec<String> = first.iter().map(|row| row.to_string()).collect();
        while rows.len() < 8 {
            rows.push("QQQQQQ".to_string());
        }
        rows.join("\n")
    }

    fn run(rows: &[&str], dictionary: &[u8]) -> GridSolutions {
        let trie = Trie::build(dictionary, 1024).unwrap();
        let grid = Grid::parse(&filler_rows(rows)).unwrap();
        solve(&trie, &grid, &Capacities::default()).unwrap()
    }

    #[test]
    fn test_straight_word_found_once() {
        let found = run(&["WORDQQ"], b"word\n");
        assert_eq!(found.len(), 1, "Expected exactly one solution");
        let solution = found.as_slice()[0];
        assert_eq!(found.word(&solution), "WORD");
        assert_eq!(solution.len(), 4);
        assert_eq!(solution.cell_mask, 0b1111);
        assert_eq!(solution.cell_mask.count_ones(), 4);
    }

    #[test]
    fn test_words_follow_diagonals() {
        // W O R D down the main diagonal
        let found = run(&["WQQQQQ", "QOQQQQ", "QQRQQQ", "QQQDQQ"], b"WORD\n");
        assert_eq!(found.len(), 1);
        let expected = 1 | (1 << 7) | (1 << 14) | (1 << 21);
        assert_eq!(found.as_slice()[0].cell_mask, expected);
    }

    #[test]
    fn test_short_words_are_ignored() {
        let found = run(&["CATQQQ"], b"CAT\n");
        assert!(found.is_empty(), "Three-letter words must not be reported");
    }

    #[test]
    fn test_cells_are_never_reused() {
        let found = run(&["ABQQQQ", "BAQQQQ"], b"ABAB\nABABA\n");
        assert!(!found.is_empty());
        for solution in found.iter() {
            assert_eq!(
                solution.cell_mask.count_ones() as usize,
                solution.len(),
                "{} revisits a cell",
                found.word(solution)
            );
        }
        // five letters need five distinct cells; only four exist
        assert!(found.iter().all(|solution| found.word(solution) == "ABAB"));
    }

    #[test]
    fn test_same_word_on_distinct_paths_is_kept_twice() {
        let found = run(&["ABCDQQ", "QBQQQQ"], b"ABCD\n");
        assert_eq!(found.len(), 2);
        let masks = found.masks();
        assert_ne!(masks[0], masks[1], "Paths must cover different cells");
        assert!(found.iter().all(|solution| found.word(solution) == "ABCD"));
    }

    #[test]
    fn test_lowercase_inputs_match_uppercase() {
        let lower = run(&["wordqq"], b"word\n");
        let upper = run(&["WORDQQ"], b"WORD\n");
        assert_eq!(lower.as_slice(), upper.as_slice());
    }

    #[test]
    fn test_rerun_is_order_stable() {
        let rows = ["TEAMSQ", "EATQQQ", "MEATQQ"];
        let dictionary = b"team\nteams\nmeat\nmate\nseat\ntame\n";
        let first = run(&rows, dictionary);
        let second = run(&rows, dictionary);
        assert_eq!(first.as_slice(), second.as_slice());
        let words: Vec<&str> = first.iter().map(|s| first.word(s)).collect();
        let again: Vec<&str> = second.iter().map(|s| second.word(s)).collect();
        assert_eq!(words, again);
    }

    #[test]
    fn test_solution_arena_overflow_is_reported() {
        let trie = Trie::build(b"ABCD\n", 64).unwrap();
        let grid = Grid::parse(&filler_rows(&["ABCDQQ", "QBQQQQ"])).unwrap();
        let capacities = Capacities {
            solutions: 1,
            ..Capacities::default()
        };
        let err = solve(&trie, &grid, &capacities).unwrap_err();
        assert_eq!(err.arena, "grid solutions");
    }
}
