//! Puzzle shape constants and arena capacity limits.

/// Rows in a grid puzzle.
pub const PUZZLE_HEIGHT: usize = 8;
/// Columns in a grid puzzle.
pub const PUZZLE_WIDTH: usize = 6;
/// Cells in a grid puzzle; one bit each in a cell mask.
pub const PUZZLE_SIZE: usize = PUZZLE_HEIGHT * PUZZLE_WIDTH;

/// Shortest word either solver reports.
pub const MIN_WORD_LENGTH: usize = 4;

/// Distinct letters in a letter bank.
pub const BANK_SIZE: usize = 7;
/// Used-letter mask of a word containing every bank letter.
pub const PANGRAM_MASK: u8 = (1 << BANK_SIZE) - 1;

/// Most words a non-overlapping cover can hold.
pub const MAX_COVER_WORDS: usize = PUZZLE_SIZE / MIN_WORD_LENGTH;

const _: () = assert!(PUZZLE_SIZE <= 64, "cell masks are u64");
const _: () = assert!(BANK_SIZE <= 8, "used-letter masks are u8");

/// Capacity of each arena, counted in records.
///
/// Running past any of these aborts the run with an [`ArenaError`] naming
/// the arena.
///
/// [`ArenaError`]: crate::arena::ArenaError
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    /// Trie nodes, root included.
    pub trie_nodes: usize,
    /// Found words, for either solver.
    pub solutions: usize,
    /// Bytes of found-word text.
    pub text_bytes: usize,
    /// Combination records emitted by the enumerator.
    pub combinations: usize,
    /// Solution indices stored across all combinations.
    pub combination_members: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            trie_nodes: 1 << 21,
            solutions: 4096,
            text_bytes: 64 * 1024,
            combinations: 1 << 20,
            combination_members: 1 << 23,
        }
    }
}

impl Capacities {
    /// Sets the combination limit and sizes the member arena to match, so
    /// `limit` combinations of the widest possible cover always fit.
    pub fn with_combination_limit(self, limit: usize) -> Self {
        Self {
            combinations: limit,
            combination_members: self
                .combination_members
                .max(limit.saturating_mul(MAX_COVER_WORDS)),
            ..self
        }
    }
}
