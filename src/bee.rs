//! Letter-bank puzzle: words built from seven letters around a core letter.
//!
//! The search walks the trie directly. At every node each of the seven bank
//! letters is a candidate next letter, so letters may repeat within a word.
//! A word is accepted once it reaches a terminal node, is at least
//! [`MIN_WORD_LENGTH`] letters long and has used the core letter.

use std::fmt;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::arena::{Arena, ArenaError, Span};
use crate::config::{Capacities, BANK_SIZE, MIN_WORD_LENGTH, PANGRAM_MASK};
use crate::trie::{NodeId, Trie};

/// Why a letter bank was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("letter bank {token:?} contains non-letters {found:?}")]
    NonLetters { token: String, found: String },
    #[error(
        "letter bank {token:?} has {found} letters, expected {expected} distinct letters",
        expected = BANK_SIZE
    )]
    WrongLength { token: String, found: usize },
    #[error("letter bank {token:?} repeats {found:?}")]
    Duplicates { token: String, found: String },
}

/// Seven distinct uppercase letters in sorted order, one of them the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBank {
    letters: [u8; BANK_SIZE],
    core_mask: u8,
}

impl LetterBank {
    /// Validates a bank token. The first character is the core letter.
    pub fn parse(token: &str) -> Result<Self, BankError> {
        let non_letters: String = token.chars().filter(|ch| !ch.is_ascii_alphabetic()).collect();
        if !non_letters.is_empty() {
            return Err(BankError::NonLetters {
                token: token.to_string(),
                found: non_letters,
            });
        }

        let upper = token.to_ascii_uppercase();
        if upper.len() != BANK_SIZE {
            return Err(BankError::WrongLength {
                token: token.to_string(),
                found: upper.len(),
            });
        }

        let mut seen = FxHashSet::default();
        let mut repeated = String::new();
        for ch in upper.chars() {
            if !seen.insert(ch) && !repeated.contains(ch) {
                repeated.push(ch);
            }
        }
        if !repeated.is_empty() {
            return Err(BankError::Duplicates {
                token: token.to_string(),
                found: repeated,
            });
        }

        let mut letters = [0u8; BANK_SIZE];
        letters.copy_from_slice(upper.as_bytes());
        let core = letters[0];
        letters.sort_unstable();

        // the core is present, so the position always exists
        let core_position = letters.iter().position(|&l| l == core).unwrap_or_default();
        Ok(Self {
            letters,
            core_mask: 1 << core_position,
        })
    }

    /// Bank letters in sorted order; bit `i` of a used-letter mask is `letters()[i]`.
    pub fn letters(&self) -> &[u8; BANK_SIZE] {
        &self.letters
    }

    pub fn core_mask(&self) -> u8 {
        self.core_mask
    }

    pub fn core_letter(&self) -> u8 {
        self.letters[self.core_mask.trailing_zeros() as usize]
    }
}

impl fmt::Display for LetterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, &letter) in self.letters.iter().enumerate() {
            if self.core_mask & (1 << position) != 0 {
                write!(f, "[{}]", char::from(letter))?;
            } else {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

/// A word spelled from the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeeSolution {
    pub word: Span,
    /// Bit `i` is set iff bank letter `i` occurs in the word.
    pub used_mask: u8,
}

impl BeeSolution {
    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Uses every bank letter at least once.
    pub fn is_pangram(&self) -> bool {
        self.used_mask & PANGRAM_MASK == PANGRAM_MASK
    }

    /// A pangram exactly as long as the bank.
    pub fn is_perfect(&self) -> bool {
        self.is_pangram() && self.len() == BANK_SIZE
    }

    /// `'!'` for perfect, `'*'` for other pangrams, `' '` otherwise.
    pub fn marker(&self) -> char {
        if self.is_perfect() {
            '!'
        } else if self.is_pangram() {
            '*'
        } else {
            ' '
        }
    }
}

/// Accepted words in discovery order, with their text.
#[derive(Debug, Clone)]
pub struct BeeSolutions {
    solutions: Arena<BeeSolution>,
    text: Arena<u8>,
}

impl BeeSolutions {
    pub fn new(capacities: &Capacities) -> Self {
        Self {
            solutions: Arena::with_capacity("bee solutions", capacities.solutions),
            text: Arena::with_capacity("bee strings", capacities.text_bytes),
        }
    }

    fn record(&mut self, path: &[u8], used_mask: u8) -> Result<(), ArenaError> {
        let word = self.text.extend_from_slice(path)?;
        self.solutions.push(BeeSolution { word, used_mask })?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn as_slice(&self) -> &[BeeSolution] {
        self.solutions.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BeeSolution> {
        self.solutions.iter()
    }

    pub fn word(&self, solution: &BeeSolution) -> &str {
        std::str::from_utf8(self.text.slice(solution.word)).unwrap_or_default()
    }

    pub fn pangrams(&self) -> impl Iterator<Item = &BeeSolution> + '_ {
        self.iter().filter(|solution| solution.is_pangram())
    }

    pub fn log_stats(&self) {
        self.solutions.log_stats();
        self.text.log_stats();
    }
}

struct Search<'a> {
    trie: &'a Trie,
    bank: &'a LetterBank,
    path: Vec<u8>,
    found: BeeSolutions,
}

impl Search<'_> {
    fn visit(&mut self, node: NodeId, used_mask: u8) -> Result<(), ArenaError> {
        let core = self.bank.core_mask;
        if self.trie.is_terminal(node)
            && used_mask & core == core
            && self.path.len() >= MIN_WORD_LENGTH
        {
            self.found.record(&self.path, used_mask)?;
        }

        for (position, &letter) in self.bank.letters.iter().enumerate() {
            let Some(child) = self.trie.find_child(node, letter) else {
                continue;
            };
            self.path.push(letter);
            let result = self.visit(child, used_mask | (1 << position));
            self.path.pop();
            result?;
        }
        Ok(())
    }
}

/// Finds every dictionary word spelled only from bank letters that
/// contains the core letter and has at least four letters.
///
/// Words come out in alphabetical order, since bank letters are tried in
/// sorted order at every depth.
pub fn solve(
    trie: &Trie,
    bank: &LetterBank,
    capacities: &Capacities,
) -> Result<BeeSolutions, ArenaError> {
    let mut search = Search {
        trie,
        bank,
        path: Vec::new(),
        found: BeeSolutions::new(capacities),
    };
    search.visit(Trie::ROOT, 0)?;

    log::info!(
        "found {} words for bank {} ({} pangrams)",
        search.found.len(),
        bank,
        search.found.pangrams().count()
    );
    search.found.log_stats();
    Ok(search.found)
}
