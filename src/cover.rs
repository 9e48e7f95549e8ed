//! Non-overlapping word combinations and the best grid cover.
//!
//! The enumerator walks solution indices in increasing order and extends the
//! current combination with every later solution whose cells are disjoint
//! from the cells covered so far. Each recursive call emits the combination
//! it was entered with once all its extensions are done, so every disjoint
//! subset (the empty one included) is emitted exactly once, deepest first.
//!
//! This is exponential in the number of solutions. Grid puzzles yield few
//! enough words for it to finish; the combination arena's capacity bounds
//! the output otherwise.

use crate::arena::{Arena, ArenaError, Span};
use crate::config::Capacities;

/// Every emitted combination, each a strictly increasing run of solution
/// indices.
#[derive(Debug, Clone)]
pub struct Combinations {
    members: Arena<u32>,
    records: Arena<Span>,
}

impl Combinations {
    pub fn new(capacities: &Capacities) -> Self {
        Self {
            members: Arena::with_capacity("combination members", capacities.combination_members),
            records: Arena::with_capacity("combinations", capacities.combinations),
        }
    }

    fn emit(&mut self, current: &[u32]) -> Result<(), ArenaError> {
        let span = self.members.extend_from_slice(current)?;
        self.records.push(span)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Solution indices of the `index`th combination, in emission order.
    pub fn get(&self, index: usize) -> &[u32] {
        self.members.slice(*self.records.get(index as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.records.iter().map(|&span| self.members.slice(span))
    }

    pub fn log_stats(&self) {
        self.records.log_stats();
        self.members.log_stats();
    }
}

struct Enumerator<'a> {
    masks: &'a [u64],
    current: Vec<u32>,
    out: Combinations,
}

impl Enumerator<'_> {
    fn combine(&mut self, start: usize, accumulated: u64) -> Result<(), ArenaError> {
        for next in start..self.masks.len() {
            let mask = self.masks[next];
            if accumulated & mask != 0 {
                continue;
            }
            self.current.push(next as u32);
            let result = self.combine(next + 1, accumulated | mask);
            self.current.pop();
            result?;
        }
        self.out.emit(&self.current)
    }
}

/// Emits every subset of `masks` whose members are pairwise disjoint.
pub fn enumerate(masks: &[u64], capacities: &Capacities) -> Result<Combinations, ArenaError> {
    let mut enumerator = Enumerator {
        masks,
        current: Vec::new(),
        out: Combinations::new(capacities),
    };
    enumerator.combine(0, 0)?;

    log::info!(
        "enumerated {} combinations of {} words",
        enumerator.out.len(),
        masks.len()
    );
    enumerator.out.log_stats();
    Ok(enumerator.out)
}

/// Union of the cell masks of a combination's members.
pub fn coverage(masks: &[u64], combination: &[u32]) -> u64 {
    combination
        .iter()
        .fold(0, |union, &member| union | masks[member as usize])
}

/// The combination covering the most cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestCover {
    /// Position of the combination in emission order.
    pub index: usize,
    /// Union of the members' cell masks.
    pub mask: u64,
}

impl BestCover {
    pub fn cells(&self) -> u32 {
        self.mask.count_ones()
    }
}

/// Scores every combination by covered cells and returns the highest.
///
/// Ties go to the combination emitted first. Returns `None` only when
/// `combinations` is empty.
pub fn best_cover(masks: &[u64], combinations: &Combinations) -> Option<BestCover> {
    let mut best: Option<BestCover> = None;
    for (index, combination) in combinations.iter().enumerate() {
        let mask = coverage(masks, combination);
        if best.map_or(true, |current| mask.count_ones() > current.cells()) {
            best = Some(BestCover { index, mask });
        }
    }
    best
}
