//! Fixed-capacity bump arenas.
//!
//! Every record the solvers produce (trie nodes, found words, word text,
//! combinations) lives in an arena for the rest of the run. Nothing is freed
//! individually; an arena is released by dropping or resetting it as a whole.
//!
//! Records are addressed by index rather than by reference so the owning
//! structure stays movable and every access is bounds-checked.

use thiserror::Error;

/// Raised when a push would take an arena past its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "arena `{arena}` exhausted: {requested} more requested with {used}/{capacity} in use ({overflow} over)"
)]
pub struct ArenaError {
    pub arena: &'static str,
    pub requested: usize,
    pub used: usize,
    pub capacity: usize,
    pub overflow: usize,
}

/// A contiguous run of items inside an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Span {
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.start as usize + self.len as usize
    }
}

/// Bump allocator over items of one type.
///
/// `capacity` is a hard limit counted in items. Backing storage grows on
/// demand up to that limit, so a generous capacity costs nothing until used.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    name: &'static str,
    capacity: usize,
    items: Vec<T>,
}

impl<T> Arena<T> {
    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            items: Vec::new(),
        }
    }

    /// Checks that `count` more items fit, without allocating anything.
    #[inline]
    fn reserve_check(&self, count: usize) -> Result<(), ArenaError> {
        let used = self.items.len();
        let wanted = used + count;
        if wanted > self.capacity {
            return Err(ArenaError {
                arena: self.name,
                requested: count,
                used,
                capacity: self.capacity,
                overflow: wanted - self.capacity,
            });
        }
        Ok(())
    }

    /// Appends one item and returns its index.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<u32, ArenaError> {
        self.reserve_check(1)?;
        let index = self.items.len() as u32;
        self.items.push(value);
        Ok(index)
    }

    #[inline]
    pub fn get(&self, index: u32) -> &T {
        &self.items[index as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        &mut self.items[index as usize]
    }

    #[inline]
    pub fn slice(&self, span: Span) -> &[T] {
        &self.items[span.range()]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards every item at once; the capacity is kept.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Logs `used / capacity (fraction)` at debug level.
    pub fn log_stats(&self) {
        let fraction = if self.capacity == 0 {
            0.0
        } else {
            self.items.len() as f64 / self.capacity as f64
        };
        log::debug!(
            "arena {}: {} / {} ({:.6})",
            self.name,
            self.items.len(),
            self.capacity,
            fraction
        );
    }
}

impl<T: Copy> Arena<T> {
    /// Copies `values` into one contiguous region and returns its span.
    ///
    /// Either the whole slice fits or nothing is written.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<Span, ArenaError> {
        self.reserve_check(values.len())?;
        let start = self.items.len() as u32;
        self.items.extend_from_slice(values);
        Ok(Span {
            start,
            len: values.len() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_consecutive_indices() {
        let mut arena = Arena::with_capacity("test", 3);
        assert_eq!(arena.push(10u8), Ok(0));
        assert_eq!(arena.push(20u8), Ok(1));
        assert_eq!(*arena.get(1), 20);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.capacity(), 3);
    }

    #[test]
    fn test_push_past_capacity_fails_without_writing() {
        let mut arena = Arena::with_capacity("small", 1);
        arena.push('a').unwrap();
        let err = arena.push('b').unwrap_err();
        assert_eq!(err.arena, "small");
        assert_eq!(err.overflow, 1);
        assert_eq!(arena.len(), 1, "Failed push must not change usage");
    }

    #[test]
    fn test_extend_is_all_or_nothing() {
        let mut arena: Arena<u8> = Arena::with_capacity("text", 6);
        let span = arena.extend_from_slice(b"WORD").unwrap();
        assert_eq!(arena.slice(span), b"WORD");

        let err = arena.extend_from_slice(b"LONG").unwrap_err();
        assert_eq!(err.requested, 4);
        assert_eq!(err.used, 4);
        assert_eq!(err.overflow, 2);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_error_message_names_arena_and_overflow() {
        let mut arena: Arena<u8> = Arena::with_capacity("strings", 2);
        let err = arena.extend_from_slice(b"ABCDE").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("strings"), "Message was: {message}");
        assert!(message.contains("3 over"), "Message was: {message}");
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut arena = Arena::with_capacity("reset", 2);
        arena.push(1u32).unwrap();
        arena.push(2u32).unwrap();
        arena.reset();
        assert!(arena.is_empty());
        assert_eq!(arena.push(3u32), Ok(0));
    }

    #[test]
    fn test_empty_span_is_valid() {
        let mut arena: Arena<u8> = Arena::with_capacity("empty", 0);
        let span = arena.extend_from_slice(&[]).unwrap();
        assert!(span.is_empty());
        assert!(arena.slice(span).is_empty());
    }
}
