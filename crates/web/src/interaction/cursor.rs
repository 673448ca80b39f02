// =============================================================================
// IgniteX Web - Story Cursor
// =============================================================================

use std::num::NonZeroUsize;

use crate::error::SiteError;

/// Index of the story currently shown by the carousel.
///
/// Only moves forward, wrapping back to the first entry after the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryCursor {
    index: usize,
    len: NonZeroUsize,
}

impl StoryCursor {
    /// Create a cursor over `len` entries, starting at the first.
    pub fn new(len: usize) -> Result<Self, SiteError> {
        let len = NonZeroUsize::new(len).ok_or(SiteError::EmptyStories)?;
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Advance to the next entry and return the new index.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.get();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(StoryCursor::new(0), Err(SiteError::EmptyStories));
    }

    #[test]
    fn test_full_cycle_over_four() {
        let mut cursor = StoryCursor::new(4).unwrap();
        assert_eq!(cursor.index(), 0);
        let seen: Vec<usize> = (0..4).map(|_| cursor.next()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_single_entry_stays_put() {
        let mut cursor = StoryCursor::new(1).unwrap();
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.len(), 1);
    }
}
