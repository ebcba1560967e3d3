//! # Source Span
//!
//! Byte range of a tree node in the Dart source it was parsed from.
//!
//! ```rust
//! use dart_psi::Span;
//!
//! let span = Span::new(4, 10);
//! assert_eq!(span.len(), 6);
//! assert!(span.contains(4));
//! assert!(!span.contains(10));
//! ```

use serde::{Deserialize, Serialize};

/// A range in the source, as byte offsets.
///
/// `start` is inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span from start and end byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Starting byte offset.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Ending byte offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` falls inside the span.
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether `other` lies completely inside this span.
    #[inline]
    pub const fn encloses(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Smallest span covering both spans.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
