//! Canonical undirected edge representation.

/// An undirected edge stored in canonical form (`source <= target`).
///
/// Canonicalization makes `(a, b)` and `(b, a)` compare equal and hash
/// identically, which the sampler relies on when deduplicating draws.
/// Self-loops (`source == target`) are permitted.
///
/// # Examples
/// ```
/// use kirinuki_core::Edge;
///
/// let forward = Edge::new(2, 5);
/// let reversed = Edge::new(5, 2);
/// assert_eq!(forward, reversed);
/// assert_eq!(forward.source(), 2);
/// assert_eq!(forward.target(), 5);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates a canonical edge from two endpoints in either order.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns whether the edge joins a node to itself.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
