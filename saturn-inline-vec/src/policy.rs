//! Index handling policy for the mutating operations.

/// How a mutating operation treats an index past the populated range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Coerce the index down to the nearest valid position (the cursor for
    /// writes, the last populated slot for removals).
    #[default]
    Clamp,
    /// Reject the index with [`InlineVecError::IndexOutOfBounds`].
    ///
    /// [`InlineVecError::IndexOutOfBounds`]: crate::error::InlineVecError::IndexOutOfBounds
    Strict,
}

impl IndexPolicy {
    /// Resolves `index` against the inclusive upper bound `limit`.
    ///
    /// Returns `None` when the policy is [`IndexPolicy::Strict`] and the index
    /// lies past `limit`.
    pub fn resolve(self, index: usize, limit: usize) -> Option<usize> {
        match self {
            IndexPolicy::Clamp => {
                let clamped = index.min(limit);
                if clamped != index {
                    tracing::trace!(requested = index, clamped, "index clamped");
                }
                Some(clamped)
            }
            IndexPolicy::Strict if index <= limit => Some(index),
            IndexPolicy::Strict => None,
        }
    }
}
