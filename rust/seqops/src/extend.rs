//! In-place extension of a `Vec` with whole sequences.
//!
//! This is the only mutating operation of the crate, so it lives apart from the pure
//! [`SequenceExt`](crate::SequenceExt) queries and requires a mutable receiver.

/// Extension trait appending several sequences to a `Vec` in place.
pub trait ExtendWithExt<T> {
    /// Appends every element of every sequence in `sequences` to `self`, sequences in
    /// argument order and elements in their own order, and returns `self` for chaining.
    ///
    /// Unlike the query operations, this mutates the receiver.
    ///
    /// ```
    /// use seqops::{ExtendWithExt, SequenceExt};
    ///
    /// let mut all = vec![1, 2];
    /// let total = all.extend_with([vec![3], vec![], vec![4, 5]]).sum();
    /// assert_eq!(total, 15);
    /// assert_eq!(all, vec![1, 2, 3, 4, 5]);
    /// ```
    fn extend_with<I>(&mut self, sequences: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>;
}

impl<T> ExtendWithExt<T> for Vec<T> {
    fn extend_with<I>(&mut self, sequences: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        for sequence in sequences {
            self.extend(sequence);
        }
        self
    }
}
