//! Query operations over ordered, in-memory sequences.
//!
//! This module provides the [`SequenceExt`] trait, implemented for `[T]` and therefore
//! available on arrays, slices and `Vec`s. All of its operations read the receiver and
//! return freshly allocated results; none of them mutates the sequence. The one
//! mutating operation lives separately in [`crate::extend`].
//!
//! Operations favor degenerate-but-defined results over failures: out-of-range indices
//! produce fewer elements, "not found" is `None`, the sum of an empty sequence is zero
//! and its average is NaN.

use std::hash::Hash;

use ahash::AHashSet;
use num_traits::{CheckedAdd, ToPrimitive, Zero};
use seqops_common::Result;

use crate::{
    grouping::{self, Grouping, KeySelector},
    truthy::Truthy,
};

/// Extension trait adding query-style operations to sequences.
///
/// Elements are visited strictly left to right. Closures receive the element by
/// reference; the ones named "selector" or "action" also receive its zero-based index.
pub trait SequenceExt<T> {
    /// Returns the elements at the 1-based, inclusive positions `start..=end`.
    ///
    /// Positions outside the sequence are dropped, so the result never holds more
    /// elements than the receiver. `start > end` yields an empty result.
    ///
    /// ```
    /// use seqops::SequenceExt;
    ///
    /// let v = [10, 20, 30, 40, 50];
    /// assert_eq!(v.range(2, 4), vec![20, 30, 40]);
    /// assert_eq!(v.range(4, 9), vec![40, 50]);
    /// assert!(v.range(3, 2).is_empty());
    /// ```
    fn range(&self, start: isize, end: isize) -> Vec<T>
    where
        T: Clone;

    /// Like [`SequenceExt::range`], but yields one slot per requested position.
    ///
    /// Slots for positions outside the sequence are `None` and stay in place, so the
    /// result length is `end - start + 1` whenever `start <= end`.
    fn range_slots(&self, start: isize, end: isize) -> Vec<Option<T>>
    where
        T: Clone;

    /// Returns the elements after the first `count`.
    fn skip(&self, count: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the first element matching `predicate`, or `None` if nothing matches.
    fn first_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns the first element when it is truthy.
    ///
    /// A falsy first element (zero, NaN, `false`, an empty string, `None`) is reported
    /// as "not found", exactly like an empty sequence.
    fn first_truthy(&self) -> Option<&T>
    where
        T: Truthy;

    /// Returns the elements matching `predicate`, preserving their order.
    fn filter_by<P>(&self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone;

    /// Returns `true` if every element matches `predicate`; vacuously `true` when empty.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Returns `true` if the sequence holds at least one element.
    fn any(&self) -> bool;

    /// Returns `true` as soon as an element matches `predicate`.
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Projects every element (and its index) through `selector`.
    fn select<R, F>(&self, selector: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> R;

    /// Projects every element (and its index) to a sub-sequence and concatenates
    /// the sub-sequences in order.
    fn select_many<R, I, F>(&self, selector: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> I,
        I: IntoIterator<Item = R>;

    /// Returns the first occurrence of every distinct element, in first-occurrence order.
    ///
    /// Uniqueness is plain `==` equality, so float sequences are supported (NaN,
    /// never being equal to itself, is kept at every occurrence).
    fn distinct(&self) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Returns the first element for every distinct `comparer` key, in
    /// first-occurrence order.
    fn distinct_by<K, F>(&self, comparer: F) -> Vec<T>
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash,
        T: Clone;

    /// Groups elements by the key produced by `selector`.
    ///
    /// Keys appear in the order of their first occurrence, and each group keeps the
    /// relative order of its elements.
    fn group_by<K, F>(&self, selector: F) -> Grouping<K, T>
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash + Clone,
        T: Clone;

    /// Groups elements by a [`KeySelector`], either a key function or a property name.
    ///
    /// A property selector groups elements lacking the property under `None`. The only
    /// failure is an invalid selector (an empty property name), in which case no
    /// grouping is returned.
    fn group_by_selector<K>(&self, selector: KeySelector<'_, T, K>) -> Result<Grouping<K, T>>
    where
        K: Eq + Hash + Clone,
        T: Clone;

    /// Returns the elements present in both sequences.
    ///
    /// The shorter sequence drives the scan and determines the output order; on
    /// equal lengths the receiver drives it. Membership is plain `==` containment,
    /// so duplicates in the driving sequence are all kept.
    fn intersect(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Adds up all elements with the element type's native `+`; an empty sequence
    /// sums to zero.
    ///
    /// # Panics
    ///
    /// Integer overflow behaves as native addition: it panics when overflow checks
    /// are enabled (debug builds) and wraps otherwise. Use
    /// [`SequenceExt::checked_sum`] to detect overflow instead.
    fn sum(&self) -> T
    where
        T: Copy + Zero;

    /// Adds up all elements, returning `None` if the total overflows `T`.
    fn checked_sum(&self) -> Option<T>
    where
        T: Copy + Zero + CheckedAdd;

    /// Returns the arithmetic mean as `f64`.
    ///
    /// Elements are accumulated as `f64`, so the mean of values whose integer sum
    /// would overflow `T` is still defined. An empty sequence yields NaN (0 / 0)
    /// rather than an error.
    fn average(&self) -> f64
    where
        T: ToPrimitive;

    /// Invokes `action` with every element and its index, in order.
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T, usize);
}

impl<T> SequenceExt<T> for [T] {
    fn range(&self, start: isize, end: isize) -> Vec<T>
    where
        T: Clone,
    {
        let lo = start.saturating_sub(1).max(0) as usize;
        let hi = end.clamp(0, self.len() as isize) as usize;
        if lo >= hi {
            return Vec::new();
        }
        self[lo..hi].to_vec()
    }

    fn range_slots(&self, start: isize, end: isize) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let from = start.saturating_sub(1);
        if from >= end {
            return Vec::new();
        }
        if from < 0 || end > self.len() as isize {
            log::debug!(
                "range {start}..={end} exceeds sequence of length {}",
                self.len()
            );
        }
        (from..end)
            .map(|pos| usize::try_from(pos).ok().and_then(|i| self.get(i)).cloned())
            .collect()
    }

    fn skip(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.get(count..).map(<[T]>::to_vec).unwrap_or_default()
    }

    fn first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&item| predicate(item))
    }

    fn first_truthy(&self) -> Option<&T>
    where
        T: Truthy,
    {
        self.first().filter(|item| item.is_truthy())
    }

    fn filter_by<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.iter().filter(|&item| predicate(item)).cloned().collect()
    }

    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    fn any(&self) -> bool {
        !self.is_empty()
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn select<R, F>(&self, mut selector: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> R,
    {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.iter().enumerate().map(|(i, item)| selector(item, i)));
        result
    }

    fn select_many<R, I, F>(&self, mut selector: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> I,
        I: IntoIterator<Item = R>,
    {
        self.iter()
            .enumerate()
            .flat_map(|(i, item)| selector(item, i))
            .collect()
    }

    fn distinct(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        let mut result: Vec<T> = Vec::new();
        for item in self {
            if !result.contains(item) {
                result.push(item.clone());
            }
        }
        result
    }

    fn distinct_by<K, F>(&self, mut comparer: F) -> Vec<T>
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash,
        T: Clone,
    {
        let keys = self.select(|item, _| comparer(item));
        let mut seen = AHashSet::with_capacity(keys.len());
        self.iter()
            .zip(keys)
            .filter_map(|(item, key)| seen.insert(key).then(|| item.clone()))
            .collect()
    }

    fn group_by<K, F>(&self, selector: F) -> Grouping<K, T>
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash + Clone,
        T: Clone,
    {
        grouping::group_with(self, selector)
    }

    fn group_by_selector<K>(&self, selector: KeySelector<'_, T, K>) -> Result<Grouping<K, T>>
    where
        K: Eq + Hash + Clone,
        T: Clone,
    {
        grouping::group_with_selector(self, selector)
    }

    fn intersect(&self, other: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        let (driver, probe) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        driver
            .iter()
            .filter(|&item| probe.contains(item))
            .cloned()
            .collect()
    }

    fn sum(&self) -> T
    where
        T: Copy + Zero,
    {
        let mut total = T::zero();
        SequenceExt::for_each(self, |&item, _| total = total + item);
        total
    }

    fn checked_sum(&self) -> Option<T>
    where
        T: Copy + Zero + CheckedAdd,
    {
        let mut total = Some(T::zero());
        SequenceExt::for_each(self, |item, _| {
            total = total.and_then(|t| t.checked_add(item));
        });
        total
    }

    fn average(&self) -> f64
    where
        T: ToPrimitive,
    {
        if self.is_empty() {
            log::debug!("average of an empty sequence is NaN");
        }
        let mut total = 0.0;
        SequenceExt::for_each(self, |item, _| {
            total += item.to_f64().unwrap_or(f64::NAN);
        });
        total / self.len() as f64
    }

    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T, usize),
    {
        for (i, item) in self.iter().enumerate() {
            action(item, i);
        }
    }
}
