//! Most frequent value(s) of a sequence.
//!
//! Four entry points share one result type, [`Mode`]:
//!
//! - [`mode`] for totally ordered values
//! - [`mode_by`] for values ordered by a caller-supplied comparator
//! - [`numeric_mode`] for [`Numeric`] values, including floats
//! - [`mode_hashed`] for values that are hashable but not ordered
//!
//! The ordered variants sort a working copy of references and scan it once,
//! offering each run of equal values to a tracker of the best tied set. The
//! hashed variant counts frequencies in a map and scans the distinct keys.
//! Ties are kept: every value reaching the maximal frequency is returned.

use std::{cmp::Ordering, collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::{
    error::StatsError,
    numeric::Numeric,
    sequence::{Sequence, require},
};

/// The most frequent values of a sequence and their shared frequency.
///
/// Values are unique under the grouping used to compute them. The sorting
/// variants return them in ascending sort order; [`mode_hashed`] returns them
/// in unspecified order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode<T> {
    values: Vec<T>,
    frequency: usize,
}

impl<T> Mode<T> {
    /// The mode of an empty sequence: no values, frequency 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: vec![],
            frequency: 0,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of occurrences of each value in [`Mode::values`].
    #[must_use]
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Mode<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Best tied set seen so far.
#[derive(Debug)]
struct ModeTracker<T> {
    best: Vec<T>,
    frequency: usize,
}

impl<T> ModeTracker<T> {
    fn new() -> Self {
        Self {
            best: vec![],
            frequency: 0,
        }
    }

    /// Finalizes one group of `count` equal values represented by `value`.
    fn offer(&mut self, value: T, count: usize) {
        match count.cmp(&self.frequency) {
            Ordering::Greater => {
                self.best.clear();
                self.best.push(value);
                self.frequency = count;
            }
            Ordering::Equal => self.best.push(value),
            Ordering::Less => {}
        }
    }

    fn finish(self) -> Mode<T> {
        Mode {
            values: self.best,
            frequency: self.frequency,
        }
    }
}

/// Finds the most frequent values of a totally ordered sequence.
///
/// # Examples
///
/// ```
/// use descriptive_statistics::mode;
///
/// let result = mode(&[5, 5, 3, 3, 1]).unwrap();
/// assert_eq!(result.values(), &[3, 5]);
/// assert_eq!(result.frequency(), 2);
///
/// let result = mode(&["b", "a", "b"]).unwrap();
/// assert_eq!(result.values(), &["b"]);
/// ```
pub fn mode<S>(values: &S) -> Result<Mode<S::Item>, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    mode_by(values, Ord::cmp)
}

/// Finds the most frequent values using `compare` for both ordering and
/// grouping.
///
/// Two values belong to the same group when `compare` returns
/// [`Ordering::Equal`], even if they differ under `PartialEq`. Each group is
/// represented by its first member in input order.
///
/// # Examples
///
/// ```
/// use descriptive_statistics::mode_by;
///
/// // Case-insensitive grouping: "A" and "a" share one bucket.
/// let words = ["A", "b", "a", "B", "a"];
/// let result = mode_by(&words, |x, y| x.to_lowercase().cmp(&y.to_lowercase())).unwrap();
/// assert_eq!(result.values(), &["A"]);
/// assert_eq!(result.frequency(), 3);
/// ```
pub fn mode_by<S, F>(values: &S, mut compare: F) -> Result<Mode<S::Item>, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let values = require(values)?;
    let mut sorted = values.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| compare(*a, *b));

    let mut tracker = ModeTracker::new();
    for run in sorted.chunk_by(|a, b| compare(*a, *b) == Ordering::Equal) {
        tracker.offer(run[0].clone(), run.len());
    }
    Ok(tracker.finish())
}

/// Finds the most frequent values of a numeric sequence.
///
/// Values are grouped by [`Numeric::total_cmp`], so for floats `-0.0` and
/// `0.0` are counted separately and `NaN`s with identical bits are grouped.
///
/// # Examples
///
/// ```
/// use descriptive_statistics::numeric_mode;
///
/// let result = numeric_mode(&[1.5, 2.0, 1.5]).unwrap();
/// assert_eq!(result.values(), &[1.5]);
/// assert_eq!(result.frequency(), 2);
/// ```
pub fn numeric_mode<S>(values: &S) -> Result<Mode<S::Item>, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    mode_by(values, Numeric::total_cmp)
}

/// Finds the most frequent values of a hashable sequence without sorting it.
///
/// # Examples
///
/// ```
/// use descriptive_statistics::mode_hashed;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Suit { Hearts, Spades }
///
/// let hand = [Suit::Spades, Suit::Hearts, Suit::Spades];
/// let result = mode_hashed(&hand).unwrap();
/// assert_eq!(result.values(), &[Suit::Spades]);
/// ```
pub fn mode_hashed<S>(values: &S) -> Result<Mode<S::Item>, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Eq + Hash + Clone,
{
    let values = require(values)?;
    let mut frequencies = HashMap::<&S::Item, usize>::new();
    for value in values {
        *frequencies.entry(value).or_default() += 1;
    }

    let mut tracker = ModeTracker::new();
    for (value, count) in frequencies {
        tracker.offer(value.clone(), count);
    }
    Ok(tracker.finish())
}
