//! Input abstraction accepted by every measure.
//!
//! A [`Sequence`] is anything that may hold a borrowed slice of values. Plain
//! slices, arrays and vectors always do; `Option<S>` models a sequence that
//! may be absent, and `None` is rejected with [`StatsError::MissingValues`].

use crate::error::StatsError;

/// A collection of values that may be absent.
///
/// # Examples
///
/// ```
/// use descriptive_statistics::Sequence;
///
/// assert_eq!([1, 2, 3].as_values(), Some(&[1, 2, 3][..]));
/// assert_eq!(None::<Vec<i32>>.as_values(), None);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the values, or `None` if the sequence is absent.
    fn as_values(&self) -> Option<&[Self::Item]>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_values(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_values(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_values(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn as_values(&self) -> Option<&[S::Item]> {
        (**self).as_values()
    }
}

impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn as_values(&self) -> Option<&[S::Item]> {
        self.as_ref().and_then(Sequence::as_values)
    }
}

/// Borrows the values of `values`, failing if the sequence is absent.
pub(crate) fn require<S>(values: &S) -> Result<&[S::Item], StatsError>
where
    S: Sequence + ?Sized,
{
    values.as_values().ok_or(StatsError::MissingValues)
}
