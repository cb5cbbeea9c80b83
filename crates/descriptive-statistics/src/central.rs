//! Measures of central tendency: arithmetic mean and median.

use crate::{
    error::StatsError,
    numeric::{Numeric, wide_sum},
    sequence::{Sequence, require},
};

/// Computes the arithmetic mean of `values`.
///
/// The sum is accumulated in a type wider than the elements, so integer
/// inputs near their type's bounds do not overflow.
///
/// # Returns
///
/// * `Ok(mean)` - `NaN` if `values` is empty
/// * `Err(StatsError::MissingValues)` - if `values` is absent
///
/// # Examples
///
/// ```
/// use descriptive_statistics::arithmetic_mean;
///
/// assert_eq!(arithmetic_mean(&[1, 2, 3, 4]), Ok(2.5));
/// assert!(arithmetic_mean(&Vec::<f64>::new()).unwrap().is_nan());
/// ```
pub fn arithmetic_mean<S>(values: &S) -> Result<f64, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    Ok(mean_of(require(values)?))
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean_of<T>(values: &[T]) -> f64
where
    T: Numeric,
{
    wide_sum(values) / values.len() as f64
}

/// Computes the median of `values`.
///
/// A working copy is sorted ascending; `values` itself is left untouched.
/// For an even number of values the result is the midpoint of the two
/// central elements.
///
/// # Returns
///
/// * `Ok(median)` - `NaN` if `values` is empty
/// * `Err(StatsError::MissingValues)` - if `values` is absent
///
/// # Examples
///
/// ```
/// use descriptive_statistics::median;
///
/// assert_eq!(median(&[3, 1, 2]), Ok(2.0));
/// assert_eq!(median(&[4, 1, 3, 2]), Ok(2.5));
/// ```
pub fn median<S>(values: &S) -> Result<f64, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    let mut sorted = require(values)?.to_vec();
    sorted.sort_by(Numeric::total_cmp);
    Ok(median_of_sorted(&sorted))
}

pub(crate) fn median_of_sorted<T>(sorted_values: &[T]) -> f64
where
    T: Numeric,
{
    let len = sorted_values.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted_values[mid].to_f64()
    } else {
        sorted_values[mid - 1]
            .to_f64()
            .midpoint(sorted_values[mid].to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_integers() {
        assert_eq!(arithmetic_mean(&[1, 2, 3, 4, 5]), Ok(3.0));
        assert_eq!(arithmetic_mean(&[-7_i64, 3]), Ok(-2.0));
        assert_eq!(arithmetic_mean(&[1_u8, 2]), Ok(1.5));
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let values = [i64::MAX, i64::MAX];
        assert_eq!(arithmetic_mean(&values), Ok(i64::MAX as f64));
        let values = [i32::MIN, i32::MIN, i32::MIN];
        assert_eq!(arithmetic_mean(&values), Ok(f64::from(i32::MIN)));
    }

    #[test]
    fn test_mean_of_floats() {
        let mean = arithmetic_mean(&[0.1_f32, 0.2, 0.3]).unwrap();
        assert!((mean - 0.2).abs() < 1e-6);
        assert_eq!(arithmetic_mean(&vec![2.5_f64, -2.5]), Ok(0.0));
    }

    #[test]
    fn test_mean_empty_is_nan() {
        let empty: [i32; 0] = [];
        assert!(arithmetic_mean(&empty).unwrap().is_nan());
    }

    #[test]
    fn test_mean_absent() {
        assert_eq!(
            arithmetic_mean(&None::<Vec<i32>>),
            Err(StatsError::MissingValues)
        );
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1, 2, 3]), Ok(2.0));
        assert_eq!(median(&[9_u64, 1, 5, 7, 3]), Ok(5.0));
        assert_eq!(median(&[42_i16]), Ok(42.0));
    }

    #[test]
    fn test_median_even_uses_both_central_elements() {
        assert_eq!(median(&[1, 2, 3, 4]), Ok(2.5));
        assert_eq!(median(&[10.0_f64, 2.0]), Ok(6.0));
        assert_eq!(median(&[i64::MAX, i64::MAX]), Ok(i64::MAX as f64));
    }

    #[test]
    fn test_median_leaves_input_unsorted() {
        let values = vec![5, 3, 1, 4, 2];
        assert_eq!(median(&values), Ok(3.0));
        assert_eq!(values, [5, 3, 1, 4, 2]);
    }

    #[test]
    fn test_median_empty_and_absent() {
        assert!(median(&Vec::<f32>::new()).unwrap().is_nan());
        assert_eq!(median(&None::<[f32; 2]>), Err(StatsError::MissingValues));
    }
}
