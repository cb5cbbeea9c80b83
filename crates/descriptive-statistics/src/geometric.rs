//! Geometric mean extended to zero and negative values.
//!
//! The geometric mean is only defined for positive numbers. This module
//! extends it as follows:
//!
//! ```text
//! gm(x) = (-1)^m * exp(sum(ln|x_i|) / n)
//! ```
//!
//! where `n` is the number of values and `m` is the number of negative
//! values. Working in log space avoids the overflow and underflow that
//! multiplying many values before taking the n-th root would cause.
//!
//! Special values:
//!
//! - any `NaN` element makes the result `NaN`
//! - otherwise any zero element makes the result exactly `0.0`
//! - an empty sequence gives `NaN`

use crate::{
    error::StatsError,
    numeric::Numeric,
    sequence::{Sequence, require},
};

/// Running state of the log-space product.
#[derive(Debug, Clone, Copy, Default)]
struct LogAccumulator {
    count: usize,
    log_sum: f64,
    negative: bool,
}

impl LogAccumulator {
    /// Adds a non-zero, non-NaN value.
    fn push(&mut self, value: f64) {
        debug_assert!(value != 0.0 && !value.is_nan());
        self.count += 1;
        self.log_sum += value.abs().ln();
        if value < 0.0 {
            self.negative = !self.negative;
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn geometric_mean(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        let magnitude = (self.log_sum / self.count as f64).exp();
        if self.negative { -magnitude } else { magnitude }
    }
}

/// Computes the geometric mean of `values`.
///
/// The result is negative iff an odd number of elements are negative, and
/// its magnitude is the geometric mean of the absolute values.
///
/// # Returns
///
/// * `Ok(NaN)` - if `values` is empty or contains `NaN`
/// * `Ok(0.0)` - if `values` contains zero
/// * `Err(StatsError::MissingValues)` - if `values` is absent
///
/// # Examples
///
/// ```
/// use descriptive_statistics::geometric_mean;
///
/// let gm = geometric_mean(&[2, 8]).unwrap();
/// assert!((gm - 4.0).abs() < 1e-12);
///
/// let gm = geometric_mean(&[-2.0, 8.0]).unwrap();
/// assert!((gm + 4.0).abs() < 1e-12);
///
/// assert_eq!(geometric_mean(&[3, 0, 5]), Ok(0.0));
/// ```
pub fn geometric_mean<S>(values: &S) -> Result<f64, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    Ok(geometric_mean_of(require(values)?))
}

pub(crate) fn geometric_mean_of<T>(values: &[T]) -> f64
where
    T: Numeric,
{
    let mut acc = LogAccumulator::default();
    let mut has_zero = false;
    for value in values.iter().map(|v| v.to_f64()) {
        if value.is_nan() {
            return f64::NAN;
        }
        if value == 0.0 {
            has_zero = true;
        } else {
            acc.push(value);
        }
    }
    if has_zero {
        return 0.0;
    }
    acc.geometric_mean()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_positive_values() {
        assert_close(geometric_mean(&[2, 8]).unwrap(), 4.0);
        assert_close(geometric_mean(&[1_u32, 3, 9]).unwrap(), 3.0);
        assert_close(geometric_mean(&[5.0_f32]).unwrap(), 5.0);
    }

    #[test]
    fn test_sign_follows_negative_count() {
        assert_close(geometric_mean(&[-2, -8]).unwrap(), 4.0);
        assert_close(geometric_mean(&[-2, 8]).unwrap(), -4.0);
        assert_close(geometric_mean(&[-1_i64, -3, -9]).unwrap(), -3.0);
    }

    #[test]
    fn test_zero_short_circuits() {
        assert_eq!(geometric_mean(&[0, 1, 2]), Ok(0.0));
        assert_eq!(geometric_mean(&[-4.0_f64, 0.0]), Ok(0.0));
        assert_eq!(geometric_mean(&[-0.0_f32]), Ok(0.0));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(geometric_mean(&[1.0, f64::NAN, 2.0]).unwrap().is_nan());
        assert!(geometric_mean(&[0.0_f32, f32::NAN]).unwrap().is_nan());
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let values = [1e200_f64, 1e200, 1e200];
        assert_close(geometric_mean(&values).unwrap() / 1e200, 1.0);
        let values = [i64::MAX; 64];
        let gm = geometric_mean(&values).unwrap();
        assert!((gm / i64::MAX as f64 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_absent() {
        assert!(geometric_mean(&Vec::<i32>::new()).unwrap().is_nan());
        assert_eq!(
            geometric_mean(&None::<Vec<i32>>),
            Err(StatsError::MissingValues)
        );
    }

    #[test]
    fn test_accumulator_without_values_is_nan() {
        assert!(LogAccumulator::default().geometric_mean().is_nan());
    }
}
