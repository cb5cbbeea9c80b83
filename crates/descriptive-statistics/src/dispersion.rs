//! Measures of dispersion: population variance and standard deviation.

use crate::{
    central::mean_of,
    error::StatsError,
    numeric::Numeric,
    sequence::{Sequence, require},
};

/// Computes the population variance of `values`.
///
/// This is the mean of the squared deviations from the arithmetic mean, so
/// the divisor is `n` rather than `n - 1`. Every step is carried out in `f64`.
///
/// # Returns
///
/// * `Ok(variance)` - `NaN` if `values` is empty
/// * `Err(StatsError::MissingValues)` - if `values` is absent
///
/// # Examples
///
/// ```
/// use descriptive_statistics::variance;
///
/// assert_eq!(variance(&[2, 4, 4, 4, 5, 5, 7, 9]), Ok(4.0));
/// ```
pub fn variance<S>(values: &S) -> Result<f64, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    Ok(variance_of(require(values)?))
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn variance_of<T>(values: &[T]) -> f64
where
    T: Numeric,
{
    let mean = mean_of(values);
    values
        .iter()
        .map(|v| (v.to_f64() - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64
}

/// Computes the population standard deviation of `values`.
///
/// Equal to the square root of [`variance`].
///
/// # Examples
///
/// ```
/// use descriptive_statistics::standard_deviation;
///
/// assert_eq!(standard_deviation(&[2, 4, 4, 4, 5, 5, 7, 9]), Ok(2.0));
/// assert!(standard_deviation(&Vec::<i32>::new()).unwrap().is_nan());
/// ```
pub fn standard_deviation<S>(values: &S) -> Result<f64, StatsError>
where
    S: Sequence + ?Sized,
    S::Item: Numeric,
{
    variance(values).map(f64::sqrt)
}
