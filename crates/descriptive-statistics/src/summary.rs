use serde::{Deserialize, Serialize};

use crate::{
    central::{mean_of, median_of_sorted},
    dispersion::variance_of,
    geometric::geometric_mean_of,
    numeric::Numeric,
};

/// Every descriptive measure of a dataset, computed in one go.
///
/// Each field matches the corresponding free function on the same values, up
/// to floating-point rounding from the different summation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The number of values.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The sign-extended geometric mean, see [`geometric_mean`](crate::geometric::geometric_mean).
    pub geometric_mean: f64,
    /// The median.
    pub median: f64,
    /// The population variance.
    pub variance: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

impl Summary {
    /// Computes the summary of unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use descriptive_statistics::Summary;
    /// let summary = Summary::new([5, 2, 4, 1, 3]).unwrap();
    /// assert_eq!(summary.count, 5);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.variance, 2.0);
    ///
    /// assert!(Summary::new(Vec::<f32>::new()).is_none());
    /// ```
    #[must_use]
    pub fn new<I, T>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Numeric,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(Numeric::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes the summary of values already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted<T>(sorted_values: &[T]) -> Option<Self>
    where
        T: Numeric,
    {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let min = sorted_values.first()?.to_f64();
        let max = sorted_values.last()?.to_f64();
        let variance = variance_of(sorted_values);

        Some(Self {
            count: sorted_values.len(),
            min,
            max,
            mean: mean_of(sorted_values),
            geometric_mean: geometric_mean_of(sorted_values),
            median: median_of_sorted(sorted_values),
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arithmetic_mean, geometric_mean, median, standard_deviation, variance,
    };

    #[test]
    fn test_matches_free_functions() {
        let values = [3.5_f64, -1.0, 8.25, 2.0, 2.0, 10.0];
        let summary = Summary::new(values).unwrap();
        assert_eq!(summary.count, 6);
        assert_eq!(summary.min, -1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(Ok(summary.median), median(&values));

        let pairs = [
            (summary.mean, arithmetic_mean(&values).unwrap()),
            (summary.geometric_mean, geometric_mean(&values).unwrap()),
            (summary.variance, variance(&values).unwrap()),
            (summary.std_dev, standard_deviation(&values).unwrap()),
        ];
        for (actual, expected) in pairs {
            assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
        }
    }

    #[test]
    fn test_single_value() {
        let summary = Summary::new([7_i32]).unwrap();
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.max, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_from_sorted() {
        let summary = Summary::from_sorted(&[1_u8, 2, 3, 4]).unwrap();
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.mean, 2.5);
        assert!(Summary::from_sorted::<u8>(&[]).is_none());
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    #[cfg(debug_assertions)]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Summary::from_sorted(&[3, 1, 2]);
    }

    #[test]
    fn test_serialize() {
        let summary = Summary::new([1, 1]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["std_dev"], 0.0);
    }
}
