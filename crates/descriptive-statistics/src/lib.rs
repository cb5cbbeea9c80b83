//! Descriptive statistics over flat sequences of values.
//!
//! This crate provides pure functions summarizing a fixed collection of
//! numbers:
//!
//! - **Central tendency**: arithmetic mean and median
//! - **Dispersion**: population variance and standard deviation
//! - **Geometric mean**: log-space accumulation that tolerates zero and
//!   negative values
//! - **Mode**: the most frequent value(s), with ties preserved
//! - **Summary**: all of the above in one pass over a dataset
//!
//! Every function accepts any [`Sequence`]: slices, arrays, vectors, or an
//! `Option` of those. An absent sequence (`None`) is rejected with
//! [`StatsError::MissingValues`]. An empty sequence is not an error: the
//! scalar measures return `NaN` and the mode is empty.
//!
//! Numeric measures are generic over [`Numeric`], implemented for `i8`-`i64`,
//! `u8`-`u64`, `f32` and `f64`. All results are `f64`.
//!
//! # Examples
//!
//! ## Scalar measures
//!
//! ```
//! use descriptive_statistics::{arithmetic_mean, median, standard_deviation, variance};
//!
//! let values = [2, 4, 4, 4, 5, 5, 7, 9];
//! assert_eq!(arithmetic_mean(&values), Ok(5.0));
//! assert_eq!(median(&values), Ok(4.5));
//! assert_eq!(variance(&values), Ok(4.0));
//! assert_eq!(standard_deviation(&values), Ok(2.0));
//! ```
//!
//! ## Absent and empty input
//!
//! ```
//! use descriptive_statistics::{StatsError, arithmetic_mean};
//!
//! let missing: Option<Vec<f64>> = None;
//! assert_eq!(arithmetic_mean(&missing), Err(StatsError::MissingValues));
//!
//! let empty: Option<Vec<f64>> = Some(vec![]);
//! assert!(arithmetic_mean(&empty).unwrap().is_nan());
//! ```
//!
//! ## Mode
//!
//! ```
//! use descriptive_statistics::mode;
//!
//! let result = mode(&[1, 2, 2, 3, 3, 3]).unwrap();
//! assert_eq!(result.values(), &[3]);
//! assert_eq!(result.frequency(), 3);
//! ```

pub use self::{
    central::{arithmetic_mean, median},
    dispersion::{standard_deviation, variance},
    error::StatsError,
    geometric::geometric_mean,
    mode::{Mode, mode, mode_by, mode_hashed, numeric_mode},
    numeric::Numeric,
    sequence::Sequence,
    summary::Summary,
};

pub mod central;
pub mod dispersion;
pub mod error;
pub mod geometric;
pub mod mode;
pub mod numeric;
pub mod sequence;
pub mod summary;
