use std::{cmp::Ordering, ops::Add};

/// Numeric element type accepted by the scalar measures.
///
/// Sums are taken in [`Numeric::Acc`], which is wider than the element type,
/// so integer inputs do not overflow before the division in
/// [`arithmetic_mean`](crate::central::arithmetic_mean).
pub trait Numeric: Copy + PartialOrd {
    /// Accumulator used for sums.
    type Acc: Copy + Default + Add<Output = Self::Acc>;

    fn widen(self) -> Self::Acc;

    fn acc_to_f64(acc: Self::Acc) -> f64;

    fn to_f64(self) -> f64;

    /// Total order used for sorting. Floats use the IEEE 754 total order.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Sums `values` in the wide accumulator.
pub(crate) fn wide_sum<T>(values: &[T]) -> f64
where
    T: Numeric,
{
    let sum = values
        .iter()
        .fold(T::Acc::default(), |acc, &value| acc + value.widen());
    T::acc_to_f64(sum)
}

macro_rules! impl_numeric_int {
    ($acc:ty => $($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                type Acc = $acc;

                fn widen(self) -> $acc {
                    <$acc>::from(self)
                }

                #[allow(clippy::cast_precision_loss)]
                fn acc_to_f64(acc: $acc) -> f64 {
                    acc as f64
                }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_numeric_int!(i128 => i8, i16, i32, i64);
impl_numeric_int!(u128 => u8, u16, u32, u64);

macro_rules! impl_numeric_float {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                type Acc = f64;

                fn widen(self) -> f64 {
                    f64::from(self)
                }

                fn acc_to_f64(acc: f64) -> f64 {
                    acc
                }

                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
