/// Error returned when an operation is called without a sequence.
///
/// An empty sequence is not an error: the scalar measures return `NaN` and
/// the mode functions return an empty [`Mode`](crate::mode::Mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("values must not be absent")]
    MissingValues,
}
