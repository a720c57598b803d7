/// Reasons a probability table is rejected by [`Discrete::configure`](crate::generator::Discrete::configure).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("non-numeric value at entry {index}")]
    NonNumeric { index: usize },

    #[error("duplicate outcome at entry {index}")]
    DuplicateOutcome { index: usize },

    #[error("probability out of range: entry {index} has {probability}")]
    OutOfRange { index: usize, probability: f64 },

    #[error("probabilities do not sum to 1: got {sum}")]
    SumMismatch { sum: f64 },
}
