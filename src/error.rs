//! Error types for xxrand

/// Errors returned by the checked bounded draws.
///
/// The unchecked draws treat these as contract violations and panic with the
/// same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RandError {
    /// Upper bound of a bounded draw was not positive.
    #[error("invalid argument to {op}: bound must be positive, got {bound}")]
    InvalidBound {
        /// Name of the draw that rejected the bound.
        op: &'static str,
        /// The rejected bound, widened to fit every integer width.
        bound: i128,
    },
}

impl RandError {
    pub(crate) fn invalid_bound(op: &'static str, bound: impl Into<i128>) -> Self {
        RandError::InvalidBound {
            op,
            bound: bound.into(),
        }
    }
}
