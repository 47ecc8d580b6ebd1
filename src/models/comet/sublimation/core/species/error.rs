use thiserror::Error;

/// Errors that may occur when evaluating ice properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The temperature is outside the range a fit can be extrapolated to.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}
