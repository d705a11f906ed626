//! Error types for lagged transforms and the transform registry.

/// Errors raised before a transform produces any output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Lag is below 1 or not smaller than the series length.
    InvalidArgument {
        /// Lag requested by the caller.
        lag: i64,
        /// Length of the input series.
        len: usize,
    },
    /// No entry point is registered under this name or symbol.
    UnknownTransform(String),
    /// A lag was supplied to an entry point whose lag is fixed.
    ArityMismatch {
        /// Stable name of the entry point.
        name: &'static str,
        /// Number of arguments the entry point accepts.
        arity: usize,
    },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::InvalidArgument { lag, len } => write!(
                f,
                "Invalid argument: lag {} is out of range for a series of length {}",
                lag, len
            ),
            TransformError::UnknownTransform(name) => write!(f, "Unknown transform: {}", name),
            TransformError::ArityMismatch { name, arity } => write!(
                f,
                "Transform '{}' takes {} argument(s) and does not accept a lag",
                name, arity
            ),
        }
    }
}

impl std::error::Error for TransformError {}
