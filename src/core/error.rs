//! Error handling logic

use std::fmt;

/// Error types raised by circuit construction and simulation.
///
/// All errors are detected synchronously, either while a circuit is being
/// validated (before any gate touches the state vector) or at run time.
/// None of them is recoverable by retrying: simulation is deterministic for
/// a given input and seed, so a failed run fails identically on retry and
/// the caller must fix the input instead.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QsearchError {
    /// A structurally invalid circuit or search request: qubit or classical
    /// bit index out of range, mismatched counts, a malformed target
    /// pattern, or a zero-width search register.
    Configuration {
        /// Description of the structural problem.
        message: String,
    },

    /// The post-run probability distribution failed the normalization check.
    /// This signals a bug in the gate kernels, not a user error, and is
    /// always fatal.
    NumericalDrift {
        /// Description of the drift, including the offending norm.
        message: String,
    },

    /// An invalid sampling request, such as a shot count of zero.
    Sampling {
        /// Description of the sampling problem.
        message: String,
    },
}

impl QsearchError {
    /// Shorthand for a `Configuration` error with an owned message.
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        QsearchError::Configuration { message: message.into() }
    }
}

impl fmt::Display for QsearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QsearchError::Configuration { message } => write!(f, "Configuration Error: {}", message),
            QsearchError::NumericalDrift { message } => write!(f, "Numerical Drift: {}", message),
            QsearchError::Sampling { message } => write!(f, "Sampling Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QsearchError {}
