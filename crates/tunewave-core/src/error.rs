//! Error types for the ledger engine and withdrawal admission.

/// Errors from the ledger engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The referenced user does not exist. Surfaced to the caller, never
    /// silently defaulted inside the engine.
    #[error("user not found: {user_id}")]
    UserNotFound {
        /// The user ID that was not found.
        user_id: String,
    },
}

/// Errors from withdrawal admission, in check order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdmissionError {
    /// Malformed input; names the first invalid field.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The first field that failed validation.
        field: &'static str,
        /// Human-readable reason.
        message: &'static str,
    },

    /// The requested amount exceeds the available balance.
    #[error("insufficient balance: available={available}, requested={requested}")]
    InsufficientBalance {
        /// Available balance at validation time.
        available: f64,
        /// Requested withdrawal amount.
        requested: f64,
    },

    /// The requested amount is under the platform-wide minimum.
    #[error("minimum withdrawal amount is {minimum}")]
    BelowMinimum {
        /// The platform minimum.
        minimum: f64,
    },
}
