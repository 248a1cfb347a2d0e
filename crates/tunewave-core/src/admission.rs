//! Withdrawal admission checks.
//!
//! Validates a withdrawal request against the balance computed by the ledger
//! engine and the platform minimum. Callers recompute the balance from source
//! records immediately before admitting; the check sequence is not guarded by
//! any lock, matching the platform's low-contention execution model.

use serde::Deserialize;

use crate::error::AdmissionError;
use crate::UserId;

/// Platform-wide minimum withdrawal amount, in base currency units.
pub const MIN_WITHDRAWAL_AMOUNT: f64 = 500.0;

/// A withdrawal request as submitted by a user.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalRequest {
    /// The requesting user.
    pub user_id: UserId,

    /// Requested amount.
    pub amount: f64,

    /// UPI payout identifier.
    pub upi_id: String,

    /// Payee display name.
    pub upi_name: String,
}

/// Admit or reject a withdrawal request against the given available balance.
///
/// Checks run in a fixed order: structural validation first (naming the
/// first invalid field), then the balance check, then the platform minimum.
/// The balance check deliberately precedes the minimum check.
///
/// # Errors
///
/// - [`AdmissionError::Validation`] for a non-positive amount or an empty
///   UPI identifier or payee name.
/// - [`AdmissionError::InsufficientBalance`] when the amount exceeds the
///   available balance.
/// - [`AdmissionError::BelowMinimum`] when the amount is under
///   [`MIN_WITHDRAWAL_AMOUNT`].
pub fn admit(request: &WithdrawalRequest, available_balance: f64) -> Result<(), AdmissionError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(AdmissionError::Validation {
            field: "amount",
            message: "amount must be a positive number",
        });
    }
    if request.upi_id.trim().is_empty() {
        return Err(AdmissionError::Validation {
            field: "upi_id",
            message: "UPI ID is required",
        });
    }
    if request.upi_name.trim().is_empty() {
        return Err(AdmissionError::Validation {
            field: "upi_name",
            message: "account name is required",
        });
    }

    if request.amount > available_balance {
        return Err(AdmissionError::InsufficientBalance {
            available: available_balance,
            requested: request.amount,
        });
    }

    if request.amount < MIN_WITHDRAWAL_AMOUNT {
        return Err(AdmissionError::BelowMinimum {
            minimum: MIN_WITHDRAWAL_AMOUNT,
        });
    }

    Ok(())
}
