//! Error types for payment operations.

use thiserror::Error;

use crate::Amount;

/// Error returned by [`PaymentMethod`](super::PaymentMethod) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// A charge exceeded the usable balance (balance plus any overdraft).
    #[error("charge declined: requested {requested}, usable {usable}")]
    Declined { requested: Amount, usable: Amount },

    /// A refund or deposit would push the balance past the credit limit.
    #[error("credit limit exceeded: {balance} + {amount} > limit {limit}")]
    OverLimit {
        amount: Amount,
        balance: Amount,
        limit: Amount,
    },
}
