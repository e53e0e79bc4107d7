//! Unified error type for the cabinet shop library and binaries.

use thiserror::Error;

/// Every failure the crate can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any error bubbled up from `SeaORM` or the underlying driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied data that fails validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Money value that is negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// No order with this id exists
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// Requested order id
        id: String,
    },

    /// The order exists but holds no receipt with this id
    #[error("Receipt {receipt_id} not found on order {order_id}")]
    ReceiptNotFound {
        /// Order that was searched
        order_id: String,
        /// Requested receipt id
        receipt_id: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
