//! Error types for the ledger engine
//!
//! Comprehensive error taxonomy using thiserror. Every variant maps to one of
//! the stable outward error codes via [`LedgerError::code`]; HTTP status
//! mapping belongs to the transport layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable outward error codes
///
/// `INSUFFICIENT_BALANCE` and `INVALID_ORDER_STATE` are reserved: no current
/// code path produces them, but callers may rely on the strings staying fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InstrumentNotFound,
    OrderNotFound,
    ValidationError,
    InsufficientBalance,
    InvalidOrderState,
    InternalError,
}

impl ErrorCode {
    /// The wire string for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InstrumentNotFound => "INSTRUMENT_NOT_FOUND",
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ErrorCode::InvalidOrderState => "INVALID_ORDER_STATE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Ledger engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Order quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("Price is required for limit orders")]
    MissingLimitPrice,

    #[error("Price must be greater than zero for limit orders")]
    NonPositiveLimitPrice,

    #[error("Only market orders can be executed immediately")]
    NotMarketOrder,

    #[error("Order must be a limit order with price")]
    NotLimitOrder,

    #[error("Instrument {symbol} not found")]
    InstrumentNotFound { symbol: String },

    #[error("Order with ID {order_id} not found")]
    OrderNotFound { order_id: String },

    #[error("Insufficient balance for {symbol}: required {required}, available {available}")]
    InsufficientBalance {
        symbol: String,
        required: i64,
        available: i64,
    },

    #[error("Order {order_id} is in {current_state} state, required {required_state}")]
    InvalidOrderState {
        order_id: String,
        current_state: String,
        required_state: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LedgerError {
    /// Outward error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::NonPositiveQuantity
            | LedgerError::MissingLimitPrice
            | LedgerError::NonPositiveLimitPrice
            | LedgerError::NotMarketOrder
            | LedgerError::NotLimitOrder => ErrorCode::ValidationError,
            LedgerError::InstrumentNotFound { .. } => ErrorCode::InstrumentNotFound,
            LedgerError::OrderNotFound { .. } => ErrorCode::OrderNotFound,
            LedgerError::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            LedgerError::InvalidOrderState { .. } => ErrorCode::InvalidOrderState,
            LedgerError::Internal { .. } => ErrorCode::InternalError,
        }
    }
}
