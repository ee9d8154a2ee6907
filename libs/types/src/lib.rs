//! Types library for the order-management ledger
//!
//! This library provides all core type definitions shared by the ledger engine
//! and the gateway, ensuring type safety and deterministic decimal arithmetic.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, TradeId, Symbol)
//! - `numeric`: Fixed-point decimal types (Price)
//! - `instrument`: Instrument catalog types
//! - `order`: Order lifecycle types
//! - `trade`: Trade execution types
//! - `holding`: Portfolio holding and cost-basis types
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod holding;
pub mod ids;
pub mod instrument;
pub mod numeric;
pub mod order;
pub mod trade;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::holding::*;
    pub use crate::ids::*;
    pub use crate::instrument::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
