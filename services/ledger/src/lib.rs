//! Ledger Engine Service
//!
//! Order lifecycle, execution, and portfolio accounting over a single
//! in-memory ledger shared by all callers.
//!
//! **Key Invariants:**
//! - One critical section guards all ledger state; compound writes
//!   (trade + order status + position) are atomic to readers
//! - Weighted-average cost basis always consistent with the trade history
//! - Holdings are removed the moment their net position returns to zero
//! - Mark-to-market values are refreshed on read, never served stale

pub mod catalog;
pub mod execution;
pub mod orders;
pub mod portfolio;
pub mod store;

pub use execution::ExecutionEngine;
pub use orders::{OrderManager, OrderPlacement, OrderRequest};
pub use portfolio::{PortfolioAccountant, PortfolioSummary};
pub use store::{LedgerStats, LedgerStore};
