//! HTTP handlers, one module per resource

pub mod health;
pub mod instruments;
pub mod orders;
pub mod portfolio;
pub mod trades;
