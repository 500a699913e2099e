//! Fluxo Core - Domain models and pure computation services.
//!
//! This crate contains the core business logic for Fluxo. It is
//! storage- and UI-agnostic: callers fetch recurring expense
//! definitions and period transactions from wherever they live and
//! hand them to the services here as plain in-memory slices.

pub mod classification;
pub mod constants;
pub mod errors;
pub mod recurring;
pub mod reports;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
