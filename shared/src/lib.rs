//! Shared types for the reconciliation layer
//!
//! Plain record types exchanged with the hosted store and the dashboard
//! screens. No calculation logic lives here; the `reconcile` crate owns
//! the billing and payout computations.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
