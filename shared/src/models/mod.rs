//! Data models
//!
//! Shared between the reconciliation engine and the console screens.
//! All IDs are `String` in `"table:key"` format, matching the hosted
//! store's record ids. Nullable numeric columns are `Option<f64>`;
//! required enums are non-optional so a structurally broken record
//! (e.g. a project without a billing type) fails at deserialization
//! instead of silently defaulting.

pub mod project;
pub mod referral;
pub mod referral_payout;
pub mod team_member;
pub mod time_entry;

// Re-exports
pub use project::*;
pub use referral::*;
pub use referral_payout::*;
pub use team_member::*;
pub use time_entry::*;
