//! Payout persistence backstop
//!
//! Candidate generation and persistence are separate steps, so two
//! operators can race to insert the same month. The in-memory check in
//! the generator is advisory; the uniqueness constraint enforced here -
//! one retainer payout per `(referral_id, month, year)` - is the actual
//! correctness guarantee. Any production store wired in behind the
//! console must enforce the same constraint (or insert-if-not-exists);
//! a conflict surfaces as [`StoreError::AlreadyExists`] so the UI can
//! say "someone already generated this month's payouts" instead of
//! reporting corruption.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// A payout for this referral/type/period is already on file
    #[error("payout already exists for {referral_id} in {period}")]
    AlreadyExists { referral_id: String, period: String },

    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
