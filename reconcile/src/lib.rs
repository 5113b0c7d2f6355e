//! Financial reconciliation engine
//!
//! Revenue / labor-cost / profit figures per project under three billing
//! models, plus monthly referral-commission payout generation. Both
//! components are synchronous pure computations over records already
//! loaded from the store; all I/O stays with the caller. The dashboard
//! must never crash on a dirty record, so data-quality problems degrade
//! to zero instead of erroring - see [`money::resolve`].

pub mod billing;
pub mod money;
pub mod payouts;
pub mod period;
pub mod store;

// Re-exports
pub use billing::{MonthlyFinancials, ProjectFinancials, RateTable, WeeklyAdvisory};
pub use payouts::generate_retainer_payouts;
pub use period::MonthPeriod;
pub use store::{MemoryStore, StoreError, StoreResult};
