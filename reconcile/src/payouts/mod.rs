//! Commission Payout Generator
//!
//! Produces the month's new retainer-commission candidates for active
//! referrals without duplicating already-generated periods or exceeding
//! the lifetime cap. Candidates are returned to the caller for
//! confirmation and batch persistence; this module never writes.

mod generator;

#[cfg(test)]
mod tests;

pub use generator::*;
