//! Billing Calculator
//!
//! Pure revenue / cost / profit figures per project. The revenue formula
//! is selected by the project's billing type; labor cost always comes
//! from the team-member rate table. Nothing here performs I/O or reads
//! the clock - callers pass the entry set and any periods explicitly.

mod calculator;


pub use calculator::*;
