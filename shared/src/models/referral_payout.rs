//! Referral Payout Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payout kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutType {
    /// Monthly commission on the referred project's retainer
    Retainer,
    /// One-off share of an exit success fee (manual entry, never generated)
    SuccessFee,
}

/// Payout status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

/// Referral payout entity
///
/// `(referral_id, payout_type = RETAINER, month/year of period_start)` is
/// unique - that uniqueness is the idempotency key for generation, and the
/// store is the authoritative enforcer. `amount` is frozen at generation
/// time and never recalculated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralPayout {
    pub id: String,
    pub referral_id: String,
    pub payout_type: PayoutType,
    /// First day of the month the payout covers
    pub period_start: NaiveDate,
    /// Last day of the month the payout covers
    pub period_end: NaiveDate,
    pub amount: f64,
    pub status: PayoutStatus,
    pub paid_date: Option<NaiveDate>,
    pub payment_reference: Option<String>,
}

impl ReferralPayout {
    pub fn is_pending(&self) -> bool {
        self.status == PayoutStatus::Pending
    }

    /// Transition pending -> paid. The only automatic transition; there is
    /// no reversal path.
    pub fn mark_paid(&mut self, today: NaiveDate, reference: Option<&str>) {
        self.status = PayoutStatus::Paid;
        self.paid_date = Some(today);
        self.payment_reference = reference.map(str::to_owned);
    }
}

/// Candidate payout emitted by the generator, persisted by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferralPayoutCreate {
    pub referral_id: String,
    pub payout_type: PayoutType,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub amount: f64,
    pub status: PayoutStatus,
}
