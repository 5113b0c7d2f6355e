//! Referral Model

use serde::{Deserialize, Serialize};

/// Referral status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferralStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

/// Referral entity - links a partner to the project they brought in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referral {
    pub id: String,
    pub partner_id: String,
    pub project_id: String,
    pub status: ReferralStatus,
    /// Percentage of the referred project's monthly retainer
    pub commission_rate: Option<f64>,
    /// Lifetime cap on monthly retainer payouts for this referral.
    /// Counts payouts of any status, cancelled included.
    pub commission_months: u32,
}

impl Referral {
    /// Only active referrals are eligible for payout generation
    pub fn is_active(&self) -> bool {
        self.status == ReferralStatus::Active
    }
}

/// Create referral payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralCreate {
    pub partner_id: String,
    pub project_id: String,
    pub commission_rate: Option<f64>,
    pub commission_months: u32,
}
