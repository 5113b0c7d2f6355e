//! Retainer commission candidate generation

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{
    PayoutStatus, PayoutType, Project, Referral, ReferralPayout, ReferralPayoutCreate,
};

use crate::money::{resolve, to_f64};
use crate::period::MonthPeriod;

/// Generate the retainer-commission candidates for one calendar month.
///
/// Deterministic over its inputs and side-effect free: running twice
/// without persisting yields identical candidate lists, and existing
/// payouts are never touched. The in-memory period check here is a UX
/// nicety - the store's uniqueness constraint on
/// `(referral_id, payout_type, period month/year)` is the authoritative
/// guard against two operators generating the same month concurrently.
///
/// Per referral, in order:
/// - only `ACTIVE` referrals participate;
/// - a retainer payout already covering the target month means the
///   period is done (idempotency);
/// - the lifetime cap counts retainer payouts of any status, cancelled
///   included;
/// - a non-positive amount (missing project, null retainer, null rate)
///   emits nothing rather than a zero-amount record.
pub fn generate_retainer_payouts(
    referrals: &[Referral],
    projects: &[Project],
    existing: &[ReferralPayout],
    period: MonthPeriod,
) -> Vec<ReferralPayoutCreate> {
    let retainers: HashMap<&str, Decimal> = projects
        .iter()
        .map(|p| (p.id.as_str(), resolve(p.monthly_retainer)))
        .collect();

    let mut candidates = Vec::new();

    for referral in referrals {
        if !referral.is_active() {
            continue;
        }

        let history: Vec<&ReferralPayout> = existing
            .iter()
            .filter(|p| p.referral_id == referral.id && p.payout_type == PayoutType::Retainer)
            .collect();

        if history.iter().any(|p| period.contains(p.period_start)) {
            tracing::debug!(referral_id = %referral.id, %period, "payout already generated, skipping");
            continue;
        }

        if history.len() as u32 >= referral.commission_months {
            tracing::debug!(
                referral_id = %referral.id,
                months = referral.commission_months,
                "commission cap reached, skipping"
            );
            continue;
        }

        let retainer = retainers
            .get(referral.project_id.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);
        let amount = retainer * resolve(referral.commission_rate) / Decimal::ONE_HUNDRED;
        if amount <= Decimal::ZERO {
            tracing::debug!(referral_id = %referral.id, "non-positive amount, skipping");
            continue;
        }

        candidates.push(ReferralPayoutCreate {
            referral_id: referral.id.clone(),
            payout_type: PayoutType::Retainer,
            period_start: period.start(),
            period_end: period.end(),
            amount: to_f64(amount),
            status: PayoutStatus::Pending,
        });
    }

    candidates
}
