//! In-memory payout store
//!
//! Reference implementation of the persistence contract, used directly
//! in tests and as the model for whatever hosted store the console runs
//! against. Batch inserts are all-or-nothing: one conflicting candidate
//! fails the whole batch and nothing is written.

use chrono::NaiveDate;
use shared::models::{PayoutStatus, ReferralPayout, ReferralPayoutCreate};

use super::{StoreError, StoreResult};
use crate::period::MonthPeriod;

#[derive(Debug, Default)]
pub struct MemoryStore {
    payouts: Vec<ReferralPayout>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing payout, bypassing uniqueness (test fixtures and
    /// migration of records already on file)
    pub fn seed(&mut self, payout: ReferralPayout) {
        self.payouts.push(payout);
    }

    /// Insert a generated batch, enforcing one retainer payout per
    /// `(referral_id, payout_type, month/year)`. All-or-nothing: on
    /// conflict nothing is inserted and the caller gets the offending
    /// referral and period back.
    pub fn insert_payouts(
        &mut self,
        candidates: Vec<ReferralPayoutCreate>,
    ) -> StoreResult<Vec<ReferralPayout>> {
        for candidate in &candidates {
            let period = MonthPeriod::of(candidate.period_start);
            let conflict = self.payouts.iter().any(|p| {
                p.referral_id == candidate.referral_id
                    && p.payout_type == candidate.payout_type
                    && period.contains(p.period_start)
            });
            if conflict {
                return Err(StoreError::AlreadyExists {
                    referral_id: candidate.referral_id.clone(),
                    period: period.to_string(),
                });
            }
        }

        // Duplicates inside the batch itself would also violate the
        // constraint once inserted
        for (i, a) in candidates.iter().enumerate() {
            let period = MonthPeriod::of(a.period_start);
            for b in &candidates[i + 1..] {
                if a.referral_id == b.referral_id
                    && a.payout_type == b.payout_type
                    && period.contains(b.period_start)
                {
                    return Err(StoreError::AlreadyExists {
                        referral_id: a.referral_id.clone(),
                        period: period.to_string(),
                    });
                }
            }
        }

        let inserted: Vec<ReferralPayout> = candidates
            .into_iter()
            .map(|c| {
                self.next_id += 1;
                ReferralPayout {
                    id: format!("referral_payout:{}", self.next_id),
                    referral_id: c.referral_id,
                    payout_type: c.payout_type,
                    period_start: c.period_start,
                    period_end: c.period_end,
                    amount: c.amount,
                    status: c.status,
                    paid_date: None,
                    payment_reference: None,
                }
            })
            .collect();

        tracing::info!(count = inserted.len(), "inserted payout batch");
        self.payouts.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    /// Mark pending payouts paid. Unknown ids are an error; rows that
    /// are already paid or cancelled are left untouched - a bulk UI
    /// action over a stale selection should not abort the batch.
    pub fn mark_paid(
        &mut self,
        ids: &[&str],
        payment_reference: Option<&str>,
        today: NaiveDate,
    ) -> StoreResult<Vec<ReferralPayout>> {
        for id in ids {
            if !self.payouts.iter().any(|p| p.id == *id) {
                return Err(StoreError::NotFound(format!("payout {id}")));
            }
        }

        let mut updated = Vec::new();
        for payout in &mut self.payouts {
            if !ids.contains(&payout.id.as_str()) {
                continue;
            }
            if payout.status != PayoutStatus::Pending {
                tracing::warn!(id = %payout.id, status = ?payout.status, "not pending, skipping mark-paid");
                continue;
            }
            payout.mark_paid(today, payment_reference);
            updated.push(payout.clone());
        }
        Ok(updated)
    }

    pub fn payouts(&self) -> &[ReferralPayout] {
        &self.payouts
    }

    pub fn payouts_for(&self, referral_id: &str) -> Vec<&ReferralPayout> {
        self.payouts
            .iter()
            .filter(|p| p.referral_id == referral_id)
            .collect()
    }
}
