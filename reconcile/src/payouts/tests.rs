use chrono::NaiveDate;
use shared::models::{
    BillingType, PayoutStatus, PayoutType, Project, Referral, ReferralPayout, ReferralStatus,
};

use super::*;
use crate::period::MonthPeriod;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn retainer_project(id: &str, retainer: Option<f64>) -> Project {
    Project {
        id: id.into(),
        name: "Project B".into(),
        client_id: None,
        billing_type: BillingType::Retainer,
        hourly_rate: None,
        monthly_retainer: retainer,
        retainer_hours_included: None,
        budget_hours: None,
        valuation_percentage: None,
        baseline_valuation: None,
        weekly_hour_minimum: None,
        is_active: true,
    }
}

fn referral(id: &str, project_id: &str, rate: f64, months: u32) -> Referral {
    Referral {
        id: id.into(),
        partner_id: "partner:1".into(),
        project_id: project_id.into(),
        status: ReferralStatus::Active,
        commission_rate: Some(rate),
        commission_months: months,
    }
}

fn payout(referral_id: &str, period: MonthPeriod, status: PayoutStatus) -> ReferralPayout {
    ReferralPayout {
        id: format!("referral_payout:{}-{}", referral_id, period),
        referral_id: referral_id.into(),
        payout_type: PayoutType::Retainer,
        period_start: period.start(),
        period_end: period.end(),
        amount: 300.0,
        status,
        paid_date: None,
        payment_reference: None,
    }
}

const MARCH: MonthPeriod = MonthPeriod { year: 2025, month: 3 };
const APRIL: MonthPeriod = MonthPeriod { year: 2025, month: 4 };
const MAY: MonthPeriod = MonthPeriod { year: 2025, month: 5 };

/// Referral R from the acceptance sheet: 15% of a 2000 retainer, capped
/// at two months.
#[test]
fn first_generation_emits_the_march_candidate() {
    let referrals = vec![referral("referral:r", "project:b", 15.0, 2)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];

    let candidates = generate_retainer_payouts(&referrals, &projects, &[], MARCH);
    assert_eq!(candidates.len(), 1);
    let c = &candidates[0];
    assert_eq!(c.amount, 300.0);
    assert_eq!(c.period_start, d(2025, 3, 1));
    assert_eq!(c.period_end, d(2025, 3, 31));
    assert_eq!(c.payout_type, PayoutType::Retainer);
    assert_eq!(c.status, PayoutStatus::Pending);
}

#[test]
fn generation_is_deterministic_before_persistence() {
    let referrals = vec![referral("referral:r", "project:b", 15.0, 2)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];

    let first = generate_retainer_payouts(&referrals, &projects, &[], MARCH);
    let second = generate_retainer_payouts(&referrals, &projects, &[], MARCH);
    assert_eq!(first, second);
}

#[test]
fn persisted_month_generates_nothing() {
    let referrals = vec![referral("referral:r", "project:b", 15.0, 2)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];
    let existing = vec![payout("referral:r", MARCH, PayoutStatus::Pending)];

    let candidates = generate_retainer_payouts(&referrals, &projects, &existing, MARCH);
    assert!(candidates.is_empty());

    // The next month is a fresh period
    let candidates = generate_retainer_payouts(&referrals, &projects, &existing, APRIL);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].period_start, d(2025, 4, 1));
}

#[test]
fn cap_stops_generation_in_later_months() {
    let referrals = vec![referral("referral:r", "project:b", 15.0, 2)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];
    let existing = vec![
        payout("referral:r", MARCH, PayoutStatus::Paid),
        payout("referral:r", APRIL, PayoutStatus::Pending),
    ];

    let candidates = generate_retainer_payouts(&referrals, &projects, &existing, MAY);
    assert!(candidates.is_empty());
}

#[test]
fn cap_counts_cancelled_payouts() {
    // The cap is lifetime slots, not unpaid count: a cancelled payout
    // still consumes one. Intentional - change deliberately if the
    // contract reading ever changes.
    let referrals = vec![referral("referral:r", "project:b", 15.0, 3)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];
    let existing = vec![
        payout("referral:r", MonthPeriod { year: 2025, month: 1 }, PayoutStatus::Cancelled),
        payout("referral:r", MonthPeriod { year: 2025, month: 2 }, PayoutStatus::Cancelled),
        payout("referral:r", MARCH, PayoutStatus::Cancelled),
    ];

    let candidates = generate_retainer_payouts(&referrals, &projects, &existing, APRIL);
    assert!(candidates.is_empty());
}

#[test]
fn only_active_referrals_participate() {
    let mut completed = referral("referral:done", "project:b", 15.0, 2);
    completed.status = ReferralStatus::Completed;
    let mut pending = referral("referral:soon", "project:b", 15.0, 2);
    pending.status = ReferralStatus::Pending;
    let active = referral("referral:live", "project:b", 15.0, 2);

    let projects = vec![retainer_project("project:b", Some(2000.0))];
    let candidates =
        generate_retainer_payouts(&[completed, pending, active], &projects, &[], MARCH);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].referral_id, "referral:live");
}

#[test]
fn zero_and_missing_amounts_emit_no_record() {
    let referrals = vec![
        referral("referral:no-project", "project:gone", 15.0, 2),
        referral("referral:no-retainer", "project:null", 15.0, 2),
        {
            let mut r = referral("referral:no-rate", "project:b", 0.0, 2);
            r.commission_rate = None;
            r
        },
        referral("referral:zero-rate", "project:b", 0.0, 2),
    ];
    let projects = vec![
        retainer_project("project:b", Some(2000.0)),
        retainer_project("project:null", None),
    ];

    let candidates = generate_retainer_payouts(&referrals, &projects, &[], MARCH);
    assert!(candidates.is_empty());
}

#[test]
fn success_fee_history_does_not_consume_the_cap() {
    // Manual success-fee payouts are a different payout type and must
    // affect neither idempotency nor the retainer cap.
    let referrals = vec![referral("referral:r", "project:b", 15.0, 1)];
    let projects = vec![retainer_project("project:b", Some(2000.0))];
    let mut fee = payout("referral:r", MARCH, PayoutStatus::Paid);
    fee.payout_type = PayoutType::SuccessFee;

    let candidates = generate_retainer_payouts(&referrals, &projects, &[fee], MARCH);
    assert_eq!(candidates.len(), 1);
}

#[test]
fn amount_is_rounded_to_cents() {
    let referrals = vec![referral("referral:r", "project:b", 12.5, 2)];
    let projects = vec![retainer_project("project:b", Some(3333.33))];

    let candidates = generate_retainer_payouts(&referrals, &projects, &[], MARCH);
    // 3333.33 * 0.125 = 416.66625 -> 416.67
    assert_eq!(candidates[0].amount, 416.67);
}
