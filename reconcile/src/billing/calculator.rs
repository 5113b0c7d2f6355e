//! Project financial calculations
//!
//! Uses rust_decimal for precise accumulation, stores results as f64.
//! The calculators are total: dirty records degrade to zero via
//! [`crate::money::resolve`], they never fail a dashboard render.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{BillingType, Project, TeamMember, TimeEntry};

use crate::money::{ratio, resolve, to_f64};
use crate::period::{self, MonthPeriod};

/// Cost-rate lookup built from the team-member table.
///
/// An entry pointing at a member not in the table is costed at zero
/// rather than rejected - it still counts toward total hours, it just
/// contributes nothing to labor cost.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn from_members(members: &[TeamMember]) -> Self {
        let rates = members
            .iter()
            .map(|m| (m.id.clone(), resolve(m.hourly_rate)))
            .collect();
        Self { rates }
    }

    /// Cost rate for a member, zero when unknown
    pub fn rate(&self, member_id: &str) -> Decimal {
        match self.rates.get(member_id) {
            Some(rate) => *rate,
            None => {
                tracing::debug!(member_id, "no rate on file, costing entry at zero");
                Decimal::ZERO
            }
        }
    }
}

/// Derived financial figures for one project over one entry set
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProjectFinancials {
    /// All logged hours, billable or not
    pub total_hours: f64,
    /// Hours flagged billable
    pub billable_hours: f64,
    /// Σ hours × member cost rate
    pub labor_cost: f64,
    /// Revenue under the project's billing model
    pub revenue: f64,
    /// Revenue already invoiced to the client (hourly projects only;
    /// zero for retainer/exit where revenue is not hours-derived)
    pub billed_revenue: f64,
    /// revenue − labor_cost
    pub profit: f64,
    /// profit / revenue as a fraction, 0 when revenue is 0
    pub margin: f64,
    /// Hours logged over the hour allowance (retainer allowance per
    /// month, engagement budget for hourly). None when no allowance is
    /// configured - absent is not the same as 0% used.
    pub utilization: Option<f64>,
}

impl ProjectFinancials {
    /// Unbilled exposure on hourly projects. Billed entries are expected
    /// to be a subset of billable ones; the clamp keeps the figure sane
    /// when a dirty record violates that.
    pub fn unbilled_revenue(&self) -> f64 {
        (self.revenue - self.billed_revenue).max(0.0)
    }
}

/// One month of the rolling utilization history
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MonthlyFinancials {
    pub period: MonthPeriod,
    pub financials: ProjectFinancials,
}

/// Weekly minimum-hours advisory. Progress-bar input only, never revenue.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeeklyAdvisory {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub hours_logged: f64,
    pub minimum: f64,
    pub met: bool,
}

/// Compute financial figures for a project over the supplied entries.
///
/// The caller decides the window: pass everything for whole-engagement
/// figures, or pre-filter to a month for retainer utilization. Entries
/// belonging to other projects are the caller's bug; they are summed
/// like any other entry.
pub fn project_financials<'a, I>(project: &Project, entries: I, rates: &RateTable) -> ProjectFinancials
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut total_hours = Decimal::ZERO;
    let mut billable_hours = Decimal::ZERO;
    let mut billed_hours = Decimal::ZERO;
    let mut labor_cost = Decimal::ZERO;

    for entry in entries {
        let hours = resolve(entry.hours);
        total_hours += hours;
        if entry.billable {
            billable_hours += hours;
        }
        if entry.client_billed {
            billed_hours += hours;
        }
        labor_cost += hours * rates.rate(&entry.team_member_id);
    }

    let (revenue, billed_revenue, allowance) = match project.billing_type {
        BillingType::Hourly => {
            let rate = resolve(project.hourly_rate);
            (
                billable_hours * rate,
                billed_hours * rate,
                resolve(project.budget_hours),
            )
        }
        // Retainer revenue is the flat monthly fee, independent of hours.
        // Exit projects bill like retainers month to month; the success
        // fee is an event-driven manual entry, not computed here.
        BillingType::Retainer | BillingType::Exit => (
            resolve(project.monthly_retainer),
            Decimal::ZERO,
            resolve(project.retainer_hours_included),
        ),
    };

    let profit = revenue - labor_cost;
    let margin = ratio(profit, revenue);
    let utilization = if allowance.is_zero() {
        None
    } else {
        Some(to_f64(ratio(total_hours, allowance)))
    };

    ProjectFinancials {
        total_hours: to_f64(total_hours),
        billable_hours: to_f64(billable_hours),
        labor_cost: to_f64(labor_cost),
        revenue: to_f64(revenue),
        billed_revenue: to_f64(billed_revenue),
        profit: to_f64(profit),
        margin: to_f64(margin),
        utilization,
    }
}

/// Per-month figures for a rolling history view, oldest month first.
///
/// Months are wall-clock calendar months; each bucket sees only the
/// entries dated inside it, so retainer utilization lines up with what
/// the client was invoiced for.
pub fn monthly_history(
    project: &Project,
    entries: &[TimeEntry],
    rates: &RateTable,
    months: &[MonthPeriod],
) -> Vec<MonthlyFinancials> {
    months
        .iter()
        .map(|period| MonthlyFinancials {
            period: *period,
            financials: project_financials(
                project,
                entries.iter().filter(|e| period.contains(e.date)),
                rates,
            ),
        })
        .collect()
}

/// Hours logged in the week containing `reference_date`, against the
/// project's advisory weekly minimum.
pub fn weekly_advisory(
    project: &Project,
    entries: &[TimeEntry],
    reference_date: NaiveDate,
) -> WeeklyAdvisory {
    let start = period::week_start(reference_date);
    let end = period::week_end(reference_date);

    let mut hours = Decimal::ZERO;
    for entry in entries {
        if entry.date >= start && entry.date <= end {
            hours += resolve(entry.hours);
        }
    }

    let minimum = resolve(project.weekly_hour_minimum);
    WeeklyAdvisory {
        week_start: start,
        week_end: end,
        hours_logged: to_f64(hours),
        minimum: to_f64(minimum),
        met: hours >= minimum,
    }
}
