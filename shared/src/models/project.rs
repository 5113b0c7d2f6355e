//! Project Model

use serde::{Deserialize, Serialize};

/// Billing model enum
///
/// Exactly one billing model applies per project at any time. There is no
/// safe default: a record without a billing type is a data error and fails
/// to deserialize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    /// Revenue = billable hours × project hourly rate
    Hourly,
    /// Flat monthly retainer, independent of logged hours
    Retainer,
    /// Retainer plus an exit success fee (the fee itself is a manual
    /// one-time entry, not computed by this layer)
    Exit,
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: Option<String>,
    pub billing_type: BillingType,
    /// Rate per billable hour (HOURLY only)
    pub hourly_rate: Option<f64>,
    /// Flat monthly fee (RETAINER / EXIT)
    pub monthly_retainer: Option<f64>,
    /// Hour allowance bundled into the monthly retainer
    pub retainer_hours_included: Option<f64>,
    /// Hour budget for the whole engagement (HOURLY)
    pub budget_hours: Option<f64>,
    /// Success-fee percentage of valuation increase (EXIT, data only)
    pub valuation_percentage: Option<f64>,
    /// Valuation at engagement start (EXIT, data only)
    pub baseline_valuation: Option<f64>,
    /// Advisory weekly hour threshold, never enforced
    pub weekly_hour_minimum: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub client_id: Option<String>,
    pub billing_type: BillingType,
    pub hourly_rate: Option<f64>,
    pub monthly_retainer: Option<f64>,
    pub retainer_hours_included: Option<f64>,
    pub budget_hours: Option<f64>,
    pub valuation_percentage: Option<f64>,
    pub baseline_valuation: Option<f64>,
    pub weekly_hour_minimum: Option<f64>,
}
