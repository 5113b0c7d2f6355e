//! Time Entry Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time entry entity
///
/// Revenue and cost contributions are computed independently: an entry can
/// be paid out to the contractor before or after it is billed to the
/// client, with no ordering constraint between the two flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub project_id: String,
    pub team_member_id: String,
    /// Logged hours; a null value counts as zero, never as an error
    pub hours: Option<f64>,
    /// Bucketing key for monthly/weekly rollups
    pub date: NaiveDate,
    /// Chargeable in principle. Informational on retainer/exit projects,
    /// where revenue is not hours-derived.
    #[serde(default)]
    pub billable: bool,
    /// Invoiced to the client. Only meaningful when `billable` is true
    /// and the project is hourly.
    #[serde(default)]
    pub client_billed: bool,
    /// Team member compensated for this entry, independent of billing
    #[serde(default)]
    pub contractor_paid: bool,
    pub description: Option<String>,
}

/// Create time entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryCreate {
    pub project_id: String,
    pub team_member_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub billable: bool,
    pub description: Option<String>,
}
