//! Team Member Model

use serde::{Deserialize, Serialize};

/// Team member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    /// Cost rate applied to every entry attributed to this member,
    /// regardless of the project's billing model
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create team member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberCreate {
    pub name: String,
    pub email: Option<String>,
    pub hourly_rate: Option<f64>,
}
