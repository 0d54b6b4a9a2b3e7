use serde::{Deserialize, Serialize};

use super::common::{AgentId, EntityTimestamps, SupervisorId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Active,
    Suspended,
    Training,
}

impl AgentStatus {
    pub const ALL: &'static [AgentStatus] = &[
        AgentStatus::Active,
        AgentStatus::Suspended,
        AgentStatus::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Suspended => "Suspended",
            AgentStatus::Training => "Training",
        }
    }
}

/// Field agent (customer registration, meter installation, collections).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: AgentId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub region: String,
    pub supervisor_name: Option<String>,
    pub status: AgentStatus,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

/// Supervisor owning a region's agent roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    pub id: SupervisorId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub region: String,
    pub agents_count: u32,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}
