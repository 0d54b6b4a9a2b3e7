use serde::{Deserialize, Serialize};

/// Headline figures for the consumption dashboard's stat cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_consumption_kwh: f64,
    pub active_meters: u64,
    pub revenue_collected: f64,
    pub open_disputes: u64,
}

/// One day of aggregated consumption/vending figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionPoint {
    pub date: String,
    pub consumption_kwh: f64,
    pub revenue: f64,
    pub vend_count: u64,
}

/// Per-agent performance aggregate for the selected period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceRow {
    pub agent_name: String,
    pub region: String,
    pub customers_onboarded: u64,
    pub meters_installed: u64,
    pub payments_collected: u64,
    pub amount_collected: f64,
    pub success_rate: f64,
}
