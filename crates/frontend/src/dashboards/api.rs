use contracts::domain::analytics::{AgentPerformanceRow, ConsumptionPoint, DashboardSummary};
use contracts::shared::query::DateRangeQuery;

use crate::shared::api_utils::get_json;

pub async fn fetch_summary(range: &DateRangeQuery) -> Result<DashboardSummary, String> {
    let qs = serde_qs::to_string(range).map_err(|e| e.to_string())?;
    get_json(&format!("/api/analytics/summary?{}", qs)).await
}

pub async fn fetch_consumption(range: &DateRangeQuery) -> Result<Vec<ConsumptionPoint>, String> {
    let qs = serde_qs::to_string(range).map_err(|e| e.to_string())?;
    get_json(&format!("/api/analytics/consumption?{}", qs)).await
}

pub async fn fetch_agent_performance(
    range: &DateRangeQuery,
) -> Result<Vec<AgentPerformanceRow>, String> {
    let qs = serde_qs::to_string(range).map_err(|e| e.to_string())?;
    get_json(&format!("/api/analytics/agent-performance?{}", qs)).await
}
