use contracts::domain::agent::{Agent, Supervisor};
use contracts::shared::query::{PageQuery, PagedResponse};
use serde::Serialize;

use crate::shared::api_utils::get_json;

/// Query string for `GET /api/agents`.
#[derive(Debug, Clone, Serialize)]
pub struct AgentListQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "region", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl AgentListQuery {
    pub fn new(page: &PageQuery, status: Option<String>, region: Option<String>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            status,
            region,
        }
    }
}

pub async fn fetch_agents(query: &AgentListQuery) -> Result<PagedResponse<Agent>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/agents?{}", qs)).await
}

pub async fn fetch_supervisors(page: &PageQuery) -> Result<PagedResponse<Supervisor>, String> {
    let qs = serde_qs::to_string(page).map_err(|e| e.to_string())?;
    get_json(&format!("/api/supervisors?{}", qs)).await
}
