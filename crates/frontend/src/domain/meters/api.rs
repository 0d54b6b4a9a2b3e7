use contracts::domain::meter::{Meter, MeterInstallation};
use contracts::shared::query::{PageQuery, PagedResponse};
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::{get_json, post_unit};

/// Query string for `GET /api/meters`.
#[derive(Debug, Clone, Serialize)]
pub struct MeterListQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "meterType", skip_serializing_if = "Option::is_none")]
    pub meter_type: Option<String>,
    #[serde(rename = "search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl MeterListQuery {
    pub fn new(page: &PageQuery, meter_type: Option<String>, search: Option<String>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            meter_type,
            search,
        }
    }
}

pub async fn fetch_meters(query: &MeterListQuery) -> Result<PagedResponse<Meter>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/meters?{}", qs)).await
}

pub async fn create_installation(payload: &MeterInstallation) -> Result<(), String> {
    post_unit("/api/meters/installations", payload).await
}

/// Installer pick-list entry (active field agents, keyed by staff number).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerOption {
    pub id: i64,
    pub full_name: String,
}

pub async fn fetch_installer_agents() -> Result<Vec<InstallerOption>, String> {
    get_json("/api/agents/installers").await
}
