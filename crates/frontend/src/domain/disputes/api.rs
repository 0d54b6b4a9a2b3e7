use contracts::domain::dispute::Dispute;
use contracts::shared::query::{PageQuery, PagedResponse};
use serde::Serialize;

use crate::shared::api_utils::get_json;

/// Query string for `GET /api/disputes`.
#[derive(Debug, Clone, Serialize)]
pub struct DisputeListQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DisputeListQuery {
    pub fn new(page: &PageQuery, status: Option<String>, category: Option<String>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            status,
            category,
        }
    }
}

pub async fn fetch_disputes(query: &DisputeListQuery) -> Result<PagedResponse<Dispute>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/disputes?{}", qs)).await
}

pub async fn fetch_dispute(id: &str) -> Result<Dispute, String> {
    get_json(&format!("/api/disputes/{}", id)).await
}
