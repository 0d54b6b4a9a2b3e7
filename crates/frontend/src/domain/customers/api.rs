use contracts::domain::customer::{Customer, CustomerDraft};
use contracts::shared::query::{PageQuery, PagedResponse};
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::{get_json, post_json};

/// Query string for `GET /api/customers`.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerListQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CustomerListQuery {
    pub fn new(page: &PageQuery, status: Option<String>, search: Option<String>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            status,
            search,
        }
    }
}

pub async fn fetch_customers(
    query: &CustomerListQuery,
) -> Result<PagedResponse<Customer>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/customers?{}", qs)).await
}

pub async fn create_customer(draft: &CustomerDraft) -> Result<Customer, String> {
    post_json("/api/customers", draft).await
}

/// Area office reference entry for the onboarding wizard's select.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOffice {
    pub id: i64,
    pub name: String,
}

pub async fn fetch_area_offices() -> Result<Vec<AreaOffice>, String> {
    get_json("/api/area-offices").await
}
