use contracts::domain::vendor::{TopUp, Vendor};
use contracts::shared::query::{DateRangeQuery, PageQuery, PagedResponse};
use serde::Serialize;

use crate::shared::api_utils::get_json;

pub async fn fetch_vendors(page: &PageQuery) -> Result<PagedResponse<Vendor>, String> {
    let qs = serde_qs::to_string(page).map_err(|e| e.to_string())?;
    get_json(&format!("/api/vendors?{}", qs)).await
}

/// Query string for `GET /api/topups`.
#[derive(Debug, Clone, Serialize)]
pub struct TopUpListQuery {
    #[serde(rename = "StartDateUtc")]
    pub start_date_utc: String,
    #[serde(rename = "EndDateUtc")]
    pub end_date_utc: String,
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "topUpBy", skip_serializing_if = "Option::is_none")]
    pub top_up_by: Option<String>,
    #[serde(rename = "vendorId", skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
}

impl TopUpListQuery {
    pub fn new(
        range: &DateRangeQuery,
        page: &PageQuery,
        status: Option<String>,
        top_up_by: Option<String>,
        vendor_id: Option<String>,
    ) -> Self {
        Self {
            start_date_utc: range.start_date_utc.clone(),
            end_date_utc: range.end_date_utc.clone(),
            page_number: page.page_number,
            page_size: page.page_size,
            status,
            top_up_by,
            vendor_id,
        }
    }
}

pub async fn fetch_topups(query: &TopUpListQuery) -> Result<PagedResponse<TopUp>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/topups?{}", qs)).await
}
