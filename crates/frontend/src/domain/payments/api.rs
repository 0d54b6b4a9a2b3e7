use contracts::domain::payment::Payment;
use contracts::shared::query::{DateRangeQuery, PageQuery, PagedResponse};
use serde::Serialize;

use crate::shared::api_utils::get_json;

/// Query string for `GET /api/payments`.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentListQuery {
    #[serde(rename = "StartDateUtc")]
    pub start_date_utc: String,
    #[serde(rename = "EndDateUtc")]
    pub end_date_utc: String,
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "collectorType", skip_serializing_if = "Option::is_none")]
    pub collector_type: Option<String>,
    #[serde(rename = "channel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PaymentListQuery {
    pub fn new(
        range: &DateRangeQuery,
        page: &PageQuery,
        collector_type: Option<String>,
        channel: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            start_date_utc: range.start_date_utc.clone(),
            end_date_utc: range.end_date_utc.clone(),
            page_number: page.page_number,
            page_size: page.page_size,
            collector_type,
            channel,
            status,
        }
    }
}

pub async fn fetch_payments(query: &PaymentListQuery) -> Result<PagedResponse<Payment>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("/api/payments?{}", qs)).await
}
