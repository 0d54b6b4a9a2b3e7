use serde::{Deserialize, Serialize};

/// UTC date-range filter accepted by every collection endpoint.
/// Wire names follow the API's convention (`StartDateUtc`/`EndDateUtc`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeQuery {
    #[serde(rename = "StartDateUtc")]
    pub start_date_utc: String,
    #[serde(rename = "EndDateUtc")]
    pub end_date_utc: String,
}

impl DateRangeQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date_utc: start.into(),
            end_date_utc: end.into(),
        }
    }
}

/// Paging parameters (`pageNumber` is 1-based on the wire).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 50,
        }
    }
}

/// Paged collection envelope returned by listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
}

impl<T> PagedResponse<T> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_number: 1,
            page_size: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_uses_api_wire_names() {
        let q = DateRangeQuery::new("2026-08-01", "2026-08-23");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["StartDateUtc"], "2026-08-01");
        assert_eq!(json["EndDateUtc"], "2026-08-23");
    }

    #[test]
    fn page_query_wire_names() {
        let q = PageQuery::default();
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["pageSize"], 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PagedResponse::<u8> {
            items: vec![],
            total_count: 101,
            page_number: 1,
            page_size: 50,
        };
        assert_eq!(page.total_pages(), 3);
    }
}
