use super::aggregate::Shipment;
use crate::shared::serde_helpers::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed page size of the shipment grid
pub const PAGE_SIZE: u32 = 30;

/// Ordering over shipment creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending creation time
    #[default]
    Newest,
    /// Ascending creation time
    Oldest,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }
}

/// Query parameters of `GET /api/shipments`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentListQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_date::serialize"
    )]
    pub date: Option<NaiveDate>,
    pub sort: SortOrder,
}

impl ShipmentListQuery {
    /// Query string without the leading `?`
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

/// Body of `GET /api/shipments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentListResponse {
    pub items: Vec<Shipment>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Number of pages for `total` items; never less than 1
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination footer model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl PageInfo {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page,
            total_pages: total_pages(total, page_size),
            total,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The footer is hidden for an empty result
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }
}

/// Filter, sort and page selection of the dashboard
///
/// Every filter, date or sort change puts the user back on page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentQueryState {
    pub company_filter: String,
    pub date: Option<NaiveDate>,
    pub sort: SortOrder,
    pub page: u32,
}

impl Default for ShipmentQueryState {
    fn default() -> Self {
        Self {
            company_filter: String::new(),
            date: None,
            sort: SortOrder::Newest,
            page: 1,
        }
    }
}

impl ShipmentQueryState {
    pub fn set_company_filter(&mut self, value: impl Into<String>) {
        self.company_filter = value.into();
        self.page = 1;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
        self.page = 1;
    }

    /// Value of an `<input type="date">`: empty or unparsable clears the filter
    pub fn set_date_input(&mut self, raw: &str) {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        self.set_date(date);
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        *self = Self::default();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Value for an `<input type="date">`
    pub fn date_input_value(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn to_query(&self) -> ShipmentListQuery {
        let company = self.company_filter.trim();
        ShipmentListQuery {
            page: self.page,
            page_size: PAGE_SIZE,
            company_name: (!company.is_empty()).then(|| company.to_string()),
            date: self.date,
            sort: self.sort,
        }
    }
}
