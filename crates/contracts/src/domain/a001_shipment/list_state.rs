use super::aggregate::Shipment;
use super::query::{PageInfo, ShipmentListQuery, ShipmentListResponse, ShipmentQueryState, PAGE_SIZE};
use crate::shared::error::FetchError;

/// Identifies one list request; only the latest ticket may update the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing request tickets
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Page-scoped view of the shipment list
#[derive(Debug, Clone, Default)]
pub struct ShipmentListState {
    pub query: ShipmentQueryState,
    pub items: Vec<Shipment>,
    pub total: u64,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub is_loaded: bool,
    sequencer: RequestSequencer,
}

impl ShipmentListState {
    /// Marks the list as loading and returns the request to send
    pub fn begin_fetch(&mut self) -> (RequestTicket, ShipmentListQuery) {
        self.is_loading = true;
        self.error = None;
        (self.sequencer.issue(), self.query.to_query())
    }

    /// Replaces the whole result set. Returns `false` for a superseded request.
    pub fn apply_success(&mut self, ticket: RequestTicket, resp: ShipmentListResponse) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.items = resp.items;
        self.total = resp.total;
        self.is_loading = false;
        self.is_loaded = true;
        true
    }

    /// Keeps the previous items so the user can retry. Returns `false` for a superseded request.
    pub fn apply_failure(&mut self, ticket: RequestTicket, err: FetchError) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.error = Some(err);
        self.is_loading = false;
        true
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.query.page, PAGE_SIZE, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::super::query::SortOrder;
    use super::*;
    use crate::domain::a001_shipment::aggregate::CompanyRef;
    use crate::enums::ShipmentMode;

    fn shipment(id: &str) -> Shipment {
        Shipment {
            id: id.to_string(),
            tracking_number: format!("TRK-{id}"),
            provider: "GLS".to_string(),
            mode: ShipmentMode::Export,
            origin_country: "CZ".to_string(),
            destination_country: "DE".to_string(),
            created_at: "2025-10-10T10:00:00Z".to_string(),
            company: CompanyRef {
                id: "c-1".to_string(),
                name: "Beta Logistics a.s.".to_string(),
            },
            latest_invoice: None,
        }
    }

    fn response(ids: &[&str], total: u64, page: u32) -> ShipmentListResponse {
        ShipmentListResponse {
            items: ids.iter().map(|id| shipment(id)).collect(),
            total,
            page,
            page_size: PAGE_SIZE,
        }
    }

    #[test]
    fn test_success_replaces_items() {
        let mut st = ShipmentListState::default();
        let (t1, _) = st.begin_fetch();
        assert!(st.is_loading);
        assert!(st.apply_success(t1, response(&["a", "b"], 2, 1)));
        assert_eq!(st.items.len(), 2);

        let (t2, _) = st.begin_fetch();
        assert!(st.apply_success(t2, response(&["c"], 1, 1)));
        assert_eq!(st.items.len(), 1);
        assert_eq!(st.items[0].id, "c");
        assert!(!st.is_loading);
        assert!(st.is_loaded);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut st = ShipmentListState::default();
        let (t1, _) = st.begin_fetch();
        st.apply_success(t1, response(&["a"], 1, 1));

        let (t2, _) = st.begin_fetch();
        assert!(st.apply_failure(t2, FetchError::Status(500)));
        assert_eq!(st.items.len(), 1);
        assert_eq!(st.error, Some(FetchError::Status(500)));
        assert!(!st.is_loading);

        // retry clears the error
        let _ = st.begin_fetch();
        assert_eq!(st.error, None);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut st = ShipmentListState::default();
        let (slow, _) = st.begin_fetch();
        let (fast, _) = st.begin_fetch();

        assert!(st.apply_success(fast, response(&["new"], 1, 1)));
        assert!(!st.apply_success(slow, response(&["old"], 1, 1)));
        assert_eq!(st.items[0].id, "new");

        assert!(!st.apply_failure(slow, FetchError::Network("timeout".into())));
        assert_eq!(st.error, None);
    }

    #[test]
    fn test_sort_toggle_reissues_first_page() {
        let mut st = ShipmentListState::default();
        st.query.go_to_page(3);
        let (t, _) = st.begin_fetch();
        st.apply_success(t, response(&["a"], 90, 3));

        st.query.set_sort(SortOrder::Oldest);
        let (_, query) = st.begin_fetch();
        assert!(st.is_loading);
        assert_eq!(query.sort, SortOrder::Oldest);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_page_info_scenario() {
        let mut st = ShipmentListState::default();
        st.query.go_to_page(2);
        let (t, _) = st.begin_fetch();
        st.apply_success(t, response(&["a"], 65, 2));

        let info = st.page_info();
        assert_eq!(info.total_pages, 3);
        assert!(info.can_go_prev());
        assert!(info.can_go_next());
    }
}
