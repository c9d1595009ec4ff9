use contracts::domain::a001_shipment::{ShipmentListState, SortOrder};
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ShipmentListState> {
    RwSignal::new(ShipmentListState::default())
}

/// Value bound to the sort `<Select>`
pub fn sort_select_value(state: RwSignal<ShipmentListState>) -> RwSignal<String> {
    RwSignal::new(state.with_untracked(|s| s.query.sort.code().to_string()))
}

pub fn parse_sort(value: &str) -> SortOrder {
    SortOrder::from_code(value).unwrap_or_default()
}
