pub mod aggregate;
pub mod history;
pub mod list_state;
pub mod query;

pub use aggregate::{CompanyRef, LatestInvoice, Shipment};
pub use history::{HistoryShipment, InvoiceHistoryItem, ShipmentHistoryResponse, ShipmentSummary};
pub use list_state::{RequestSequencer, RequestTicket, ShipmentListState};
pub use query::{
    total_pages, PageInfo, ShipmentListQuery, ShipmentListResponse, ShipmentQueryState, SortOrder,
    PAGE_SIZE,
};
