use super::aggregate::{CompanyRef, Shipment};
use crate::enums::ShipmentMode;
use crate::shared::serde_helpers::{number_or_string, text_or_number};
use serde::{Deserialize, Serialize};

/// One invoice ever uploaded for a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceHistoryItem {
    pub id: String,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub price: f64,
    #[serde(deserialize_with = "text_or_number::deserialize")]
    pub weight: String,
    pub uploaded_at: String,
}

/// Shipment header of the history response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryShipment {
    pub id: String,
    pub tracking_number: String,
    pub provider: String,
    pub mode: ShipmentMode,
    pub origin_country: String,
    pub destination_country: String,
    pub company: CompanyRef,
}

/// Body of `GET /api/shipments/{id}/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentHistoryResponse {
    pub shipment: HistoryShipment,
    pub history: Vec<InvoiceHistoryItem>,
}

/// What the history dialog needs to know about the selected shipment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentSummary {
    pub id: String,
    pub tracking_number: String,
    pub company_name: String,
}

impl From<&Shipment> for ShipmentSummary {
    fn from(s: &Shipment) -> Self {
        Self {
            id: s.id.clone(),
            tracking_number: s.tracking_number.clone(),
            company_name: s.company.name.clone(),
        }
    }
}
