use crate::enums::ShipmentMode;
use crate::shared::serde_helpers::{number_or_string, text_or_number};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Company owning a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: String,
    pub name: String,
}

/// Snapshot of the most recent invoice attached to a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestInvoice {
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub price: f64,
    /// Weight as the server formats it
    #[serde(deserialize_with = "text_or_number::deserialize")]
    pub weight: String,
    pub uploaded_at: String,
}

/// Shipment as returned by the list endpoint (read-only, server-owned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub tracking_number: String,
    /// Carrier name
    pub provider: String,
    pub mode: ShipmentMode,
    pub origin_country: String,
    pub destination_country: String,
    /// ISO 8601 timestamp
    pub created_at: String,
    pub company: CompanyRef,
    #[serde(default)]
    pub latest_invoice: Option<LatestInvoice>,
}

impl Shipment {
    /// Calendar day of `created_at`, if it parses
    pub fn created_date(&self) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.date_naive());
        }
        let date_part = self.created_at.split('T').next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Price of the latest invoice, 0 when nothing was invoiced yet
    pub fn latest_price(&self) -> f64 {
        self.latest_invoice.as_ref().map(|i| i.price).unwrap_or(0.0)
    }

    pub fn has_history(&self) -> bool {
        self.latest_invoice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "shp-1",
            "trackingNumber": "885335999184",
            "provider": "FedEx",
            "mode": "EXPORT",
            "originCountry": "CZ",
            "destinationCountry": "UK",
            "createdAt": "2025-10-09T08:15:00.000Z",
            "company": { "id": "c-1", "name": "Acme Corporation s.r.o." },
            "latestInvoice": { "price": "457.24", "weight": "1.5", "uploadedAt": "2025-10-10T09:00:00Z" }
        })
    }

    #[test]
    fn test_deserialize_from_api() {
        let s: Shipment = serde_json::from_value(sample()).unwrap();
        assert_eq!(s.mode, ShipmentMode::Export);
        assert_eq!(s.company.name, "Acme Corporation s.r.o.");
        assert_eq!(s.latest_price(), 457.24);
        assert!(s.has_history());
        assert_eq!(s.created_date(), NaiveDate::from_ymd_opt(2025, 10, 9));
    }

    #[test]
    fn test_missing_latest_invoice() {
        let mut v = sample();
        v["latestInvoice"] = serde_json::Value::Null;
        let s: Shipment = serde_json::from_value(v).unwrap();
        assert!(!s.has_history());
        assert_eq!(s.latest_price(), 0.0);

        let mut v = sample();
        v.as_object_mut().unwrap().remove("latestInvoice");
        let s: Shipment = serde_json::from_value(v).unwrap();
        assert!(s.latest_invoice.is_none());
    }
}
