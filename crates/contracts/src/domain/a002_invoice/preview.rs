use super::record::InvoiceRecordDraft;
use crate::shared::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_COMPANY: &str = "Unknown";
pub const NO_COUNTRY: &str = "-";

/// Row of the per-file preview table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub id: String,
    pub tracking_number: String,
    pub company_name: String,
    pub provider: String,
    pub origin_country: String,
    pub destination_country: String,
    pub invoiced_price: f64,
    pub invoiced_weight: Option<f64>,
    /// Every field of the record was present
    pub is_complete: bool,
}

impl PreviewRow {
    pub fn from_draft(file_name: &str, index: usize, draft: &InvoiceRecordDraft) -> Self {
        let s = &draft.shipment;
        let text = |f: &super::record::Field<String>, default: &str| {
            f.as_ref().present().cloned().unwrap_or_else(|| default.to_string())
        };

        Self {
            id: draft
                .id
                .as_ref()
                .present()
                .cloned()
                .unwrap_or_else(|| format!("file-{file_name}-row-{index}")),
            tracking_number: text(&s.tracking_number, NOT_AVAILABLE),
            company_name: text(&s.company.name, UNKNOWN_COMPANY),
            provider: s
                .provider
                .present()
                .map(|c| c.code().to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            origin_country: text(&s.origin_country, NO_COUNTRY),
            destination_country: text(&s.destination_country, NO_COUNTRY),
            invoiced_price: draft.invoiced_price.unwrap_or(0.0),
            invoiced_weight: draft.invoiced_weight.present(),
            is_complete: draft.to_upload_record().is_some(),
        }
    }

    /// "CZ → UK"
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin_country, self.destination_country)
    }
}

/// Outcome of parsing one uploaded file
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInvoices {
    pub rows: Vec<PreviewRow>,
    /// Records exactly as they appeared in the file; these are what gets uploaded
    pub records: Vec<Value>,
}

/// Parse the full content of an uploaded file.
///
/// An array is a list of invoice records, a bare object is a single record.
pub fn parse_invoice_file(file_name: &str, content: &str) -> Result<ParsedInvoices, ParseError> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| ParseError::InvalidJson {
        file: file_name.to_string(),
        message: e.to_string(),
    })?;

    let records = match parsed {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => {
            return Err(ParseError::UnexpectedShape {
                file: file_name.to_string(),
            })
        }
    };

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            InvoiceRecordDraft::decode(file_name, index, raw)
                .map(|draft| PreviewRow::from_draft(file_name, index, &draft))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedInvoices { rows, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, tracking: &str) -> Value {
        json!({
            "id": id,
            "shipment": {
                "id": format!("shp-{id}"),
                "createdAt": "2025-10-09T08:00:00Z",
                "trackingNumber": tracking,
                "company": { "id": "c-1", "name": "Acme" },
                "provider": "GLS",
                "mode": "IMPORT",
                "originCountry": "DE",
                "destinationCountry": "CZ"
            },
            "invoicedPrice": 120.5,
            "invoicedWeight": 3
        })
    }

    #[test]
    fn test_array_keeps_order() {
        let content = json!([record("a", "1"), record("b", "2"), record("c", "3")]).to_string();
        let parsed = parse_invoice_file("batch.json", &content).unwrap();
        assert_eq!(parsed.rows.len(), 3);
        assert_eq!(parsed.records.len(), 3);
        let ids: Vec<_> = parsed.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(parsed.rows[1].tracking_number, "2");
        assert_eq!(parsed.rows[0].invoiced_weight, Some(3.0));
        assert!(parsed.rows[0].is_complete);
        assert_eq!(parsed.rows[0].route(), "DE → CZ");
    }

    #[test]
    fn test_single_object_is_one_row() {
        let content = record("a", "1").to_string();
        let parsed = parse_invoice_file("one.json", &content).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.records[0], record("a", "1"));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let content = json!({
            "shipment": { "company": {} }
        })
        .to_string();
        let parsed = parse_invoice_file("sparse.json", &content).unwrap();
        let row = &parsed.rows[0];
        assert_eq!(row.id, "file-sparse.json-row-0");
        assert_eq!(row.tracking_number, "N/A");
        assert_eq!(row.company_name, "Unknown");
        assert_eq!(row.provider, "N/A");
        assert_eq!(row.origin_country, "-");
        assert_eq!(row.destination_country, "-");
        assert_eq!(row.invoiced_price, 0.0);
        assert_eq!(row.invoiced_weight, None);
        assert!(!row.is_complete);
    }

    #[test]
    fn test_row_ids_use_index() {
        let mut second = record("x", "2");
        second.as_object_mut().unwrap().remove("id");
        let content = json!([record("a", "1"), second]).to_string();
        let parsed = parse_invoice_file("f.json", &content).unwrap();
        assert_eq!(parsed.rows[1].id, "file-f.json-row-1");
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_invoice_file("broken.json", "{ not json").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { ref file, .. } if file == "broken.json"));
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(matches!(
            parse_invoice_file("n.json", "42"),
            Err(ParseError::UnexpectedShape { .. })
        ));
        assert!(matches!(
            parse_invoice_file("s.json", "\"text\""),
            Err(ParseError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_empty_array_has_no_rows() {
        let parsed = parse_invoice_file("empty.json", "[]").unwrap();
        assert!(parsed.rows.is_empty());
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_one_bad_record_fails_the_file() {
        let content = json!([record("a", "1"), { "id": "b" }]).to_string();
        let err = parse_invoice_file("mixed.json", &content).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { index: 1, field: "shipment", .. }
        ));
    }
}
