//! Invoice records as they arrive in uploaded JSON files
//!
//! Uploaded files are untrusted, so records are decoded field by field into a
//! draft where every value is either [`Field::Present`] or [`Field::Missing`].
//! Missing leaf values are defaulted later for the preview; values of the wrong
//! type and missing structural parts (`shipment`, `shipment.company`) fail with
//! a [`ParseError`].

use crate::enums::{Carrier, ShipmentMode};
use crate::shared::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Company of an uploaded invoice record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadCompany {
    pub id: String,
    pub name: String,
}

/// Shipment descriptor embedded in an uploaded invoice record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadShipment {
    pub id: String,
    pub created_at: String,
    pub tracking_number: String,
    pub company: UploadCompany,
    pub provider: Carrier,
    pub mode: ShipmentMode,
    pub origin_country: String,
    pub destination_country: String,
}

/// Fully specified invoice record accepted by `POST /api/invoices/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUploadRecord {
    pub id: String,
    pub shipment: UploadShipment,
    pub invoiced_price: f64,
    pub invoiced_weight: f64,
}

/// A decoded value that may be absent from the source JSON
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    Present(T),
    Missing,
}

impl<T> Field<T> {
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Present(v) => Field::Present(v),
            Field::Missing => Field::Missing,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Missing => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.present().unwrap_or(default)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Present(v) => Field::Present(f(v)),
            Field::Missing => Field::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDraft {
    pub id: Field<String>,
    pub name: Field<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentDraft {
    pub id: Field<String>,
    pub created_at: Field<String>,
    pub tracking_number: Field<String>,
    pub company: CompanyDraft,
    pub provider: Field<Carrier>,
    pub mode: Field<ShipmentMode>,
    pub origin_country: Field<String>,
    pub destination_country: Field<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecordDraft {
    pub id: Field<String>,
    pub shipment: ShipmentDraft,
    pub invoiced_price: Field<f64>,
    pub invoiced_weight: Field<f64>,
}

/// Position of the record being decoded, used for error reporting
struct RecordCtx<'a> {
    file: &'a str,
    index: usize,
}

impl RecordCtx<'_> {
    fn missing(&self, field: &'static str) -> ParseError {
        ParseError::MissingField {
            file: self.file.to_string(),
            index: self.index,
            field,
        }
    }

    fn invalid(&self, field: &'static str, message: impl Into<String>) -> ParseError {
        ParseError::InvalidField {
            file: self.file.to_string(),
            index: self.index,
            field,
            message: message.into(),
        }
    }

    /// `null` counts as absent
    fn get<'v>(&self, obj: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
        obj.get(key).filter(|v| !v.is_null())
    }

    fn object<'v>(
        &self,
        obj: &'v Map<String, Value>,
        key: &str,
        field: &'static str,
    ) -> Result<&'v Map<String, Value>, ParseError> {
        match self.get(obj, key) {
            None => Err(self.missing(field)),
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(self.invalid(field, format!("expected object, got {}", kind(other)))),
        }
    }

    fn text(
        &self,
        obj: &Map<String, Value>,
        key: &str,
        field: &'static str,
    ) -> Result<Field<String>, ParseError> {
        match self.get(obj, key) {
            None => Ok(Field::Missing),
            Some(Value::String(s)) => Ok(Field::Present(s.clone())),
            Some(Value::Number(n)) => Ok(Field::Present(n.to_string())),
            Some(other) => Err(self.invalid(field, format!("expected text, got {}", kind(other)))),
        }
    }

    fn number(
        &self,
        obj: &Map<String, Value>,
        key: &str,
        field: &'static str,
    ) -> Result<Field<f64>, ParseError> {
        match self.get(obj, key) {
            None => Ok(Field::Missing),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Field::Present)
                .ok_or_else(|| self.invalid(field, "number out of range")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Field::Present)
                .ok_or_else(|| self.invalid(field, format!("`{s}` is not a number"))),
            Some(other) => Err(self.invalid(field, format!("expected number, got {}", kind(other)))),
        }
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl InvoiceRecordDraft {
    /// Decode record `index` of `file`
    pub fn decode(file: &str, index: usize, value: &Value) -> Result<Self, ParseError> {
        let ctx = RecordCtx { file, index };
        let Value::Object(obj) = value else {
            return Err(ParseError::NotAnObject {
                file: file.to_string(),
                index,
            });
        };

        let shipment = ctx.object(obj, "shipment", "shipment")?;
        let company = ctx.object(shipment, "company", "shipment.company")?;

        let provider = match ctx.text(shipment, "provider", "shipment.provider")? {
            Field::Present(code) => match Carrier::from_code(&code) {
                Some(c) => Field::Present(c),
                None => {
                    return Err(ctx.invalid("shipment.provider", format!("unknown carrier `{code}`")))
                }
            },
            Field::Missing => Field::Missing,
        };

        let mode = match ctx.text(shipment, "mode", "shipment.mode")? {
            Field::Present(code) => match ShipmentMode::from_code(&code) {
                Some(m) => Field::Present(m),
                None => return Err(ctx.invalid("shipment.mode", format!("unknown mode `{code}`"))),
            },
            Field::Missing => Field::Missing,
        };

        Ok(Self {
            id: ctx.text(obj, "id", "id")?,
            shipment: ShipmentDraft {
                id: ctx.text(shipment, "id", "shipment.id")?,
                created_at: ctx.text(shipment, "createdAt", "shipment.createdAt")?,
                tracking_number: ctx.text(shipment, "trackingNumber", "shipment.trackingNumber")?,
                company: CompanyDraft {
                    id: ctx.text(company, "id", "shipment.company.id")?,
                    name: ctx.text(company, "name", "shipment.company.name")?,
                },
                provider,
                mode,
                origin_country: ctx.text(shipment, "originCountry", "shipment.originCountry")?,
                destination_country: ctx.text(
                    shipment,
                    "destinationCountry",
                    "shipment.destinationCountry",
                )?,
            },
            invoiced_price: ctx.number(obj, "invoicedPrice", "invoicedPrice")?,
            invoiced_weight: ctx.number(obj, "invoicedWeight", "invoicedWeight")?,
        })
    }

    /// The complete record, or `None` if any field was missing
    pub fn to_upload_record(&self) -> Option<InvoiceUploadRecord> {
        let s = &self.shipment;
        Some(InvoiceUploadRecord {
            id: self.id.clone().present()?,
            shipment: UploadShipment {
                id: s.id.clone().present()?,
                created_at: s.created_at.clone().present()?,
                tracking_number: s.tracking_number.clone().present()?,
                company: UploadCompany {
                    id: s.company.id.clone().present()?,
                    name: s.company.name.clone().present()?,
                },
                provider: s.provider.present()?,
                mode: s.mode.present()?,
                origin_country: s.origin_country.clone().present()?,
                destination_country: s.destination_country.clone().present()?,
            },
            invoiced_price: self.invoiced_price.present()?,
            invoiced_weight: self.invoiced_weight.present()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "id": "inv-1",
            "shipment": {
                "id": "shp-1",
                "createdAt": "2025-10-09T08:00:00Z",
                "trackingNumber": "885335999184",
                "company": { "id": "c-1", "name": "Acme Corporation s.r.o." },
                "provider": "FedEx",
                "mode": "EXPORT",
                "originCountry": "CZ",
                "destinationCountry": "UK"
            },
            "invoicedPrice": 457.24,
            "invoicedWeight": 1.5
        })
    }

    #[test]
    fn test_full_record_is_complete() {
        let draft = InvoiceRecordDraft::decode("a.json", 0, &full_record()).unwrap();
        let record = draft.to_upload_record().unwrap();
        assert_eq!(record.shipment.provider, Carrier::FedEx);
        assert_eq!(record.invoiced_weight, 1.5);

        // typed record serializes back to the same wire shape
        assert_eq!(serde_json::to_value(&record).unwrap(), full_record());
    }

    #[test]
    fn test_missing_leaves_are_distinguished() {
        let mut v = full_record();
        v.as_object_mut().unwrap().remove("invoicedWeight");
        v["shipment"]["trackingNumber"] = Value::Null;

        let draft = InvoiceRecordDraft::decode("a.json", 0, &v).unwrap();
        assert_eq!(draft.invoiced_weight, Field::Missing);
        assert_eq!(draft.shipment.tracking_number, Field::Missing);
        assert!(draft.to_upload_record().is_none());
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let mut v = full_record();
        v["invoicedPrice"] = json!(" 99.90 ");
        v["shipment"]["trackingNumber"] = json!(123456);
        let draft = InvoiceRecordDraft::decode("a.json", 0, &v).unwrap();
        assert_eq!(draft.invoiced_price, Field::Present(99.9));
        assert_eq!(draft.shipment.tracking_number, Field::Present("123456".to_string()));
    }

    #[test]
    fn test_structural_parts_are_required() {
        let mut v = full_record();
        v.as_object_mut().unwrap().remove("shipment");
        let err = InvoiceRecordDraft::decode("a.json", 3, &v).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                file: "a.json".to_string(),
                index: 3,
                field: "shipment"
            }
        );

        let mut v = full_record();
        v["shipment"]["company"] = json!("Acme");
        let err = InvoiceRecordDraft::decode("a.json", 0, &v).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidField { field: "shipment.company", .. }
        ));
    }

    #[test]
    fn test_wrong_types_fail() {
        let mut v = full_record();
        v["invoicedPrice"] = json!("abc");
        assert!(matches!(
            InvoiceRecordDraft::decode("a.json", 0, &v),
            Err(ParseError::InvalidField { field: "invoicedPrice", .. })
        ));

        let mut v = full_record();
        v["shipment"]["provider"] = json!("DHL");
        assert!(matches!(
            InvoiceRecordDraft::decode("a.json", 0, &v),
            Err(ParseError::InvalidField { field: "shipment.provider", .. })
        ));

        assert!(matches!(
            InvoiceRecordDraft::decode("a.json", 1, &json!(42)),
            Err(ParseError::NotAnObject { index: 1, .. })
        ));
    }
}
