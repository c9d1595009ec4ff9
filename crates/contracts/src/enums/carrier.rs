use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery provider accepted in invoice upload payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "GLS")]
    Gls,
    #[serde(rename = "DPD")]
    Dpd,
    #[serde(rename = "UPS")]
    Ups,
    #[serde(rename = "PPL")]
    Ppl,
    #[serde(rename = "FedEx")]
    FedEx,
}

impl Carrier {
    /// Code as it appears on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Carrier::Gls => "GLS",
            Carrier::Dpd => "DPD",
            Carrier::Ups => "UPS",
            Carrier::Ppl => "PPL",
            Carrier::FedEx => "FedEx",
        }
    }

    pub fn all() -> Vec<Carrier> {
        vec![
            Carrier::Gls,
            Carrier::Dpd,
            Carrier::Ups,
            Carrier::Ppl,
            Carrier::FedEx,
        ]
    }

    /// Exact match against the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GLS" => Some(Carrier::Gls),
            "DPD" => Some(Carrier::Dpd),
            "UPS" => Some(Carrier::Ups),
            "PPL" => Some(Carrier::Ppl),
            "FedEx" => Some(Carrier::FedEx),
            _ => None,
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back() {
        for carrier in Carrier::all() {
            assert_eq!(Carrier::from_code(carrier.code()), Some(carrier));
        }
        assert_eq!(Carrier::from_code("fedex"), None);
        assert_eq!(Carrier::from_code("DHL"), None);
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&Carrier::FedEx).unwrap();
        assert_eq!(json, "\"FedEx\"");
        let parsed: Carrier = serde_json::from_str("\"PPL\"").unwrap();
        assert_eq!(parsed, Carrier::Ppl);
    }
}
