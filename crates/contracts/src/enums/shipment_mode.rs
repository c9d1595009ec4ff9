use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a shipment relative to the owning company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipmentMode {
    /// Outbound
    Export,
    /// Inbound
    Import,
}

impl ShipmentMode {
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentMode::Export => "EXPORT",
            ShipmentMode::Import => "IMPORT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EXPORT" => Some(ShipmentMode::Export),
            "IMPORT" => Some(ShipmentMode::Import),
            _ => None,
        }
    }
}

impl fmt::Display for ShipmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
