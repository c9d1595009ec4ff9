pub mod carrier;
pub mod shipment_mode;

pub use carrier::Carrier;
pub use shipment_mode::ShipmentMode;
