pub mod a001_shipment;
pub mod a002_invoice;
