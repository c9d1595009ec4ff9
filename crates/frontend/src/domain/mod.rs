pub mod a001_shipment;
