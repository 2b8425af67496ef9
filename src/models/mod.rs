pub mod shipment;

pub use shipment::{ParseStatusError, Shipment, ShipmentStatus, seed_shipments};
