pub mod shipment;

pub use shipment::{ShipmentQuery, ShipmentState, list_shipments};

/// Liveness check
pub async fn health() -> &'static str {
    "Shipments API is running."
}
