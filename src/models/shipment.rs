use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Lifecycle status of a shipment, stored as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum ShipmentStatus {
    Active = 0,
    Completed = 1,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 2] = [ShipmentStatus::Active, ShipmentStatus::Completed];

    pub fn name(self) -> &'static str {
        match self {
            ShipmentStatus::Active => "Active",
            ShipmentStatus::Completed => "Completed",
        }
    }

    /// Interpret an optional `status` query value.
    ///
    /// Blank input means "no filter". Anything else must match a status name,
    /// ignoring ASCII case and surrounding whitespace.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, ParseStatusError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown shipment status: {0}")]
pub struct ParseStatusError(pub String);

/// Database shipment model, also the JSON shape returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Shipment {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn new(id: i64, origin: &str, destination: &str, status: ShipmentStatus) -> Self {
        Self {
            id,
            origin: origin.to_string(),
            destination: destination.to_string(),
            status,
        }
    }
}

/// Rows inserted on first startup
pub fn seed_shipments() -> Vec<Shipment> {
    vec![
        Shipment::new(1, "La Paz", "Cochabamba", ShipmentStatus::Active),
        Shipment::new(2, "Santa Cruz", "La Paz", ShipmentStatus::Completed),
        Shipment::new(3, "Tarija", "Oruro", ShipmentStatus::Active),
    ]
}
