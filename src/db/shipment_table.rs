/// Provides constants and utilities for working with
/// the "shipments" database table.
pub struct ShipmentTable;

impl ShipmentTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "shipments";

    /// The column name for the primary key identifier of a shipment.
    pub const COLUMN_ID: &'static str = "id";

    /// The column name for the place a shipment leaves from.
    pub const COLUMN_ORIGIN: &'static str = "origin";

    /// The column name for the place a shipment is delivered to.
    pub const COLUMN_DESTINATION: &'static str = "destination";

    /// The column name for the integer status code.
    pub const COLUMN_STATUS: &'static str = "status";

    /// SQL statement for creating the shipments table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY NOT NULL,
                {} TEXT NOT NULL CHECK (length({}) > 0),
                {} TEXT NOT NULL CHECK (length({}) > 0),
                {} INTEGER NOT NULL CHECK ({} IN (0, 1))
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_ORIGIN,
            Self::COLUMN_ORIGIN,
            Self::COLUMN_DESTINATION,
            Self::COLUMN_DESTINATION,
            Self::COLUMN_STATUS,
            Self::COLUMN_STATUS,
        )
    }

    /// Insert that leaves an existing row with the same id untouched.
    pub fn insert_if_absent() -> String {
        format!(
            "INSERT OR IGNORE INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_ORIGIN,
            Self::COLUMN_DESTINATION,
            Self::COLUMN_STATUS,
        )
    }

    /// Select every shipment, optionally narrowed to one status, in id order.
    ///
    /// Takes a single bind parameter; binding NULL disables the filter.
    pub fn select_by_optional_status() -> String {
        format!(
            "SELECT {id}, {origin}, {destination}, {status} FROM {table}
             WHERE ?1 IS NULL OR {status} = ?1
             ORDER BY {id} ASC",
            id = Self::COLUMN_ID,
            origin = Self::COLUMN_ORIGIN,
            destination = Self::COLUMN_DESTINATION,
            status = Self::COLUMN_STATUS,
            table = Self::TABLE_NAME,
        )
    }
}
