use crate::{
    db::{DbPool, ShipmentTable},
    error::{AppError, Result},
    models::{Shipment, ShipmentStatus},
};

/// Shipment store for database operations
#[derive(Clone)]
pub struct ShipmentStore {
    pool: DbPool,
}

impl ShipmentStore {
    /// Create a new ShipmentStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List shipments in ascending id order, keeping only `status` when given
    pub async fn list_all(&self, status: Option<ShipmentStatus>) -> Result<Vec<Shipment>> {
        let shipments =
            sqlx::query_as::<_, Shipment>(&ShipmentTable::select_by_optional_status())
                .bind(status)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(shipments)
    }
}
