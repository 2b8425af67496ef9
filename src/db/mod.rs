use anyhow::{Context, Result};
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{fs, str::FromStr, time::Duration};

use crate::models::seed_shipments;

pub mod shipment_store;
pub mod shipment_table;

pub use shipment_store::ShipmentStore;
pub use shipment_table::ShipmentTable;

pub type DbPool = Pool<Sqlite>;

/// Open the shipment database, creating the file and its directory on first
/// use, and make sure schema and seed rows are in place.
pub async fn init_db_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL {}", database_url))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open {}", database_url))?;

    ensure_initialized(&pool).await?;

    Ok(pool)
}

/// Create the schema and insert the seed shipments.
///
/// Safe to run on every start and from several processes at once: the table
/// is created only if missing and seed rows whose id already exists are left
/// alone.
pub async fn ensure_initialized(pool: &DbPool) -> Result<()> {
    sqlx::query(&ShipmentTable::create_table())
        .execute(pool)
        .await?;

    let insert = ShipmentTable::insert_if_absent();
    let mut inserted = 0;
    for shipment in seed_shipments() {
        let result = sqlx::query(&insert)
            .bind(shipment.id)
            .bind(&shipment.origin)
            .bind(&shipment.destination)
            .bind(shipment.status)
            .execute(pool)
            .await?;
        inserted += result.rows_affected();
    }

    if inserted > 0 {
        tracing::info!("Seeded {} shipments", inserted);
    } else {
        tracing::debug!("Seed shipments already present");
    }

    Ok(())
}
