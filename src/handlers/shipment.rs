use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::ShipmentStore,
    error::{AppError, Result},
    models::ShipmentStatus,
};

/// State for shipment handlers
#[derive(Clone)]
pub struct ShipmentState {
    pub shipment_store: ShipmentStore,
    /// Reject unknown `status` values instead of ignoring them
    pub strict_status_filter: bool,
}

/// Query string accepted by the listing endpoint
#[derive(Debug, Default)]
pub struct ShipmentQuery {
    pub status: Option<String>,
}

impl ShipmentQuery {
    /// Pick the first `status` pair; repeats and unrelated keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let status = pairs
            .into_iter()
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value);
        Self { status }
    }

    fn status_filter(&self, strict: bool) -> Result<Option<ShipmentStatus>> {
        match ShipmentStatus::parse_filter(self.status.as_deref()) {
            Ok(filter) => Ok(filter),
            Err(err) if strict => Err(AppError::BadRequest(err.to_string())),
            Err(err) => {
                tracing::debug!("Ignoring status filter: {}", err);
                Ok(None)
            }
        }
    }
}

/// List shipments handler
pub async fn list_shipments(
    State(state): State<ShipmentState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse> {
    let query = ShipmentQuery::from_pairs(pairs);
    let filter = query.status_filter(state.strict_status_filter)?;
    let shipments = state.shipment_store.list_all(filter).await?;
    Ok((StatusCode::OK, Json(shipments)))
}
