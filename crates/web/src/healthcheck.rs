//! Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Shop health, with the size of the catalog being served.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers
    pub status: String,

    /// Number of melons on sale
    pub melons: usize,
}

/// Healthcheck handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        melons: state.catalog.len(),
    }))
}
