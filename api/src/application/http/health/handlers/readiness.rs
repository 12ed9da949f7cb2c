use axum::{Json, extract::State, http::StatusCode};
use verdura_core::domain::health::{
    entities::CatalogHealthStatus, ports::HealthCheckService,
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Ready once the market catalog loads at least one market.",
    responses(
        (status = 200, body = CatalogHealthStatus),
        (status = 503, body = CatalogHealthStatus, description = "Catalog missing or empty")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CatalogHealthStatus>), ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    let code = if status.ready {
        StatusCode::OK
    } else {
        tracing::warn!("Market catalog is not ready");
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)))
}
