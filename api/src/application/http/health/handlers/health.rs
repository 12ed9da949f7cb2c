use axum::extract::State;
use verdura_core::domain::health::ports::HealthCheckService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = u64, description = "Current unix time in milliseconds")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<u64>, ApiError> {
    state
        .service
        .health()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
