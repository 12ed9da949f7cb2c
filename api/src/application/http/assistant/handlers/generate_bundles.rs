use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::assistant::{ports::AssistantService, value_objects::BundleInput};

use crate::application::http::{
    assistant::validators::MealGoalRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BundleResponse {
    /// Markdown produced by the model.
    pub bundles: String,
}

#[utoipa::path(
    post,
    path = "/bundle",
    tag = "assistant",
    summary = "Suggest seasonal food bundles",
    description = "Asks the model for 2-3 food bundles matching a wellness goal, built from the given produce.",
    responses(
        (status = 200, body = BundleResponse)
    ),
    request_body = MealGoalRequest
)]
pub async fn generate_bundles(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealGoalRequest>,
) -> Result<Response<BundleResponse>, ApiError> {
    let bundles = state
        .service
        .generate_bundles(BundleInput {
            goal: payload.goal,
            produce: payload.produce,
        })
        .await;

    Ok(Response::OK(BundleResponse { bundles }))
}
