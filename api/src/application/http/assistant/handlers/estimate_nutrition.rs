use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::assistant::{
    ports::AssistantService, value_objects::NutritionEstimateInput,
};

use crate::application::http::{
    assistant::validators::NutritionEstimateRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionEstimateResponse {
    /// Model output, expected to be JSON text but returned unparsed.
    pub estimate: String,
}

#[utoipa::path(
    post,
    path = "/nutrition-estimate",
    tag = "assistant",
    summary = "Estimate macros for a list of ingredients",
    responses(
        (status = 200, body = NutritionEstimateResponse)
    ),
    request_body = NutritionEstimateRequest
)]
pub async fn estimate_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NutritionEstimateRequest>,
) -> Result<Response<NutritionEstimateResponse>, ApiError> {
    let estimate = state
        .service
        .estimate_nutrition(NutritionEstimateInput {
            ingredients: payload.ingredients,
        })
        .await;

    Ok(Response::OK(NutritionEstimateResponse { estimate }))
}
