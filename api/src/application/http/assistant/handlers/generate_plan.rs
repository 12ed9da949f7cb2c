use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::assistant::{ports::AssistantService, value_objects::PlannerInput};

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
pub struct PlannerResponse {
    pub plan: String,
}

#[utoipa::path(
    post,
    path = "/planner",
    tag = "assistant",
    summary = "Generate a weekly meal plan",
    responses(
        (status = 200, body = PlannerResponse)
    ),
    request_body = MealGoalRequest
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealGoalRequest>,
) -> Result<Response<PlannerResponse>, ApiError> {
    let plan = state
        .service
        .generate_plan(PlannerInput {
            goal: payload.goal,
            produce: payload.produce,
        })
        .await;

    Ok(Response::OK(PlannerResponse { plan }))
}
