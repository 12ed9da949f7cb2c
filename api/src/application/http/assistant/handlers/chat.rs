use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::assistant::{ports::AssistantService, value_objects::ChatInput};

use crate::application::http::{
    assistant::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "assistant",
    summary = "Ask the wellness assistant",
    description = "Forwards the question to the language model with a food-as-medicine preamble. Model failures return a fallback reply.",
    responses(
        (status = 200, body = ChatResponse)
    ),
    request_body = ChatRequest
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
        })
        .await;

    Ok(Response::OK(ChatResponse { reply }))
}
