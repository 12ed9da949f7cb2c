use axum::extract::{Multipart, State};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::assistant::{ports::AssistantService, value_objects::MealImageInput};

use crate::application::http::{
    assistant::validators::NutritionImageUpload,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionImageResponse {
    pub vision_estimate: String,
}

#[utoipa::path(
    post,
    path = "/nutrition-image",
    tag = "assistant",
    summary = "Estimate macros from a meal photo",
    description = "Sends the uploaded image to the vision model. Model failures return a fallback estimate.",
    request_body(content = NutritionImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = NutritionImageResponse),
        (status = 400, description = "Missing, empty or oversized image")
    )
)]
pub async fn estimate_nutrition_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<NutritionImageResponse>, ApiError> {
    let mut image: Option<(Bytes, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some((data, mime_type));
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    if image_data.is_empty() {
        return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
    }

    let vision_estimate = state
        .service
        .estimate_nutrition_from_image(MealImageInput {
            image_data,
            mime_type,
        })
        .await;

    Ok(Response::OK(NutritionImageResponse { vision_estimate }))
}
