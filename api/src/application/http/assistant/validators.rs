use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "message must be between 1 and 5000 characters"
    ))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct MealGoalRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "goal must be between 1 and 500 characters"
    ))]
    pub goal: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "produce can list at most 100 items"))]
    pub produce: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct NutritionEstimateRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "ingredients must list between 1 and 100 items"
    ))]
    pub ingredients: Vec<String>,
}

/// Multipart body of the meal image upload.
///
/// Schema only: the handler reads the `file` part straight from `Multipart`.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct NutritionImageUpload {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
