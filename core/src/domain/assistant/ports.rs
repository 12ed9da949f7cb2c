use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    assistant::value_objects::{
        BundleInput, ChatInput, MealImageInput, NutritionEstimateInput, PlannerInput,
    },
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Bytes,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the food and nutrition assistant.
///
/// Every operation returns the model's text verbatim, or a fixed fallback
/// message when the model call fails.
#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = String> + Send;

    fn generate_bundles(&self, input: BundleInput) -> impl Future<Output = String> + Send;

    fn generate_plan(&self, input: PlannerInput) -> impl Future<Output = String> + Send;

    fn estimate_nutrition(
        &self,
        input: NutritionEstimateInput,
    ) -> impl Future<Output = String> + Send;

    fn estimate_nutrition_from_image(
        &self,
        input: MealImageInput,
    ) -> impl Future<Output = String> + Send;
}
