use tracing::instrument;

use crate::domain::{
    assistant::{
        ports::{AssistantService, LLMClient},
        prompts::{
            NUTRITION_IMAGE_PROMPT, bundle_prompt, chat_prompt, nutrition_estimate_prompt,
            planner_prompt,
        },
        value_objects::{
            BUNDLE_FALLBACK, BundleInput, CHAT_FALLBACK, ChatInput, MealImageInput,
            NUTRITION_ESTIMATE_FALLBACK, NUTRITION_IMAGE_FALLBACK, NutritionEstimateInput,
            PLANNER_FALLBACK, PlannerInput,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    geocoding::ports::GeocoderPort,
    market::ports::MarketCatalogRepository,
};

fn or_fallback(result: Result<String, CoreError>, operation: &str, fallback: &str) -> String {
    result.unwrap_or_else(|e| {
        tracing::error!("{} failed: {}", operation, e);
        fallback.to_string()
    })
}

impl<MC, G, LLM> AssistantService for Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    #[instrument(skip_all)]
    async fn chat(&self, input: ChatInput) -> String {
        let result = self
            .llm_client
            .generate_text(chat_prompt(&input.message))
            .await;

        or_fallback(result, "Chat", CHAT_FALLBACK)
    }

    #[instrument(skip_all, fields(goal = %input.goal))]
    async fn generate_bundles(&self, input: BundleInput) -> String {
        let result = self
            .llm_client
            .generate_text(bundle_prompt(&input.goal, &input.produce))
            .await;

        or_fallback(result, "Bundle generation", BUNDLE_FALLBACK)
    }

    #[instrument(skip_all, fields(goal = %input.goal))]
    async fn generate_plan(&self, input: PlannerInput) -> String {
        let result = self
            .llm_client
            .generate_text(planner_prompt(&input.goal, &input.produce))
            .await;

        or_fallback(result, "Planner", PLANNER_FALLBACK)
    }

    #[instrument(skip_all, fields(ingredients = input.ingredients.len()))]
    async fn estimate_nutrition(&self, input: NutritionEstimateInput) -> String {
        let result = self
            .llm_client
            .generate_text(nutrition_estimate_prompt(&input.ingredients))
            .await;

        or_fallback(result, "Nutrition estimate", NUTRITION_ESTIMATE_FALLBACK)
    }

    #[instrument(skip_all, fields(bytes = input.image_data.len(), mime_type = %input.mime_type))]
    async fn estimate_nutrition_from_image(&self, input: MealImageInput) -> String {
        let result = self
            .llm_client
            .generate_with_image(
                NUTRITION_IMAGE_PROMPT.to_string(),
                input.image_data,
                input.mime_type,
            )
            .await;

        or_fallback(result, "Nutrition image analysis", NUTRITION_IMAGE_FALLBACK)
    }
}
