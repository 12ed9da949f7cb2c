use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BundleInput {
    pub goal: String,
    pub produce: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PlannerInput {
    pub goal: String,
    pub produce: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NutritionEstimateInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MealImageInput {
    pub image_data: Bytes,
    pub mime_type: String,
}

pub const CHAT_FALLBACK: &str = "Something went wrong with Gemini AI.";
pub const BUNDLE_FALLBACK: &str = "Failed to generate seasonal bundle.";
pub const PLANNER_FALLBACK: &str = "Something went wrong generating the weekly plan.";
pub const NUTRITION_ESTIMATE_FALLBACK: &str = "Something went wrong estimating macros.";
pub const NUTRITION_IMAGE_FALLBACK: &str = "Something went wrong analyzing the meal image.";
