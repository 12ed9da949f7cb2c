pub mod chat;
pub mod estimate_nutrition;
pub mod estimate_nutrition_image;
pub mod generate_bundles;
pub mod generate_plan;
