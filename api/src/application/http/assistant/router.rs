use super::handlers::{
    chat::{__path_chat, chat},
    estimate_nutrition::{__path_estimate_nutrition, estimate_nutrition},
    estimate_nutrition_image::{
        __path_estimate_nutrition_image, MAX_IMAGE_SIZE, estimate_nutrition_image,
    },
    generate_bundles::{__path_generate_bundles, generate_bundles},
    generate_plan::{__path_generate_plan, generate_plan},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    chat,
    generate_bundles,
    generate_plan,
    estimate_nutrition,
    estimate_nutrition_image
))]
pub struct AssistantApiDoc;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/chat", root_path), post(chat))
        .route(&format!("{}/bundle", root_path), post(generate_bundles))
        .route(&format!("{}/planner", root_path), post(generate_plan))
        .route(
            &format!("{}/nutrition-estimate", root_path),
            post(estimate_nutrition),
        )
        .route(
            &format!("{}/nutrition-image", root_path),
            // Leave room for multipart framing around the image itself.
            post(estimate_nutrition_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
}
