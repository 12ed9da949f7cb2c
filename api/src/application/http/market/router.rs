use super::handlers::get_produce_nearby::{__path_get_produce_nearby, get_produce_nearby};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_produce_nearby))]
pub struct MarketApiDoc;

pub fn market_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/produce-nearby", state.args.server.root_path),
        get(get_produce_nearby),
    )
}
