use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verdura_core::domain::market::{
    ports::MarketSearchService,
    value_objects::{MarketSearchResult, SearchMarketsInput},
};

use crate::application::http::{
    market::validators::ProduceNearbyParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// Either the ranked markets or a user-facing error message.
///
/// Search failures are reported in the body with a 200 status.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProduceNearbyResponse {
    Found(MarketSearchResult),
    Failed { error: String },
}

#[utoipa::path(
    get,
    path = "",
    tag = "market",
    summary = "Find farmers markets near a location",
    description = "Geocodes the location (ZIP code or place name) and returns markets within 50 km, nearest first.",
    params(ProduceNearbyParams),
    responses(
        (status = 200, body = ProduceNearbyResponse)
    )
)]
pub async fn get_produce_nearby(
    State(state): State<AppState>,
    Query(params): Query<ProduceNearbyParams>,
) -> Result<Response<ProduceNearbyResponse>, ApiError> {
    let result = state
        .service
        .search_markets(SearchMarketsInput {
            location: params.location.unwrap_or_default(),
        })
        .await;

    let response = match result {
        Ok(found) => ProduceNearbyResponse::Found(found),
        Err(e) => ProduceNearbyResponse::Failed {
            error: e.to_string(),
        },
    };

    Ok(Response::OK(response))
}
