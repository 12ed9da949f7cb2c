use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{geocoding::entities::GeocodeResult, market::entities::RankedMarket};

#[derive(Debug, Clone)]
pub struct SearchMarketsInput {
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketSearchResult {
    pub markets: Vec<RankedMarket>,
    pub location: GeocodeResult,
}
