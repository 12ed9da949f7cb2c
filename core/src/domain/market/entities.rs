use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::geocoding::entities::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub products: String,
    pub schedule: String,
    pub google_link: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MarketRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A market within the search radius, with its distance from the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankedMarket {
    #[serde(flatten)]
    pub market: MarketRecord,
    /// Kilometers, rounded to two decimals.
    pub distance: f64,
}
