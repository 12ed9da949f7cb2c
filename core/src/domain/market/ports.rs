use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    market::{
        entities::MarketRecord,
        value_objects::{MarketSearchResult, SearchMarketsInput},
    },
};

/// Source of the market catalog.
///
/// Implementations load the catalog fresh on every call and return an empty
/// list when the underlying data is unavailable.
#[cfg_attr(test, mockall::automock)]
pub trait MarketCatalogRepository: Send + Sync {
    fn load_markets(&self) -> impl Future<Output = Result<Vec<MarketRecord>, CoreError>> + Send;
}

/// Service trait for the nearby-market search
#[cfg_attr(test, mockall::automock)]
pub trait MarketSearchService: Send + Sync {
    fn search_markets(
        &self,
        input: SearchMarketsInput,
    ) -> impl Future<Output = Result<MarketSearchResult, CoreError>> + Send;
}
