use std::sync::Arc;

use crate::domain::{
    assistant::ports::LLMClient, geocoding::ports::GeocoderPort,
    market::ports::MarketCatalogRepository,
};

/// Domain service wiring the market catalog, the geocoder and the LLM client.
///
/// Every use case (`MarketSearchService`, `AssistantService`,
/// `HealthCheckService`) is implemented on this type in its own module.
pub struct Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    pub(crate) market_catalog: Arc<MC>,
    pub(crate) geocoder: Arc<G>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<MC, G, LLM> Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    pub fn new(market_catalog: MC, geocoder: G, llm_client: LLM) -> Self {
        Self {
            market_catalog: Arc::new(market_catalog),
            geocoder: Arc::new(geocoder),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<MC, G, LLM> Clone for Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            market_catalog: Arc::clone(&self.market_catalog),
            geocoder: Arc::clone(&self.geocoder),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
