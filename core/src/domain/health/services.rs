use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::{
    assistant::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    geocoding::ports::GeocoderPort,
    health::{entities::CatalogHealthStatus, ports::HealthCheckService},
    market::ports::MarketCatalogRepository,
};

impl<MC, G, LLM> HealthCheckService for Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    async fn health(&self) -> Result<u64, CoreError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| CoreError::InternalServerError)?;

        Ok(now.as_millis() as u64)
    }

    async fn readiness(&self) -> Result<CatalogHealthStatus, CoreError> {
        let markets = self.market_catalog.load_markets().await?;

        Ok(CatalogHealthStatus {
            ready: !markets.is_empty(),
            market_count: markets.len(),
        })
    }
}
