use crate::{
    domain::common::{VerduraConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        catalog::CsvMarketCatalog, geocoding::NominatimGeocoder, llm::GeminiLLMClient,
    },
};

pub type VerduraService = Service<CsvMarketCatalog, NominatimGeocoder, GeminiLLMClient>;

pub fn create_service(config: VerduraConfig) -> Result<VerduraService, CoreError> {
    let market_catalog = CsvMarketCatalog::new(config.catalog);
    let geocoder = NominatimGeocoder::new(config.geocoder)?;
    let llm_client = GeminiLLMClient::new(config.llm);

    tracing::debug!("Verdura service created");

    Ok(Service::new(market_catalog, geocoder, llm_client))
}
