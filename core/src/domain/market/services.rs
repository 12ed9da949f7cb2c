use tracing::instrument;

use crate::domain::{
    assistant::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    geocoding::{ports::GeocoderPort, value_objects::LocationQuery},
    market::{
        ports::{MarketCatalogRepository, MarketSearchService},
        ranking::{DEFAULT_RADIUS_KM, rank_markets},
        value_objects::{MarketSearchResult, SearchMarketsInput},
    },
};

impl<MC, G, LLM> MarketSearchService for Service<MC, G, LLM>
where
    MC: MarketCatalogRepository,
    G: GeocoderPort,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(location = %input.location))]
    async fn search_markets(
        &self,
        input: SearchMarketsInput,
    ) -> Result<MarketSearchResult, CoreError> {
        // 1. Validate input before touching any collaborator
        let query = LocationQuery::parse(&input.location).ok_or(CoreError::EmptyLocation)?;

        // 2. Load the catalog
        let markets = self.market_catalog.load_markets().await.unwrap_or_else(|e| {
            tracing::error!("Failed to load market catalog: {}", e);
            Vec::new()
        });

        if markets.is_empty() {
            return Err(CoreError::NoMarketData);
        }

        tracing::info!(
            markets = markets.len(),
            mode = %query.mode,
            "Processing location search"
        );

        // 3. Geocode
        let location = match self.geocoder.resolve(query.value.clone(), query.mode).await {
            Ok(Some(location)) => location,
            Ok(None) => {
                tracing::warn!("Failed to geocode location: {}", query.value);
                return Err(CoreError::LocationNotFound);
            }
            Err(e) => {
                tracing::warn!("Geocoding error for {}: {}", query.value, e);
                return Err(CoreError::LocationNotFound);
            }
        };

        tracing::info!("Geocoded location to: {}", location.display_name);

        // 4. Rank
        let markets = rank_markets(location.coordinates(), markets, DEFAULT_RADIUS_KM);

        tracing::info!(
            "Found {} markets within {}km",
            markets.len(),
            DEFAULT_RADIUS_KM
        );

        Ok(MarketSearchResult { markets, location })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        assistant::ports::MockLLMClient,
        geocoding::{entities::GeocodeResult, ports::MockGeocoderPort, value_objects::GeocodeMode},
        market::{entities::MarketRecord, ports::MockMarketCatalogRepository},
    };

    fn market(id: &str, latitude: f64, longitude: f64) -> MarketRecord {
        MarketRecord {
            id: id.to_string(),
            name: format!("Market {id}"),
            address: "Division St & Damen Ave".to_string(),
            products: "Tomatoes".to_string(),
            schedule: "Sunday: 8AM–1PM".to_string(),
            google_link: "https://maps.google.com/?q=x".to_string(),
            latitude,
            longitude,
        }
    }

    fn chicago() -> GeocodeResult {
        GeocodeResult {
            display_name: "Chicago, Cook County, Illinois, United States".to_string(),
            latitude: 41.8781,
            longitude: -87.6298,
        }
    }

    fn catalog_with(markets: Vec<MarketRecord>) -> MockMarketCatalogRepository {
        let mut catalog = MockMarketCatalogRepository::new();
        catalog
            .expect_load_markets()
            .returning(move || Box::pin(std::future::ready(Ok(markets.clone()))));
        catalog
    }

    fn service(
        catalog: MockMarketCatalogRepository,
        geocoder: MockGeocoderPort,
    ) -> Service<MockMarketCatalogRepository, MockGeocoderPort, MockLLMClient> {
        Service::new(catalog, geocoder, MockLLMClient::new())
    }

    fn search(location: &str) -> SearchMarketsInput {
        SearchMarketsInput {
            location: location.to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_location_never_reaches_collaborators() {
        let mut catalog = MockMarketCatalogRepository::new();
        catalog.expect_load_markets().times(0);
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve().times(0);

        let result = service(catalog, geocoder).search_markets(search("   ")).await;

        assert_eq!(result, Err(CoreError::EmptyLocation));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_no_market_data() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve().times(0);

        let result = service(catalog_with(vec![]), geocoder)
            .search_markets(search("Logan Square"))
            .await;

        assert_eq!(result, Err(CoreError::NoMarketData));
        assert_eq!(
            CoreError::NoMarketData.to_string(),
            "No market data available"
        );
    }

    #[tokio::test]
    async fn test_catalog_error_is_no_market_data() {
        let mut catalog = MockMarketCatalogRepository::new();
        catalog.expect_load_markets().returning(|| {
            Box::pin(std::future::ready(Err(CoreError::InternalServerError)))
        });

        let result = service(catalog, MockGeocoderPort::new())
            .search_markets(search("60601"))
            .await;

        assert_eq!(result, Err(CoreError::NoMarketData));
    }

    #[tokio::test]
    async fn test_zip_code_uses_postal_code_mode() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .with(eq("60601".to_string()), eq(GeocodeMode::PostalCode))
            .times(1)
            .returning(|_, _| Box::pin(std::future::ready(Ok(Some(chicago())))));

        let result = service(catalog_with(vec![market("1", 41.8781, -87.6298)]), geocoder)
            .search_markets(search("60601"))
            .await
            .unwrap();

        assert_eq!(result.markets.len(), 1);
        assert_eq!(result.markets[0].distance, 0.0);
        assert_eq!(result.location, chicago());
    }

    #[tokio::test]
    async fn test_place_name_uses_free_text_mode() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .with(eq("Hyde Park, Chicago".to_string()), eq(GeocodeMode::FreeText))
            .times(1)
            .returning(|_, _| Box::pin(std::future::ready(Ok(Some(chicago())))));

        let result = service(catalog_with(vec![market("1", 41.80, -87.59)]), geocoder)
            .search_markets(search(" Hyde Park, Chicago "))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_no_geocode_match_is_location_not_found() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .returning(|_, _| Box::pin(std::future::ready(Ok(None))));

        let result = service(catalog_with(vec![market("1", 41.8781, -87.6298)]), geocoder)
            .search_markets(search("Atlantis"))
            .await;

        assert_eq!(result, Err(CoreError::LocationNotFound));
        assert_eq!(
            CoreError::LocationNotFound.to_string(),
            "Could not find location"
        );
    }

    #[tokio::test]
    async fn test_geocoder_failure_is_location_not_found() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve().returning(|_, _| {
            Box::pin(std::future::ready(Err(CoreError::ExternalServiceError(
                "timeout".to_string(),
            ))))
        });

        let result = service(catalog_with(vec![market("1", 41.8781, -87.6298)]), geocoder)
            .search_markets(search("Pilsen"))
            .await;

        assert_eq!(result, Err(CoreError::LocationNotFound));
    }

    #[tokio::test]
    async fn test_far_markets_are_filtered_and_rest_sorted() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .returning(|_, _| Box::pin(std::future::ready(Ok(Some(chicago())))));

        let catalog = catalog_with(vec![
            market("north", 41.95, -87.65),
            market("downstate", 40.1164, -88.2434),
            market("loop", 41.8800, -87.6300),
        ]);

        let result = service(catalog, geocoder)
            .search_markets(search("Chicago"))
            .await
            .unwrap();

        let ids: Vec<&str> = result.markets.iter().map(|m| m.market.id.as_str()).collect();
        assert_eq!(ids, vec!["loop", "north"]);
    }
}
