use std::path::PathBuf;

use tracing::instrument;

use crate::{
    domain::{
        common::{CatalogConfig, entities::app_errors::CoreError},
        market::{entities::MarketRecord, ports::MarketCatalogRepository},
    },
    infrastructure::catalog::mappers::MarketRow,
};

/// Market catalog read from a CSV file on every request.
#[derive(Debug, Clone)]
pub struct CsvMarketCatalog {
    path: PathBuf,
    region_suffix: String,
}

impl CsvMarketCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            path: config.csv_path,
            region_suffix: config.region_suffix,
        }
    }
}

/// Parses CSV bytes into market records, skipping rows that cannot be used.
pub fn parse_markets(contents: &[u8], region_suffix: &str) -> Vec<MarketRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(contents);

    let mut markets = Vec::new();
    for (index, row) in reader.deserialize::<MarketRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(row = index + 1, "Error processing market row: {}", e);
                continue;
            }
        };

        let name = row.name.clone();
        match row.into_market_record(region_suffix) {
            Some(market) => markets.push(market),
            None => {
                tracing::warn!("Skipping market {} due to missing coordinates", name);
            }
        }
    }

    markets
}

impl MarketCatalogRepository for CsvMarketCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_markets(&self) -> Result<Vec<MarketRecord>, CoreError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!("Market CSV not readable: {}", e);
                return Ok(Vec::new());
            }
        };

        let markets = parse_markets(&contents, &self.region_suffix);
        tracing::info!("Successfully loaded {} markets", markets.len());

        Ok(markets)
    }
}
