pub mod csv_catalog;
pub mod mappers;

pub use csv_catalog::CsvMarketCatalog;
