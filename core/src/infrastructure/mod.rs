pub mod catalog;
pub mod geocoding;
pub mod llm;
