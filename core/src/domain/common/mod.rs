use std::path::PathBuf;
use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct VerduraConfig {
    pub catalog: CatalogConfig,
    pub geocoder: GeocoderConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub csv_path: PathBuf,
    /// Appended to each market address before it is turned into a map link.
    pub region_suffix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("Chicago_Farmers_Markets__With_Products_.csv"),
            region_suffix: "Chicago, IL".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub request_delay: Duration,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "VerduraAI/1.0".to_string(),
            request_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_vision_model: String,
    pub gemini_base_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: "gemini-1.5-pro".to_string(),
            gemini_vision_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}
