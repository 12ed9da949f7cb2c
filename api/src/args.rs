use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use verdura_core::domain::common::{CatalogConfig, GeocoderConfig, LLMConfig, VerduraConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "verdura-api", version, about = "Farmers-market search and nutrition assistant API")]
pub struct Args {
    #[arg(long, env = "ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub geocoder: GeocoderArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated; `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    #[arg(
        long = "market-csv-path",
        env = "MARKET_CSV_PATH",
        default_value = "Chicago_Farmers_Markets__With_Products_.csv"
    )]
    pub csv_path: PathBuf,

    #[arg(
        long = "market-region-suffix",
        env = "MARKET_REGION_SUFFIX",
        default_value = "Chicago, IL"
    )]
    pub region_suffix: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GeocoderArgs {
    #[arg(
        long = "geocoder-base-url",
        env = "GEOCODER_BASE_URL",
        default_value = "https://nominatim.openstreetmap.org"
    )]
    pub base_url: String,

    #[arg(long = "geocoder-user-agent", env = "GEOCODER_USER_AGENT", default_value = "VerduraAI/1.0")]
    pub user_agent: String,

    #[arg(long = "geocoder-delay-ms", env = "GEOCODER_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,

    #[arg(long = "geocoder-timeout-secs", env = "GEOCODER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-pro")]
    pub gemini_model: String,

    #[arg(long = "gemini-vision-model", env = "GEMINI_VISION_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_vision_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,
}

impl From<Args> for VerduraConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                csv_path: args.catalog.csv_path,
                region_suffix: args.catalog.region_suffix,
            },
            geocoder: GeocoderConfig {
                base_url: args.geocoder.base_url,
                user_agent: args.geocoder.user_agent,
                request_delay: Duration::from_millis(args.geocoder.delay_ms),
                timeout: Duration::from_secs(args.geocoder.timeout_secs),
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_vision_model: args.llm.gemini_vision_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_convert_into_core_config() {
        let args = Args::try_parse_from([
            "verdura-api",
            "--market-csv-path",
            "/data/markets.csv",
            "--geocoder-delay-ms",
            "0",
            "--allowed-origins",
            "http://localhost:3000,https://verdura.example",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://verdura.example"]
        );

        let config = VerduraConfig::from(args);
        assert_eq!(config.catalog.csv_path, PathBuf::from("/data/markets.csv"));
        assert_eq!(config.geocoder.request_delay, Duration::ZERO);
    }
}
