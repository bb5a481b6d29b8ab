//! Server configuration, read once from the environment at startup.

use forex_rate_providers::ProviderSettings;

/// Runtime configuration values. No logic beyond defaulting.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Selects the mock provider instead of the live Fixer.io provider.
    pub use_mock_provider: bool,
    pub fixer_api_key: String,
    pub fixer_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("FOREX_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: std::env::var("FOREX_DB_PATH")
                .unwrap_or_else(|_| "data/forex.db".to_string()),
            use_mock_provider: std::env::var("FOREX_USE_MOCK_PROVIDER")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            fixer_api_key: std::env::var("FOREX_FIXER_API_KEY").unwrap_or_default(),
            fixer_base_url: std::env::var("FOREX_FIXER_BASE_URL")
                .unwrap_or_else(|_| "https://data.fixer.io/api".to_string()),
        }
    }

    /// The provider variant this deployment runs with. Exactly one provider
    /// is active per instance; there is no runtime switching.
    pub fn provider_settings(&self) -> ProviderSettings {
        if self.use_mock_provider {
            ProviderSettings::Mock
        } else {
            ProviderSettings::Fixer {
                api_key: self.fixer_api_key.clone(),
                base_url: self.fixer_base_url.clone(),
            }
        }
    }
}
