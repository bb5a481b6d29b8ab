use std::sync::Arc;

use forex_core::conversions::{ConversionService, ConversionServiceTrait};
use forex_rate_providers::ProviderFactory;
use forex_storage_sqlite::conversions::ConversionRepository;
use forex_storage_sqlite::db;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub conversion_service: Arc<dyn ConversionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FOREX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let repository = Arc::new(ConversionRepository::new(pool, writer));
    let rate_provider = ProviderFactory::create(&config.provider_settings());
    let conversion_service = Arc::new(ConversionService::new(rate_provider, repository));

    Ok(Arc::new(AppState { conversion_service }))
}
