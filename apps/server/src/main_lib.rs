use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use quoteshelf_core::quotes::{MemoryQuoteRepository, QuoteService, QuoteServiceTrait};
use quoteshelf_storage_sqlite::db::{self, write_actor};
use quoteshelf_storage_sqlite::quotes::QuoteRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    /// Database file in use; `None` for the memory backend.
    pub db_path: Option<String>,
}

pub fn init_tracing() {
    let log_format = std::env::var("QS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    match config.store {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory quote store");
            let repository = Arc::new(MemoryQuoteRepository::new());
            let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
                Arc::new(QuoteService::new(repository));
            Ok(Arc::new(AppState {
                quote_service,
                db_path: None,
            }))
        }
        StoreBackend::Sqlite => {
            let db_path = db::init(&config.db_path)?;
            tracing::info!("Database path in use: {}", db_path);

            let pool = db::create_pool(&db_path)?;
            db::run_migrations(&pool)?;
            let writer = write_actor::spawn_writer((*pool).clone());

            let quote_repository = Arc::new(QuoteRepository::new(pool, writer));
            let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
                Arc::new(QuoteService::new(quote_repository));
            Ok(Arc::new(AppState {
                quote_service,
                db_path: Some(db_path),
            }))
        }
    }
}
