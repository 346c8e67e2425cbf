//! Backend entry-point: loads configuration, prepares storage and serves the
//! contact-book API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use agenda::inbound::http::health::HealthState;
use agenda::inbound::http::session_config::{BuildMode, session_settings_from_env};
use agenda::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_process()?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(session, settings.bind_addr()?);

    if let Some(pool_config) = settings.pool_config() {
        run_pending_migrations(pool_config.database_url())
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
        info!("storing records in PostgreSQL");
    } else {
        warn!("AGENDA_DATABASE_URL not set; records are kept in memory and lost on restart");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr, "starting server");
    create_server(health_state, config)?.await
}
