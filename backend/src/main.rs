//! HR backend entry-point: loads settings, selects the Entity Store, and
//! serves the REST API with health probes and OpenAPI docs.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hr_backend::inbound::http::health::HealthState;
use hr_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use hr_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os()).context("load settings")?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr);

    match settings.database_url.as_deref() {
        Some(url) => {
            if settings.run_migrations() {
                run_migrations(url).await.context("apply migrations")?;
                info!("migrations applied");
            }
            let pool_config = PoolConfig::new(url).with_max_size(
                settings
                    .db_max_connections
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            );
            let pool = DbPool::new(pool_config)
                .await
                .context("connect to database")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("HR_DATABASE_URL unset; records live in memory only"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("hr")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}

/// Build Prometheus middleware, logging and continuing without it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> std::result::Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics disabled");
            None
        }
    }
}
