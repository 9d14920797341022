//! OrgChart API - Department and Employee Service
//!
//! HTTP service exposing CRUD over departments and employees. Every storage
//! call goes through the request orchestrator, which applies a per-attempt
//! timeout and a bounded retry budget before resolving a three-way outcome.

mod config;
mod dto;
mod handlers;
mod metrics;
mod response;
mod routes;
mod storage;


use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orgchart_domain::{DepartmentService, EmployeeService, GatewayConfig};
use orgchart_orchestrator::{Orchestrator, PolicyTable};

use crate::config::{AppConfig, LogFormat};
use crate::metrics::Metrics;
use crate::storage::Backend;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub departments: Arc<DepartmentService<Backend, Backend>>,
    pub employees: Arc<EmployeeService<Backend>>,
    pub orchestrator: Arc<Orchestrator>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Wire the gateways, the orchestrator and the metrics on top of a backend
    pub fn new(
        backend: Backend,
        gateway: GatewayConfig,
        policies: PolicyTable,
    ) -> Result<Self, prometheus::Error> {
        Ok(Self {
            departments: Arc::new(DepartmentService::new(
                backend.clone(),
                backend.clone(),
                gateway.clone(),
            )),
            employees: Arc::new(EmployeeService::new(backend, gateway)),
            orchestrator: Arc::new(Orchestrator::new(policies)),
            metrics: Arc::new(Metrics::new()?),
        })
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    info!("Starting OrgChart API service");

    let backend = Backend::from_config(&config).await?;
    let default_policy = config.policies.default_policy();
    info!(
        backend = backend.name(),
        timeout_ms = default_policy.timeout_ms(),
        max_retries = default_policy.max_retries,
        "Storage ready"
    );

    // Create shared application state
    let state = AppState::new(backend, config.gateway.clone(), config.policies.clone())?;

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
