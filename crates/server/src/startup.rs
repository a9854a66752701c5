use std::{fmt, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::employees::{file::FileEmployeeStore, memory::MemoryEmployeeStore, EmployeeStore};
use tracing::info;

use crate::routes::{self, ServerState};

/// Which store backs the deployed server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
            StoreKind::File => f.write_str("file"),
        }
    }
}

/// Construct the store once; handlers only ever see it through `ServerState`.
pub async fn build_store(kind: StoreKind, cfg: &AppConfig) -> anyhow::Result<Arc<dyn EmployeeStore>> {
    let store: Arc<dyn EmployeeStore> = match kind {
        StoreKind::Memory => MemoryEmployeeStore::new(),
        StoreKind::File => {
            common::env::ensure_data_dir(&cfg.storage.data_file).await?;
            FileEmployeeStore::new(&cfg.storage.data_file)
        }
    };
    Ok(store)
}

/// Build the store and router for `kind`.
pub async fn build_app(kind: StoreKind, cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = build_store(kind, cfg).await?;
    Ok(routes::build_router(ServerState { store }))
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(kind: StoreKind, cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(kind, &cfg).await?;

    let addr = cfg.bind_addr()?;
    info!(%addr, store = %kind, "starting employee server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}
