//! TaskReg Server

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskreg_exec::CommandExecutor;
use taskreg_server::{http, AppState, Config, StoreKind, TaskService};

/// TaskReg task registry server.
#[derive(Parser, Debug)]
#[command(name = "taskreg-server", about = "TaskReg task registry HTTP server")]
struct Args {
    /// HTTP server address
    #[arg(long, env = "TASKREG_HTTP_ADDR", default_value = "127.0.0.1:8080")]
    http_addr: String,

    /// Task store backend
    #[arg(long, env = "TASKREG_STORE", value_enum, default_value_t = StoreKind::Memory)]
    store: StoreKind,

    /// Document file for the file store
    #[arg(long, env = "TASKREG_DATA_FILE", default_value = "taskreg-data.json")]
    data_file: PathBuf,

    /// Working directory for executed commands
    #[arg(long, env = "TASKREG_WORKDIR")]
    workdir: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            http_bind_addr: args.http_addr,
            store: args.store,
            data_file: args.data_file,
            working_dir: args.workdir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("taskreg_server=info,taskreg_exec=info,tower_http=info")
        }))
        .with_target(true)
        .init();

    let config = Config::from(args);
    let http_addr: SocketAddr = config.http_bind_addr.parse()?;

    let store = config.open_store().await?;

    let mut executor = CommandExecutor::new();
    if let Some(dir) = &config.working_dir {
        executor = executor.with_working_dir(dir);
    }

    let state = AppState::new(TaskService::new(store, Arc::new(executor)));
    let router = http::create_router(state);

    info!(
        http_addr = %http_addr,
        store = ?config.store,
        data_file = %config.data_file.display(),
        "Starting TaskReg server"
    );

    let listener = TcpListener::bind(http_addr).await?;
    info!("HTTP server listening on {}", http_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("TaskReg server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
