mod config;
mod http;
mod logging;
mod signals;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tenant_account::TenantAccountModule;
use tokio::net::TcpListener;

use crate::config::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Tenant Account Server - per-tenant settings, integrations, webhooks and API keys
#[derive(Parser)]
#[command(name = "tenant-account-server")]
#[command(about = "Tenant Account Server - per-tenant settings and credentials")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database instead of the configured DSN
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref()
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Tenant Account Server starting"
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let tenant_header = config.tenant_header()?;
    let db = connect_database(&config).await?;
    let module = TenantAccountModule::init(db, &config.modules.tenant_account).await?;

    let router = http::build_router(&config.server, &module, tenant_header);

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed; shutting down");
            }
        })
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn connect_database(config: &AppConfig) -> Result<DatabaseConnection> {
    let db_cfg = &config.database;

    let mut opts = ConnectOptions::new(db_cfg.dsn.clone());
    opts.max_connections(db_cfg.max_conns)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if db_cfg.dsn == crate::config::MOCK_DSN {
        tracing::info!("Mock mode enabled: using in-memory SQLite");
        // The in-memory database lives only as long as its connection.
        opts.min_connections(1);
    }

    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    tracing::info!(
        max_conns = db_cfg.max_conns,
        "Database connection established"
    );
    Ok(db)
}
