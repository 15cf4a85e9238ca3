//! Greeting service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;

use greeter::api::{app, docs::ApiDoc, AppState};
use greeter::config::Config;
use greeter::metrics;
use greeter::utils::shutdown_signal;

/// Greeting and health-check HTTP service.
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(about = "Serves a fixed greeting and a health check over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Host to bind (overrides GREETER_HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// HTTP port (overrides GREETER_PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so the filter can come from it
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&Config::default(), args.verbose);
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    init_tracing(&config, args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("greeter=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = if config.log_json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("GREETER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Log Level: {}", config.log_level);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Docs: {}", if config.docs_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let app_state = if config.metrics_enabled {
        let handle = metrics::install_recorder().map_err(|e| {
            error!("Failed to install metrics recorder: {}", e);
            e
        })?;
        metrics::init_metrics();
        AppState::with_metrics(handle)
    } else {
        AppState::new()
    };

    let listener = TcpListener::bind(config.bind_addr()).await.map_err(|e| {
        error!("Failed to bind {}:{}: {}", config.host, config.port, e);
        e
    })?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    info!(
        metrics = config.metrics_enabled,
        docs = config.docs_enabled,
        "Routes registered"
    );

    let router = app(app_state, &config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
