//! Todo proxy service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todo_proxy::api::{create_router, AppState};
use todo_proxy::config::Config;
use todo_proxy::metrics;
use todo_proxy::upstream::TodoClient;
use todo_proxy::utils::shutdown_signal;

/// HTTP proxy for a remote todo REST API.
#[derive(Parser, Debug)]
#[command(name = "todo-proxy")]
#[command(about = "Proxies CRUD requests for todos to a remote REST API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the proxy server (default).
    Run {
        /// HTTP server port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check that the upstream API is reachable.
    CheckUpstream,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("todo_proxy=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::CheckUpstream) => cmd_check_upstream().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("TODO PROXY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

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
    println!("  Upstream URL: {}", config.upstream_base());
    println!("  Port: {}", config.port);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  HTTP Pool Size: {}", config.http_pool_size);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Check that the upstream API is reachable.
async fn cmd_check_upstream() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("TODO PROXY - UPSTREAM CHECK");
    println!("======================================================================");

    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    println!("Upstream: {}", config.upstream_base());

    print!("\n1. Creating client... ");
    let client = TodoClient::new(&config);
    println!("OK");

    print!("\n2. Fetching todo list... ");
    match client.list_todos().await {
        Ok(todos) => {
            println!("OK");
            println!("   Total todos: {}", todos.len());
            for todo in todos.iter().take(5) {
                println!("   - [{}] {}", todo.id, todo.title);
            }
            if todos.len() > 5 {
                println!("   ... and {} more", todos.len() - 5);
            }
        }
        Err(e) => {
            println!("FAILED");
            println!("   Error: {}", e);
            return Err(anyhow::anyhow!("Upstream unreachable"));
        }
    }

    println!("\n======================================================================");
    println!("UPSTREAM CHECK COMPLETED");
    println!("======================================================================");

    Ok(())
}

/// Run the proxy server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Upstream URL: {}", config.upstream_base());

    let client = TodoClient::new(&config);
    let mut app_state = AppState::new(client);

    if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;
        app_state = app_state.with_prometheus(handle);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
