use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use llm_arena::api::{create_router, AppState};
use llm_arena::config::load_dotenv;
use llm_arena::logging::{init_tracing, log_info, log_warn};
use llm_arena::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "llm-arena",
    version,
    about = "Compare LLM providers side by side on one prompt"
)]
struct Cli {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "ARENA_BIND", default_value = "0.0.0.0:7860")]
    bind: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "ARENA_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before clap, so `ARENA_*` flags can come from the file too.
    let dotenv = load_dotenv(None);
    let cli = Cli::parse();
    init_tracing("info", cli.log_json);
    match dotenv {
        Ok(Some(path)) => log_info!(path = %path.display(), "Loaded environment file"),
        Ok(None) => {}
        Err(e) => log_warn!(error = %e, "Ignoring unreadable environment file"),
    }

    let config = AppConfig::from_env();
    let state = AppState::new(&config);
    let app = create_router(state);

    let addr: SocketAddr = cli
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", cli.bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    log_info!(
        %addr,
        concurrency_limit = config.server.concurrency_limit,
        fast_model = %config.server.fast_model,
        "llm-arena listening"
    );

    axum::serve(listener, app)
        .await
        .context("server shutdown")?;
    Ok(())
}
