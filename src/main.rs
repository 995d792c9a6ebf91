use anyhow::Result;
use sesh::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Structured logging only when debug mode is requested; normal runs
    // print through the message macros instead
    if std::env::var("SESH_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sesh=debug")))
            .init();
    }

    Cli::menu()
}
