use anyhow::Result;
use schemacheck::Config;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resolve config and run the checklist ─────────────────────
    let cfg = Config::from_env();

    // Individual check failures never change the exit code; they are
    // visible in the output and the report.
    let _ = schemacheck::run(&cfg).await?;

    Ok(())
}
