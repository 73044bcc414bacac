// Brand Insight CLI Entry Point
// Runs one analysis against the backend and prints the normalized result.

use anyhow::{bail, Context};
use brand_insight_core::{BackendConfig, SupervisorHandle};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: brand-insight <url> [context]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(url) = args.next() else {
        bail!(USAGE);
    };
    let context = args.collect::<Vec<_>>().join(" ");

    let config = BackendConfig::from_env().context("Failed to load backend configuration")?;
    info!("Using backend at {}", config.base_url);

    let supervisor = SupervisorHandle::new(config);

    let analysis = match supervisor.analyze(url).await {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Analysis failed: {}", e);
            bail!("Failed to analyze URL: {}", e);
        }
    };

    println!("{}", serde_json::to_string_pretty(analysis.as_ref())?);

    if !context.trim().is_empty() {
        let message = supervisor
            .generate_message(context)
            .await
            .context("Failed to generate message")?;
        println!("\nGenerated message:\n{}", message);
    }

    supervisor.shutdown().await?;
    Ok(())
}
