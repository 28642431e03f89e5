//! aqdash - fetch air-quality metrics and render one dashboard view
//!
//! Reads its selection from the environment, runs one refresh cycle against
//! the metrics API, and prints the requested view. Fetch failures surface as
//! an error banner over whatever data loaded, never as a process failure.

mod config;
mod render;

use anyhow::{Context, Result};
use aq_api::HttpApi;
use aq_view::ViewController;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    info!(?config, "starting aqdash");

    let api = HttpApi::new(&config.api_url).context("Invalid AQ_API_URL")?;
    let mut controller = ViewController::new(Arc::new(api));

    controller.load_cities().await;
    controller.select_city(&config.city).await;
    controller.select_month(&config.month);
    controller.select_view(config.view);

    print!("{}", render::render(&controller.state));

    Ok(())
}
