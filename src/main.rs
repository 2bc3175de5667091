//! People screen client for the organization admin portal.
//!
//! Lists an organization's members and admins, with search-by-first-name
//! submitted on demand. The terminal front end is deliberately thin; all
//! behavior lives in the controller and gateway modules.

mod config;
mod controller;
mod errors;
mod gateway;
mod models;

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use controller::{PeopleController, Phase};
use gateway::HttpGateway;
use models::ViewMode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting People screen client");
    tracing::info!("Portal API: {}", config.api_url);
    tracing::info!("Organization: {:?}", config.org_id);

    // Warn if no API key is configured
    if config.api_key.is_none() {
        tracing::warn!("No API key configured (PORTAL_API_KEY). Requests are sent unauthenticated.");
    }

    let gateway = Arc::new(HttpGateway::new(&config)?);
    let controller = PeopleController::new(gateway, config.org_id.clone());

    // Initial load: Members mode, empty filter.
    controller.submit_search().await;
    render(&controller).await;

    println!("Type a name fragment and press Enter to search.");
    println!("Commands: :members  :admins  :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":admins" => controller.set_view_mode(ViewMode::Admins).await,
            ":members" => controller.set_view_mode(ViewMode::Members).await,
            text => {
                controller.set_filter_text(text).await;
                controller.submit_search().await;
            }
        }

        render(&controller).await;
    }

    Ok(())
}

/// Print the current display state.
async fn render(controller: &PeopleController) {
    if controller.phase().await == Phase::Errored {
        println!("Could not load people. Check the portal connection and try again.");
        return;
    }

    let records = controller.records().await;
    if records.is_empty() {
        println!("Nothing to show here.");
        return;
    }

    for person in &records {
        println!(
            "{:<30} {:<30} joined {}",
            person.full_name(),
            person.email,
            person.created_at.format("%Y-%m-%d")
        );
    }
}
