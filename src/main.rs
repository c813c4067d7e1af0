use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

use job_portal::listing::load_cards;
use job_portal::render::{render_cards, render_view};
use job_portal::view::{ApplicationRequest, ApplyHandoff, ApplyOutcome};
use job_portal::{
    telemetry, CallerIdentity, JobDetailAggregator, JobsApi, PortalConfig, ServiceClient,
    ViewOptions,
};

#[derive(Parser)]
#[command(name = "job-portal")]
#[command(about = "Browse job postings from the hiring portal")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL, overriding configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Email of the person applying
    #[arg(long, global = true, env = "JOB_PORTAL_USER_EMAIL")]
    email: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Show a job with its company and similar jobs
    Show {
        id: String,
        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a job and keep its deadline countdown running until Ctrl-C
    Watch { id: String },
    /// Apply to a job
    Apply { id: String },
    /// List all jobs
    List,
}

/// Terminal stand-in for the browser and the application page.
struct TerminalHandoff;

impl ApplyHandoff for TerminalHandoff {
    fn open_external(&self, url: &str) -> Result<()> {
        println!("Apply on company site: {}", url);
        Ok(())
    }

    fn start_application(&self, request: &ApplicationRequest) -> Result<()> {
        let payload =
            serde_json::to_string_pretty(request).context("Failed to encode application")?;
        println!("Continue your application at /application with:\n{}", payload);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PortalConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    telemetry::init(&config)?;

    info!(
        "Hiring portal API: {} (environment: {})",
        config.api_base_url,
        PortalConfig::environment()
    );

    let api: Arc<dyn JobsApi> = Arc::new(ServiceClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
    )?);
    let session = cli
        .email
        .map(CallerIdentity::with_email)
        .unwrap_or_else(CallerIdentity::anonymous);
    let aggregator = JobDetailAggregator::new(Arc::clone(&api), session, ViewOptions::from(&config));

    match cli.command {
        Command::Show { id, json } => {
            let mut view = aggregator.activate(id);
            let vm = view.settled().await;
            view.deactivate().await;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&vm).context("Failed to encode view")?
                );
            } else {
                print!("{}", render_view(&vm, Utc::now()));
            }
        }
        Command::Watch { id } => {
            let mut view = aggregator.activate(id);
            let vm = view.settled().await;
            print!("{}", render_view(&vm, Utc::now()));

            if vm.is_ready() {
                let mut updates = view.subscribe();
                let ctrl_c = tokio::signal::ctrl_c();
                tokio::pin!(ctrl_c);

                loop {
                    tokio::select! {
                        _ = &mut ctrl_c => break,
                        changed = updates.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            let left = updates.borrow_and_update().time_left;
                            if let Some(left) = left {
                                print!("\rApplication closes in: {:<24}", left);
                                let _ = std::io::stdout().flush();
                            }
                        }
                    }
                }
                println!();
            }

            view.deactivate().await;
        }
        Command::Apply { id } => {
            let mut view = aggregator.activate(id);
            let vm = view.settled().await;
            let outcome = view.apply(&TerminalHandoff);
            view.deactivate().await;

            match outcome {
                Ok(ApplyOutcome::OpenedExternal { url }) => info!("Opened {}", url),
                Ok(ApplyOutcome::ApplicationStarted(request)) => {
                    info!("Application started for {}", request.job_id)
                }
                Err(e) => {
                    print!("{}", render_view(&vm, Utc::now()));
                    anyhow::bail!("Cannot apply: {}", e);
                }
            }
        }
        Command::List => {
            let cards = load_cards(api.as_ref()).await?;
            print!("{}", render_cards(&cards));
        }
    }

    Ok(())
}
