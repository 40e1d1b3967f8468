//! Procurement watcher — binary entrypoint.
//! One run per invocation: fetch the listing, notify new keyword matches,
//! persist the seen-set. Scheduling is external (cron / CI).

use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bid_watcher::config::Config;
use bid_watcher::listing::HttpListing;
use bid_watcher::notify::SlackNotifier;
use bid_watcher::pipeline::run_once;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bid_watcher=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when the vars come from the scheduler.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    let source = HttpListing::new(cfg.listing_url.clone());
    let notifier = SlackNotifier::new(cfg.webhook_url.clone());

    if let Err(e) = run_once(&cfg, &source, &notifier).await {
        error!(error = ?e, "run failed");
        eprintln!("run failed: {e:#}");
        std::process::exit(1);
    }
}
