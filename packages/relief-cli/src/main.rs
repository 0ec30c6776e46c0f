// Interactive terminal front-end for the relief store

mod cmd;
mod context;
mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use relief_core::{
    Config, Connectivity, ConnectivityFeed, Locale, Notifier, ReliefStore, StoreHandle,
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "relief", about = "Disaster relief coordination: reports, volunteers, long-term support")]
struct Cli {
    /// Interface language (en, si, ta); overrides RELIEF_LOCALE
    #[arg(long)]
    locale: Option<Locale>,

    /// Milliseconds to show the submitting spinner; overrides RELIEF_SUBMIT_DELAY_MS
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Do not probe the network; connectivity is toggled by hand from the menu
    #[arg(long)]
    no_probe: bool,

    /// Start in the offline state (implies --no-probe)
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,relief_core=info,relief_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(ms) = cli.submit_delay_ms {
        config.submit_delay = Duration::from_millis(ms);
    }
    let manual_connectivity = cli.no_probe || cli.offline;

    let probe = config.probe();
    let initial = if cli.offline {
        Connectivity::Offline
    } else if manual_connectivity {
        Connectivity::Online
    } else {
        probe.check().await
    };
    tracing::info!(?initial, locale = %config.locale, "starting relief session");

    let notifier = Notifier::with_capacity(config.notification_capacity);
    let toasts = notifier.subscribe();
    let store = StoreHandle::new(
        ReliefStore::new(notifier, initial)
            .with_locale(config.locale)
            .with_region(config.map_region()),
    );

    let feed = ConnectivityFeed::new();
    let watch = store.watch_connectivity(feed.subscribe());

    let shutdown = CancellationToken::new();
    let probe_task = (!manual_connectivity)
        .then(|| tokio::spawn(probe.run(feed.clone(), initial, shutdown.clone())));

    let ctx = AppContext::new(store, feed, toasts, config, manual_connectivity);
    let session = tokio::task::spawn_blocking(move || cmd::run(ctx))
        .await
        .context("Interactive session panicked")?;

    shutdown.cancel();
    if let Some(task) = probe_task {
        if let Err(e) = task.await {
            tracing::warn!(error = %e, "reachability probe ended abnormally");
        }
    }
    watch.teardown().await;
    tracing::info!("relief session closed");

    session
}
