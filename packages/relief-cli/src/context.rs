//! Application context with shared state and output helpers

use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use relief_core::kernel::drain;
use relief_core::{
    Config, Connectivity, ConnectivityFeed, MessageKey, Notification, NotificationVariant,
    StoreHandle,
};
use tokio::sync::broadcast;

/// Application context passed to all commands
pub struct AppContext {
    pub store: StoreHandle,
    pub config: Config,
    feed: ConnectivityFeed,
    toasts: broadcast::Receiver<Notification>,
    /// Connectivity is toggled from the menu instead of probed
    pub manual_connectivity: bool,
}

impl AppContext {
    pub fn new(
        store: StoreHandle,
        feed: ConnectivityFeed,
        toasts: broadcast::Receiver<Notification>,
        config: Config,
        manual_connectivity: bool,
    ) -> Self {
        Self {
            store,
            config,
            feed,
            toasts,
            manual_connectivity,
        }
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    /// Show a spinner for the configured submit delay, then run `submit`.
    pub fn submit<T>(&self, submit: impl FnOnce() -> T) -> T {
        let delay = self.config.submit_delay;
        if !delay.is_zero() {
            let pb = ProgressBar::new_spinner();
            if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(spinner);
            }
            pb.set_message("Submitting...");
            pb.enable_steady_tick(Duration::from_millis(100));
            thread::sleep(delay);
            pb.finish_and_clear();
        }
        submit()
    }

    /// Signal a connectivity change the way the environment would, then wait
    /// briefly for the store to pick it up.
    pub fn simulate_connectivity(&self, state: Connectivity) {
        self.feed.publish(state);
        for _ in 0..50 {
            if self.store.read().connectivity() == state {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        tracing::warn!(?state, "connectivity change not applied yet");
    }

    /// Print every notification the store emitted since the last call.
    pub fn flush_notifications(&mut self) {
        for toast in drain(&mut self.toasts) {
            let title = match toast.variant {
                NotificationVariant::Default => toast.title.bright_green().bold(),
                NotificationVariant::Destructive => toast.title.bright_red().bold(),
            };
            println!("{} {}", title, toast.description.dimmed());
        }
    }

    pub fn print_offline_banner(&self) {
        let store = self.store.read();
        if store.is_offline() {
            println!(
                "{}",
                format!(" ⚠ {} ", store.message(MessageKey::OfflineBanner))
                    .black()
                    .on_yellow()
            );
        }
    }

    pub fn print_header(&self, msg: &str) {
        println!();
        println!("{}", style(msg).bold());
    }

    pub fn print_info(&self, msg: &str) {
        println!("{}", style(msg).cyan());
    }

    pub fn print_warning(&self, msg: &str) {
        println!("{}", style(msg).yellow());
    }
}
