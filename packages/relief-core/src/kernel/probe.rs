//! TCP reachability probe.
//!
//! Stands in for the browser's online/offline events: a connect attempt to a
//! well-known address decides reachability, and [`ReachabilityProbe::run`]
//! publishes a transition whenever the answer changes.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::connectivity::{Connectivity, ConnectivityFeed};

/// Floor for the polling period; `tokio::time::interval` rejects zero.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct ReachabilityProbe {
    /// `host:port` to connect to
    pub addr: String,
    pub interval: Duration,
    pub timeout: Duration,
}

impl ReachabilityProbe {
    pub fn new(addr: impl Into<String>, interval: Duration, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            interval,
            timeout,
        }
    }

    /// One connect attempt within `timeout`.
    pub async fn check(&self) -> Connectivity {
        let attempt = tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await;
        let reachable = matches!(attempt, Ok(Ok(_)));
        debug!(addr = %self.addr, reachable, "reachability probe");
        Connectivity::from_reachable(reachable)
    }

    /// Poll every `interval`, publishing to `feed` only when the state differs
    /// from the last one seen. Starts from `initial`; stops when `cancel` fires.
    pub async fn run(self, feed: ConnectivityFeed, initial: Connectivity, cancel: CancellationToken) {
        let mut last = initial;
        let mut interval = tokio::time::interval(self.interval.max(MIN_INTERVAL));
        interval.tick().await; // Skip first immediate tick

        info!(addr = %self.addr, interval_ms = self.interval.as_millis() as u64, "reachability probe started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    let state = self.check().await;
                    if state != last {
                        info!(?state, "connectivity changed");
                        feed.publish(state);
                        last = state;
                    }
                }
            }
        }
        info!("reachability probe stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn probe(addr: String) -> ReachabilityProbe {
        ReachabilityProbe::new(addr, Duration::from_millis(20), Duration::from_millis(500))
    }

    #[tokio::test]
    async fn test_zero_interval_runs_until_cancelled() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let probe = ReachabilityProbe::new(addr, Duration::ZERO, Duration::from_millis(500));
        let cancel = CancellationToken::new();

        let task = tokio::spawn(probe.run(ConnectivityFeed::new(), Connectivity::Online, cancel.clone()));
        tokio::time::sleep(Duration::from_millis(30)).await;
        cancel.cancel();

        assert!(task.await.is_ok());
    }

    #[tokio::test]
    async fn test_check_reachable_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        assert_eq!(probe(addr).check().await, Connectivity::Online);
    }

    #[tokio::test]
    async fn test_check_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        assert_eq!(probe(addr).check().await, Connectivity::Offline);
    }

    #[tokio::test]
    async fn test_run_publishes_transition_and_stops() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let feed = ConnectivityFeed::new();
        let mut rx = feed.subscribe();
        let cancel = CancellationToken::new();

        // Starts believing it is offline; the listener is up, so it flips online.
        let task = tokio::spawn(probe(addr).run(feed.clone(), Connectivity::Offline, cancel.clone()));

        let state = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(state, Connectivity::Online);

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        drop(listener);
    }
}
