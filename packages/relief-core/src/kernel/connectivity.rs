//! Network reachability as seen by the environment.
//!
//! The environment side publishes transitions on a [`ConnectivityFeed`]; the
//! store subscribes through [`StoreHandle::watch_connectivity`] and keeps a
//! presentation-only offline flag. No queueing or sync hangs off it.
//!
//! [`StoreHandle::watch_connectivity`]: crate::store::StoreHandle::watch_connectivity

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Connectivity::Offline)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Connectivity::Online => Connectivity::Offline,
            Connectivity::Offline => Connectivity::Online,
        }
    }
}

/// Broadcast of "became reachable" / "became unreachable" events.
#[derive(Clone)]
pub struct ConnectivityFeed {
    sender: broadcast::Sender<Connectivity>,
}

impl ConnectivityFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Publish a transition. Returns how many observers received it.
    pub fn publish(&self, state: Connectivity) -> usize {
        tracing::debug!(?state, "connectivity signal");
        self.sender.send(state).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Connectivity> {
        self.sender.subscribe()
    }
}

impl Default for ConnectivityFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reachable() {
        assert_eq!(Connectivity::from_reachable(true), Connectivity::Online);
        assert!(Connectivity::from_reachable(false).is_offline());
        assert_eq!(Connectivity::Online.toggled(), Connectivity::Offline);
    }

    #[tokio::test]
    async fn test_feed_delivers_to_each_observer() {
        let feed = ConnectivityFeed::new();
        let mut a = feed.subscribe();
        let mut b = feed.subscribe();

        assert_eq!(feed.publish(Connectivity::Offline), 2);

        assert_eq!(a.recv().await.unwrap(), Connectivity::Offline);
        assert_eq!(b.recv().await.unwrap(), Connectivity::Offline);
    }
}
