//! Shared ownership of the store plus the connectivity subscription.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::kernel::Connectivity;

use super::ReliefStore;

/// Cloneable handle to one [`ReliefStore`].
///
/// Locks are held only for the duration of a single synchronous mutation or
/// read, never across an `.await`.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    inner: Arc<RwLock<ReliefStore>>,
}

impl StoreHandle {
    pub fn new(store: ReliefStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, ReliefStore> {
        // Poisoning is ignored: each mutation is a single Vec operation.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, ReliefStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register the store as an observer of connectivity transitions.
    ///
    /// Each received state is applied with [`ReliefStore::set_connectivity`]
    /// until the returned guard is torn down or dropped, or the feed closes.
    pub fn watch_connectivity(
        &self,
        mut events: broadcast::Receiver<Connectivity>,
    ) -> ConnectivityWatch {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let store = self.clone();

        let task = tokio::spawn(async move {
            debug!("connectivity watch started");
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    event = events.recv() => match event {
                        Ok(state) => {
                            store.write().set_connectivity(state);
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, "connectivity watch lagged");
                        }
                        Err(RecvError::Closed) => {
                            info!("connectivity feed closed");
                            break;
                        }
                    },
                }
            }
            debug!("connectivity watch stopped");
        });

        ConnectivityWatch {
            cancel,
            task: Some(task),
        }
    }
}

/// Guard for a connectivity subscription. Dropping it cancels the watch;
/// [`ConnectivityWatch::teardown`] also waits for the task to finish.
#[derive(Debug)]
pub struct ConnectivityWatch {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ConnectivityWatch {
    /// Cancel and join. After this returns no further transition is applied.
    pub async fn teardown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "connectivity watch ended abnormally");
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for ConnectivityWatch {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::kernel::{drain, ConnectivityFeed, Notifier};

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_watch_applies_transitions() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let handle = StoreHandle::new(ReliefStore::new(notifier, Connectivity::Online));
        let feed = ConnectivityFeed::new();

        let watch = handle.watch_connectivity(feed.subscribe());
        feed.publish(Connectivity::Offline);
        settle().await;

        assert!(handle.read().is_offline());
        assert_eq!(drain(&mut rx).len(), 1);

        watch.teardown().await;
    }

    #[tokio::test]
    async fn test_teardown_stops_observing() {
        let handle = StoreHandle::new(ReliefStore::new(Notifier::new(), Connectivity::Online));
        let feed = ConnectivityFeed::new();

        let watch = handle.watch_connectivity(feed.subscribe());
        watch.teardown().await;

        assert_eq!(feed.publish(Connectivity::Offline), 0);
        settle().await;
        assert!(!handle.read().is_offline());
    }

    #[tokio::test]
    async fn test_drop_cancels_watch() {
        let handle = StoreHandle::new(ReliefStore::new(Notifier::new(), Connectivity::Online));
        let feed = ConnectivityFeed::new();

        drop(handle.watch_connectivity(feed.subscribe()));
        settle().await;

        feed.publish(Connectivity::Offline);
        settle().await;
        assert!(!handle.read().is_offline());
    }

    #[tokio::test]
    async fn test_closed_feed_ends_watch() {
        let handle = StoreHandle::new(ReliefStore::new(Notifier::new(), Connectivity::Online));
        let feed = ConnectivityFeed::new();

        let watch = handle.watch_connectivity(feed.subscribe());
        drop(feed);
        settle().await;

        assert!(watch.is_finished());
    }
}
