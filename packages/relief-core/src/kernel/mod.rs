// Process-level plumbing around the store: notifications and connectivity

pub mod connectivity;
pub mod notifications;
pub mod probe;

pub use connectivity::{Connectivity, ConnectivityFeed};
pub use notifications::{drain, Notification, NotificationVariant, Notifier};
pub use probe::ReachabilityProbe;
