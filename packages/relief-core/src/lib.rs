//! Relief coordination store.
//!
//! Holds incident reports, volunteer registrations and long-term support
//! offers/requests in memory for the lifetime of one process, and tells the
//! UI about every change through a notification channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! use relief_core::{ReliefStore, StoreHandle, Notifier, Connectivity, ConnectivityFeed};
//! use relief_core::domains::reports::{ReportForm, ReportKind};
//!
//! let notifier = Notifier::new();
//! let mut toasts = notifier.subscribe();
//! let store = StoreHandle::new(ReliefStore::new(notifier, Connectivity::Online));
//!
//! let feed = ConnectivityFeed::new();
//! let watch = store.watch_connectivity(feed.subscribe());
//!
//! let payload = form.validate(ReportKind::ForSelf)?;
//! let report = store.write().add_report(payload);
//!
//! watch.teardown().await;
//! ```
//!
//! # Modules
//!
//! - [`store`] - The store and its shared handle
//! - [`domains`] - Record types, forms, dashboard filter, CSV export
//! - [`kernel`] - Notifications, connectivity feed, reachability probe
//! - [`i18n`] - Message lookup per locale
//! - [`config`] - Environment configuration

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod i18n;
pub mod kernel;
pub mod store;

pub use common::{ReportId, SupportId, VolunteerId};
pub use config::Config;
pub use error::{FieldError, ParseEnumError, ReliefError, Result, ValidationErrors};
pub use i18n::{translate, Locale, MessageKey};
pub use kernel::{
    Connectivity, ConnectivityFeed, Notification, NotificationVariant, Notifier,
    ReachabilityProbe,
};
pub use store::{ConnectivityWatch, ReliefStore, StoreHandle};
