//! The relief data store.
//!
//! Three independent collections (reports, volunteers, long-term support),
//! an offline flag, and six mutation operations. Every mutation runs to
//! completion synchronously and then publishes one notification.
//!
//! # Ordering
//!
//! - Reports and support entries are newest first (prepend)
//! - Volunteers are oldest first (append)
//!
//! # Lifecycle
//!
//! Records are created only by `add_*` and removed only by `delete_*`. No
//! operation changes a record in place, so a report stays `Pending` and a
//! support entry stays `Open` for as long as it exists.

mod handle;

pub use handle::{ConnectivityWatch, StoreHandle};

use tracing::{debug, info};

use crate::common::{ReportId, SupportId, VolunteerId};
use crate::domains::reports::{MapRegion, NewReport, Report};
use crate::domains::support::{NewSupportEntry, SupportEntry};
use crate::domains::volunteers::{NewVolunteer, Volunteer};
use crate::i18n::{translate, Locale, MessageKey};
use crate::kernel::{Connectivity, Notification, Notifier};

/// In-memory relief data. Constructed once by the owning front-end and
/// passed to whatever needs it.
#[derive(Debug)]
pub struct ReliefStore {
    reports: Vec<Report>,
    volunteers: Vec<Volunteer>,
    support: Vec<SupportEntry>,
    connectivity: Connectivity,
    locale: Locale,
    region: MapRegion,
    notifier: Notifier,
}

impl ReliefStore {
    /// Empty store. `initial` is the reachability known at startup.
    pub fn new(notifier: Notifier, initial: Connectivity) -> Self {
        Self {
            reports: Vec::new(),
            volunteers: Vec::new(),
            support: Vec::new(),
            connectivity: initial,
            locale: Locale::default(),
            region: MapRegion::default(),
            notifier,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Region that placeholder coordinates are drawn from.
    pub fn with_region(mut self, region: MapRegion) -> Self {
        self.region = region;
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Oldest first.
    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    /// Newest first.
    pub fn support_entries(&self) -> &[SupportEntry] {
        &self.support
    }

    pub fn find_report(&self, id: ReportId) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn is_offline(&self) -> bool {
        self.connectivity.is_offline()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Localized text for `key` in the store's current locale.
    pub fn message(&self, key: MessageKey) -> &'static str {
        translate(self.locale, key)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Assign id, timestamp and `Pending` status, fill placeholder
    /// coordinates when absent, and put the report first.
    pub fn add_report(&mut self, data: NewReport) -> Report {
        let report = data.into_report(&self.region);
        info!(
            report_id = %report.id,
            severity = %report.severity,
            offline = self.is_offline(),
            "report added"
        );
        self.reports.insert(0, report.clone());

        let body = if self.is_offline() {
            MessageKey::ReportSubmittedOffline
        } else {
            MessageKey::ReportSubmittedOnline
        };
        self.notify(MessageKey::ReportSubmittedTitle, body);
        report
    }

    /// Remove every report with `id`. Returns how many were removed; an
    /// unknown id is not an error.
    pub fn delete_report(&mut self, id: ReportId) -> usize {
        let removed = remove_matching(&mut self.reports, |r| r.id == id);
        log_delete("report", &id.to_string(), removed);
        self.notify(MessageKey::ReportDeletedTitle, MessageKey::ReportDeletedBody);
        removed
    }

    // =========================================================================
    // Volunteers
    // =========================================================================

    /// Register a volunteer at the end of the directory.
    pub fn add_volunteer(&mut self, data: NewVolunteer) -> Volunteer {
        let volunteer = data.into_volunteer();
        info!(volunteer_id = %volunteer.id, kind = %volunteer.kind, "volunteer registered");
        self.volunteers.push(volunteer.clone());
        self.notify(
            MessageKey::VolunteerRegisteredTitle,
            MessageKey::VolunteerRegisteredBody,
        );
        volunteer
    }

    pub fn delete_volunteer(&mut self, id: VolunteerId) -> usize {
        let removed = remove_matching(&mut self.volunteers, |v| v.id == id);
        log_delete("volunteer", &id.to_string(), removed);
        self.notify(MessageKey::EntryDeletedTitle, MessageKey::VolunteerDeletedBody);
        removed
    }

    // =========================================================================
    // Long-term support
    // =========================================================================

    /// Add an `Open` entry at the front of the pool.
    pub fn add_support(&mut self, data: NewSupportEntry) -> SupportEntry {
        let entry = data.into_entry();
        info!(
            support_id = %entry.id,
            kind = %entry.kind,
            category = %entry.category,
            "support entry added"
        );
        self.support.insert(0, entry.clone());
        self.notify(MessageKey::SupportAddedTitle, MessageKey::SupportAddedBody);
        entry
    }

    pub fn delete_support(&mut self, id: SupportId) -> usize {
        let removed = remove_matching(&mut self.support, |s| s.id == id);
        log_delete("support entry", &id.to_string(), removed);
        self.notify(MessageKey::EntryDeletedTitle, MessageKey::SupportDeletedBody);
        removed
    }

    // =========================================================================
    // Environment
    // =========================================================================

    /// Apply a reachability signal. A real transition flips the flag, emits
    /// exactly one notification and returns `true`; repeating the current
    /// state does nothing.
    pub fn set_connectivity(&mut self, state: Connectivity) -> bool {
        if state == self.connectivity {
            debug!(?state, "connectivity unchanged");
            return false;
        }
        self.connectivity = state;
        info!(?state, "connectivity transition");

        let notification = match state {
            Connectivity::Offline => Notification::destructive(
                self.message(MessageKey::OfflineTitle),
                self.message(MessageKey::OfflineBody),
            ),
            Connectivity::Online => Notification::new(
                self.message(MessageKey::OnlineTitle),
                self.message(MessageKey::OnlineBody),
            ),
        };
        self.notifier.notify(notification);
        true
    }

    /// Later notifications are rendered in `locale`.
    pub fn set_locale(&mut self, locale: Locale) {
        debug!(%locale, "locale changed");
        self.locale = locale;
    }

    fn notify(&self, title: MessageKey, body: MessageKey) {
        self.notifier
            .notify(Notification::new(self.message(title), self.message(body)));
    }
}

/// `retain` with the negated predicate, returning how many were dropped.
fn remove_matching<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !matches(item));
    before - items.len()
}

fn log_delete(collection: &str, id: &str, removed: usize) {
    if removed == 0 {
        debug!(collection, id, "delete of unknown id ignored");
    } else {
        info!(collection, id, removed, "deleted");
    }
}
