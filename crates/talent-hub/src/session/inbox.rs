use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Notification;
use crate::views::ListView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InboxFilter {
    #[default]
    All,
    Unread,
}

impl InboxFilter {
    const fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No notifications yet",
            Self::Unread => "No unread notifications",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification {id} not found")]
    NotFound { id: String },
}

/// The signed-in user's notifications, newest first as seeded.
#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn list(&self, filter: InboxFilter) -> ListView<&Notification> {
        let rows = self
            .notifications
            .iter()
            .filter(|notification| filter == InboxFilter::All || !notification.read)
            .collect();
        ListView::new(rows, filter.empty_message())
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<&Notification, NotificationError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or_else(|| NotificationError::NotFound { id: id.to_string() })?;
        notification.read = true;
        Ok(notification)
    }

    /// Returns how many notifications changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        debug!(changed, "notifications marked read");
        changed
    }

    pub fn delete(&mut self, id: &str) -> Result<Notification, NotificationError> {
        let index = self
            .notifications
            .iter()
            .position(|notification| notification.id == id)
            .ok_or_else(|| NotificationError::NotFound { id: id.to_string() })?;
        Ok(self.notifications.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, StaticCatalog};

    fn inbox() -> NotificationInbox {
        NotificationInbox::new(StaticCatalog::seeded().notifications().to_vec())
    }

    #[test]
    fn unread_filter_hides_read_items() {
        let inbox = inbox();
        let unread = inbox.list(InboxFilter::Unread);
        assert_eq!(unread.len(), inbox.unread_count());
        assert!(unread.rows.iter().all(|notification| !notification.read));
        assert!(inbox.list(InboxFilter::All).len() > unread.len());
    }

    #[test]
    fn mark_read_and_mark_all_read() {
        let mut inbox = inbox();
        let before = inbox.unread_count();
        assert!(before >= 2);

        inbox.mark_read("1").expect("seeded notification");
        assert_eq!(inbox.unread_count(), before - 1);

        assert_eq!(inbox.mark_all_read(), before - 1);
        assert_eq!(inbox.unread_count(), 0);
        let empty = inbox.list(InboxFilter::Unread);
        assert!(empty.is_empty());
        assert_eq!(empty.empty_message, Some("No unread notifications"));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut inbox = inbox();
        assert!(matches!(
            inbox.mark_read("missing"),
            Err(NotificationError::NotFound { .. })
        ));
        let total = inbox.list(InboxFilter::All).len();
        inbox.delete("3").expect("seeded notification");
        assert_eq!(inbox.list(InboxFilter::All).len(), total - 1);
        assert!(inbox.delete("3").is_err());
    }
}
