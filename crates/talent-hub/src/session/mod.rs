//! Application-scoped session: who is signed in, what they can navigate to,
//! and their notification inbox.

pub mod inbox;
pub mod navigation;
pub mod routes;

use tracing::info;

use crate::catalog::Catalog;
use crate::domain::{User, UserRole};

pub use inbox::{InboxFilter, NotificationError, NotificationInbox};
pub use navigation::{navigation_for, NavItem, NAVIGATION};
pub use routes::{resolve, Resolution, Route};

/// Starts logged out. Only `login`, `logout`, `switch_role` and the inbox
/// actions change it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    inbox: NotificationInbox,
}

impl Session {
    pub fn new(inbox: NotificationInbox) -> Self {
        Self { user: None, inbox }
    }

    pub fn from_catalog(catalog: &dyn Catalog) -> Self {
        Self::new(NotificationInbox::new(catalog.notifications().to_vec()))
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Any credentials are accepted; the demo account for `role` signs in.
    pub fn login(&mut self, catalog: &dyn Catalog, email: &str, role: UserRole) -> &User {
        info!(%email, role = role.label(), "login");
        self.user.insert(catalog.user_for(role).clone())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.id, "logout");
        }
    }

    /// Swap to the demo account of another role, signing in if needed.
    pub fn switch_role(&mut self, catalog: &dyn Catalog, role: UserRole) -> &User {
        info!(role = role.label(), "switching role");
        self.user.insert(catalog.user_for(role).clone())
    }

    /// Sidebar for the current user; empty when logged out.
    pub fn navigation(&self) -> Vec<&'static NavItem> {
        self.role().map(navigation_for).unwrap_or_default()
    }

    pub fn inbox(&self) -> &NotificationInbox {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut NotificationInbox {
        &mut self.inbox
    }
}
