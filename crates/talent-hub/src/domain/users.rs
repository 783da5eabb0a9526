use serde::{Deserialize, Serialize};

use super::Choice;

/// Dashboard persona. Decides navigation and the scope of every list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Client,
    Admin,
    Talent,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Admin => "Admin",
            Self::Talent => "Talent",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Client => "Post job offers and find talented professionals",
            Self::Admin => "Manage talent pool and validate job offers",
            Self::Talent => "Showcase your skills and find opportunities",
        }
    }
}

impl Choice for UserRole {
    const ALL: &'static [Self] = &[Self::Client, Self::Admin, Self::Talent];

    fn slug(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
            Self::Talent => "talent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl User {
    /// First character of the display name, used for avatar placeholders.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
