//! Role-scoped, searchable projections of the catalog, one per page.
//!
//! Every list view applies the same three passes in order: the role scope, a
//! case-insensitive substring search, then exact-match dropdown filters where
//! `all` lets everything through. Catalog order is preserved.

pub mod assessments;
pub mod dashboard;
pub mod jobs;
pub mod pipeline;
pub mod requests;
pub mod talents;

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{Choice, User, UserRole};

pub use assessments::{assessments, AssessmentQuery};
pub use dashboard::{dashboard, AdminStats, ClientStats, Dashboard, TalentStats};
pub use jobs::{job_offers, JobQuery};
pub use pipeline::{pipeline, pipeline_board, PipelineBoard, PipelineQuery, StageColumn};
pub use requests::{talent_requests, RequestQuery};
pub use talents::{talent_profiles, TalentQuery};

pub const NO_DATA: &str = "No data available";

/// Rows of one page plus the message shown when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<T> ListView<T> {
    pub fn new(rows: Vec<T>, empty_message: &'static str) -> Self {
        let total = rows.len();
        Self {
            empty_message: (total == 0).then_some(empty_message),
            rows,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Dropdown filter value: `all`, or one variant of a closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Choice> Filter<T> {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        T::from_slug(raw).map(Self::Only)
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
        }
    }
}

impl<T: Choice> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(value) => serializer.serialize_str(value.slug()),
        }
    }
}

impl<'de, T: Choice> Deserialize<'de> for Filter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FilterVisitor<T>(PhantomData<T>);

        impl<T: Choice> Visitor<'_> for FilterVisitor<T> {
            type Value = Filter<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let options = T::ALL.iter().map(|value| value.slug()).collect::<Vec<_>>();
                write!(f, "`all` or one of {}", options.join(", "))
            }

            fn visit_str<E: de::Error>(self, raw: &str) -> Result<Self::Value, E> {
                Filter::parse(raw).ok_or_else(|| E::invalid_value(de::Unexpected::Str(raw), &self))
            }
        }

        deserializer.deserialize_str(FilterVisitor(PhantomData))
    }
}

/// Case-insensitive substring match against any field. Only an empty query
/// matches everything; whitespace is matched literally.
pub fn search_matches<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Who is looking at a page. Logged-out viewers get no role scope.
#[derive(Debug, Clone, Copy)]
pub struct Viewer<'a> {
    user: Option<&'a User>,
}

impl<'a> Viewer<'a> {
    pub fn new(user: Option<&'a User>) -> Self {
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// The viewer's id when they hold `role`.
    pub(crate) fn id_as(&self, role: UserRole) -> Option<&'a str> {
        self.user
            .filter(|user| user.role == role)
            .map(|user| user.id.as_str())
    }
}

impl<'a> From<&'a User> for Viewer<'a> {
    fn from(user: &'a User) -> Self {
        Self { user: Some(user) }
    }
}
