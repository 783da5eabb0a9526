use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::jobs::Skill;
use super::talents::TalentProfile;
use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    Shortlist,
    SingleProfile,
    BackupProfiles,
}

impl RequestType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shortlist => "Shortlist",
            Self::SingleProfile => "Single Profile",
            Self::BackupProfiles => "Backup Profiles",
        }
    }
}

impl Choice for RequestType {
    const ALL: &'static [Self] = &[Self::Shortlist, Self::SingleProfile, Self::BackupProfiles];

    fn slug(self) -> &'static str {
        match self {
            Self::Shortlist => "shortlist",
            Self::SingleProfile => "single-profile",
            Self::BackupProfiles => "backup-profiles",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestUrgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl Choice for RequestUrgency {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];

    fn slug(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InReview,
    Matched,
    Completed,
}

impl Choice for RequestStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::InReview,
        Self::Matched,
        Self::Completed,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in-review",
            Self::Matched => "matched",
            Self::Completed => "completed",
        }
    }
}

/// Ad-hoc client ask for talent. `matched_talents` is whatever the mock data
/// says it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRequest {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub title: String,
    pub skills: Vec<Skill>,
    pub urgency: RequestUrgency,
    pub availability: String,
    pub timezone: String,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_talents: Vec<TalentProfile>,
}
