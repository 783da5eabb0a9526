use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentType {
    Technical,
    SoftSkill,
    CodeChallenge,
}

impl AssessmentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::SoftSkill => "Soft Skills",
            Self::CodeChallenge => "Code Challenge",
        }
    }
}

impl Choice for AssessmentType {
    const ALL: &'static [Self] = &[Self::Technical, Self::SoftSkill, Self::CodeChallenge];

    fn slug(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::SoftSkill => "soft-skill",
            Self::CodeChallenge => "code-challenge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    Pending,
    InProgress,
    Completed,
    Expired,
}

impl Choice for AssessmentStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Expired,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub talent_id: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub title: String,
    pub description: String,
    pub status: AssessmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
    pub max_score: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// Lifecycle of a repository-backed coding challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeAssessmentStatus {
    NotStarted,
    InProgress,
    Submitted,
    Reviewed,
}

impl Choice for CodeAssessmentStatus {
    const ALL: &'static [Self] = &[
        Self::NotStarted,
        Self::InProgress,
        Self::Submitted,
        Self::Reviewed,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAssessment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub talent_id: String,
    pub talent_name: String,
    pub status: CodeAssessmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub deadline: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
