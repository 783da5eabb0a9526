use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    ApplicationReceived,
    AssessmentAssigned,
    AssessmentCompleted,
    InterviewScheduled,
    FinalDecision,
    System,
}

impl Choice for NotificationType {
    const ALL: &'static [Self] = &[
        Self::ApplicationReceived,
        Self::AssessmentAssigned,
        Self::AssessmentCompleted,
        Self::InterviewScheduled,
        Self::FinalDecision,
        Self::System,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::ApplicationReceived => "application-received",
            Self::AssessmentAssigned => "assessment-assigned",
            Self::AssessmentCompleted => "assessment-completed",
            Self::InterviewScheduled => "interview-scheduled",
            Self::FinalDecision => "final-decision",
            Self::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPriority {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub priority: NotificationPriority,
}
