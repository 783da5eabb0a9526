use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Choice;

/// Fixed seven-stage hiring pipeline, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStage {
    Applied,
    Screening,
    Assessed,
    InterviewScheduled,
    Results,
    Accepted,
    Rejected,
}

impl PipelineStage {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Applied,
            Self::Screening,
            Self::Assessed,
            Self::InterviewScheduled,
            Self::Results,
            Self::Accepted,
            Self::Rejected,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Applied => 0,
            Self::Screening => 1,
            Self::Assessed => 2,
            Self::InterviewScheduled => 3,
            Self::Results => 4,
            Self::Accepted => 5,
            Self::Rejected => 6,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl Choice for PipelineStage {
    const ALL: &'static [Self] = &Self::ordered();

    fn slug(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Assessed => "assessed",
            Self::InterviewScheduled => "interview-scheduled",
            Self::Results => "results",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A talent's position in the pipeline for one job offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub talent_id: String,
    pub talent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talent_avatar: Option<String>,
    pub job_offer_id: String,
    pub job_title: String,
    pub stage: PipelineStage,
    pub matching_score: u8,
    pub applied_at: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
