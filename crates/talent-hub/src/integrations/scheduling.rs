use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::info;

use super::recover;
use crate::workflows::interview::InterviewType;

/// Everything a calendar backend needs to send invites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewInvite {
    pub candidate_name: String,
    pub job_title: String,
    pub interview_type: InterviewType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub interviewers: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

pub trait SchedulingService: Send + Sync {
    fn schedule(&self, invite: &InterviewInvite) -> Result<(), SchedulingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("calendar unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct SimulatedScheduler {
    invites: Mutex<Vec<InterviewInvite>>,
}

impl SimulatedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invites(&self) -> Vec<InterviewInvite> {
        recover(&self.invites).clone()
    }
}

impl SchedulingService for SimulatedScheduler {
    fn schedule(&self, invite: &InterviewInvite) -> Result<(), SchedulingError> {
        info!(
            candidate = %invite.candidate_name,
            job = %invite.job_title,
            date = %invite.date,
            time = %invite.time.format("%H:%M"),
            interviewers = invite.interviewers.len(),
            "interview scheduled"
        );
        recover(&self.invites).push(invite.clone());
        Ok(())
    }
}
