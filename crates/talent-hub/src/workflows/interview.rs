//! Three-step interview scheduler: details, calendar slot, confirmation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::integrations::{InterviewInvite, SchedulingError, SchedulingService};

pub const CONFIRMATION_MESSAGE: &str =
    "Interview scheduled successfully! Calendar invites will be sent to all participants.";

const FIRST_SLOT_HOUR: u32 = 9;
const SLOT_COUNT: u32 = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewStep {
    #[default]
    Details,
    Calendar,
    Confirm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewType {
    #[default]
    Video,
    Onsite,
}

impl InterviewType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video Call",
            Self::Onsite => "On-site",
        }
    }
}

/// Allowed interview lengths, serialized as whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum InterviewDuration {
    Minutes30,
    Minutes45,
    #[default]
    Minutes60,
    Minutes90,
    Minutes120,
}

impl InterviewDuration {
    pub const fn minutes(self) -> u16 {
        match self {
            Self::Minutes30 => 30,
            Self::Minutes45 => 45,
            Self::Minutes60 => 60,
            Self::Minutes90 => 90,
            Self::Minutes120 => 120,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minutes30 => "30 minutes",
            Self::Minutes45 => "45 minutes",
            Self::Minutes60 => "1 hour",
            Self::Minutes90 => "1.5 hours",
            Self::Minutes120 => "2 hours",
        }
    }
}

impl TryFrom<u16> for InterviewDuration {
    type Error = SchedulerError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        match minutes {
            30 => Ok(Self::Minutes30),
            45 => Ok(Self::Minutes45),
            60 => Ok(Self::Minutes60),
            90 => Ok(Self::Minutes90),
            120 => Ok(Self::Minutes120),
            other => Err(SchedulerError::UnsupportedDuration { minutes: other }),
        }
    }
}

impl From<InterviewDuration> for u16 {
    fn from(duration: InterviewDuration) -> Self {
        duration.minutes()
    }
}

/// Bookable start times: every half hour from 09:00 to 17:30.
pub fn time_slots() -> Vec<NaiveTime> {
    (0..SLOT_COUNT)
        .filter_map(|slot| NaiveTime::from_hms_opt(FIRST_SLOT_HOUR + slot / 2, (slot % 2) * 30, 0))
        .collect()
}

/// Parse an `HH:MM` slot label, rejecting anything off the grid.
pub fn parse_slot(raw: &str) -> Result<NaiveTime, SchedulerError> {
    let off_grid = || SchedulerError::OffGridTime {
        time: raw.trim().to_string(),
    };
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| off_grid())?;
    if time_slots().contains(&time) {
        Ok(time)
    } else {
        Err(off_grid())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("interview date {date} is before {today}")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("`{time}` is not a bookable slot (09:00 to 17:30, every 30 minutes)")]
    OffGridTime { time: String },
    #[error("pick both a date and a time before continuing")]
    SlotIncomplete,
    #[error("interviews last 30, 45, 60, 90 or 120 minutes, not {minutes}")]
    UnsupportedDuration { minutes: u16 },
    #[error("no interviewer at position {index} (have {len})")]
    InterviewerOutOfRange { index: usize, len: usize },
    #[error("expected the {expected:?} step but the scheduler is on {actual:?}")]
    WrongStep {
        expected: InterviewStep,
        actual: InterviewStep,
    },
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
}

#[derive(Debug)]
pub struct InterviewScheduler {
    candidate_name: String,
    job_title: String,
    open: bool,
    step: InterviewStep,
    pub interview_type: InterviewType,
    pub duration: InterviewDuration,
    pub location: String,
    pub notes: String,
    interviewers: Vec<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl InterviewScheduler {
    pub fn new(candidate_name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            job_title: job_title.into(),
            open: false,
            step: InterviewStep::Details,
            interview_type: InterviewType::default(),
            duration: InterviewDuration::default(),
            location: String::new(),
            notes: String::new(),
            interviewers: vec![String::new()],
            date: None,
            time: None,
        }
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> InterviewStep {
        self.step
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn interviewers(&self) -> &[String] {
        &self.interviewers
    }

    /// Append a blank interviewer row.
    pub fn add_interviewer(&mut self) -> usize {
        self.interviewers.push(String::new());
        self.interviewers.len() - 1
    }

    pub fn set_interviewer(
        &mut self,
        index: usize,
        email: impl Into<String>,
    ) -> Result<(), SchedulerError> {
        let len = self.interviewers.len();
        let slot = self
            .interviewers
            .get_mut(index)
            .ok_or(SchedulerError::InterviewerOutOfRange { index, len })?;
        *slot = email.into();
        Ok(())
    }

    /// Today is bookable; anything earlier is not.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), SchedulerError> {
        if date < today {
            return Err(SchedulerError::DateInPast { date, today });
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, time: NaiveTime) -> Result<(), SchedulerError> {
        if !time_slots().contains(&time) {
            return Err(SchedulerError::OffGridTime {
                time: time.format("%H:%M").to_string(),
            });
        }
        self.time = Some(time);
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            InterviewStep::Details => true,
            InterviewStep::Calendar => self.date.is_some() && self.time.is_some(),
            InterviewStep::Confirm => false,
        }
    }

    pub fn next(&mut self) -> Result<InterviewStep, SchedulerError> {
        self.step = match self.step {
            InterviewStep::Details => InterviewStep::Calendar,
            InterviewStep::Calendar if self.can_advance() => InterviewStep::Confirm,
            InterviewStep::Calendar => return Err(SchedulerError::SlotIncomplete),
            InterviewStep::Confirm => InterviewStep::Confirm,
        };
        debug!(step = ?self.step, "interview scheduler advanced");
        Ok(self.step)
    }

    pub fn back(&mut self) -> InterviewStep {
        self.step = match self.step {
            InterviewStep::Confirm => InterviewStep::Calendar,
            InterviewStep::Calendar | InterviewStep::Details => InterviewStep::Details,
        };
        self.step
    }

    /// Payload the confirm step summarizes. Blank interviewer rows are dropped.
    pub fn invite(&self) -> Result<InterviewInvite, SchedulerError> {
        let (date, time) = match (self.date, self.time) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(SchedulerError::SlotIncomplete),
        };
        let location = match self.interview_type {
            InterviewType::Onsite if !self.location.trim().is_empty() => {
                Some(self.location.trim().to_string())
            }
            _ => None,
        };

        Ok(InterviewInvite {
            candidate_name: self.candidate_name.clone(),
            job_title: self.job_title.clone(),
            interview_type: self.interview_type,
            date,
            time,
            duration_minutes: self.duration.minutes(),
            location,
            interviewers: self
                .interviewers
                .iter()
                .map(|email| email.trim())
                .filter(|email| !email.is_empty())
                .map(str::to_string)
                .collect(),
            notes: self.notes.trim().to_string(),
        })
    }

    /// Send the invite, close the dialog and go back to the first step.
    pub fn confirm<S>(&mut self, service: &S) -> Result<&'static str, SchedulerError>
    where
        S: SchedulingService + ?Sized,
    {
        if self.step != InterviewStep::Confirm {
            return Err(SchedulerError::WrongStep {
                expected: InterviewStep::Confirm,
                actual: self.step,
            });
        }

        let invite = self.invite()?;
        service.schedule(&invite)?;
        info!(candidate = %self.candidate_name, date = %invite.date, "interview confirmed");

        self.step = InterviewStep::Details;
        self.open = false;
        Ok(CONFIRMATION_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_eighteen_half_hour_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().map(|t| t.format("%H:%M").to_string()).as_deref(), Some("09:00"));
        assert_eq!(slots.last().map(|t| t.format("%H:%M").to_string()).as_deref(), Some("17:30"));
    }

    #[test]
    fn parse_slot_rejects_off_grid_times() {
        assert!(parse_slot("14:30").is_ok());
        assert!(matches!(parse_slot("14:15"), Err(SchedulerError::OffGridTime { .. })));
        assert!(matches!(parse_slot("18:00"), Err(SchedulerError::OffGridTime { .. })));
        assert!(matches!(parse_slot("noon"), Err(SchedulerError::OffGridTime { .. })));
    }

    #[test]
    fn durations_round_trip_through_minutes() {
        let duration: InterviewDuration = serde_json::from_str("90").expect("90 is allowed");
        assert_eq!(duration, InterviewDuration::Minutes90);
        assert_eq!(duration.label(), "1.5 hours");
        assert!(serde_json::from_str::<InterviewDuration>("50").is_err());
    }

    #[test]
    fn set_interviewer_checks_bounds() {
        let mut scheduler = InterviewScheduler::new("Maria Santos", "Backend Engineer");
        assert!(scheduler.set_interviewer(0, "lead@techcorp.com").is_ok());
        assert!(matches!(
            scheduler.set_interviewer(2, "cto@techcorp.com"),
            Err(SchedulerError::InterviewerOutOfRange { index: 2, len: 1 })
        ));
    }
}
