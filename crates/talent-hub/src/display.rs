//! Badge and score presentation metadata.
//!
//! Every status-like enum maps to a [`Badge`] through an exhaustive `match`, so
//! adding a variant fails to compile until it has a label and a tone.

use serde::Serialize;

use crate::domain::{
    AssessmentStatus, Availability, CodeAssessmentStatus, JobStatus, PipelineStage,
    RequestStatus, RequestUrgency, SkillPriority,
};

/// Color family a badge renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Muted,
    Info,
    Success,
    Primary,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl Badge {
    const fn new(label: &'static str, tone: BadgeTone) -> Self {
        Self { label, tone }
    }
}

pub trait StatusBadge: Copy {
    fn badge(self) -> Badge;
}

impl StatusBadge for JobStatus {
    fn badge(self) -> Badge {
        match self {
            Self::Draft => Badge::new("Draft", BadgeTone::Muted),
            Self::Submitted => Badge::new("Submitted", BadgeTone::Info),
            Self::Validated => Badge::new("Validated", BadgeTone::Success),
            Self::Open => Badge::new("Open", BadgeTone::Primary),
            Self::Closed => Badge::new("Closed", BadgeTone::Muted),
        }
    }
}

impl StatusBadge for RequestStatus {
    fn badge(self) -> Badge {
        match self {
            Self::Pending => Badge::new("Pending", BadgeTone::Warning),
            Self::InReview => Badge::new("In Review", BadgeTone::Info),
            Self::Matched => Badge::new("Matched", BadgeTone::Success),
            Self::Completed => Badge::new("Completed", BadgeTone::Muted),
        }
    }
}

impl StatusBadge for Availability {
    fn badge(self) -> Badge {
        match self {
            Self::Available => Badge::new("Available", BadgeTone::Success),
            Self::PartiallyAvailable => Badge::new("Partially Available", BadgeTone::Warning),
            Self::Unavailable => Badge::new("Unavailable", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for AssessmentStatus {
    fn badge(self) -> Badge {
        match self {
            Self::Pending => Badge::new("Pending", BadgeTone::Warning),
            Self::InProgress => Badge::new("In Progress", BadgeTone::Info),
            Self::Completed => Badge::new("Completed", BadgeTone::Muted),
            Self::Expired => Badge::new("Expired", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for CodeAssessmentStatus {
    fn badge(self) -> Badge {
        match self {
            Self::NotStarted => Badge::new("Not Started", BadgeTone::Muted),
            Self::InProgress => Badge::new("In Progress", BadgeTone::Info),
            Self::Submitted => Badge::new("Submitted", BadgeTone::Warning),
            Self::Reviewed => Badge::new("Reviewed", BadgeTone::Success),
        }
    }
}

impl StatusBadge for PipelineStage {
    fn badge(self) -> Badge {
        match self {
            Self::Applied => Badge::new("Applied", BadgeTone::Muted),
            Self::Screening => Badge::new("Screening", BadgeTone::Info),
            Self::Assessed => Badge::new("Assessed", BadgeTone::Primary),
            Self::InterviewScheduled => Badge::new("Interview", BadgeTone::Warning),
            Self::Results => Badge::new("Results", BadgeTone::Info),
            Self::Accepted => Badge::new("Accepted", BadgeTone::Success),
            Self::Rejected => Badge::new("Rejected", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for RequestUrgency {
    fn badge(self) -> Badge {
        match self {
            Self::Low => Badge::new("Low", BadgeTone::Muted),
            Self::Medium => Badge::new("Medium", BadgeTone::Warning),
            Self::High => Badge::new("High", BadgeTone::Warning),
            Self::Urgent => Badge::new("Urgent", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for SkillPriority {
    fn badge(self) -> Badge {
        match self {
            Self::MustHave => Badge::new("Must Have", BadgeTone::Primary),
            Self::NiceToHave => Badge::new("Nice to Have", BadgeTone::Muted),
        }
    }
}

/// Qualitative bucket for a matching or assessment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Classify `score` out of `max_score`, rounding the percentage the way the
    /// score cards display it.
    pub fn classify(score: u16, max_score: u16) -> Self {
        Self::from_percentage(percentage(score, max_score))
    }

    pub const fn from_percentage(pct: u8) -> Self {
        match pct {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Average,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Low => "Low",
        }
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Excellent | Self::Good => BadgeTone::Success,
            Self::Average => BadgeTone::Warning,
            Self::Low => BadgeTone::Destructive,
        }
    }
}

/// Rounded percentage, clamped to 0..=100. A zero maximum reads as 0%.
pub fn percentage(score: u16, max_score: u16) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let pct = (f64::from(score) / f64::from(max_score) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Choice;

    #[test]
    fn pipeline_badges_use_short_interview_label() {
        let badge = PipelineStage::InterviewScheduled.badge();
        assert_eq!(badge.label, "Interview");
        assert_eq!(badge.tone, BadgeTone::Warning);
    }

    #[test]
    fn every_availability_has_a_distinct_label() {
        let labels: Vec<_> = Availability::ALL
            .iter()
            .map(|availability| availability.badge().label)
            .collect();
        assert_eq!(
            labels,
            vec!["Available", "Partially Available", "Unavailable"]
        );
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(ScoreBand::classify(90, 100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(89, 100), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(75, 100), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(74, 100), ScoreBand::Average);
        assert_eq!(ScoreBand::classify(60, 100), ScoreBand::Average);
        assert_eq!(ScoreBand::classify(59, 100), ScoreBand::Low);
    }

    #[test]
    fn score_band_scales_by_max_score() {
        assert_eq!(ScoreBand::classify(9, 10), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(45, 50), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(5, 0), ScoreBand::Low);
        assert_eq!(percentage(150, 100), 100);
    }
}
