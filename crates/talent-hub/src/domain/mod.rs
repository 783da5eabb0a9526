//! Plain records shared by every page of the marketplace. Nothing here carries
//! behavior beyond label lookups; filtering lives in `views` and state
//! transitions in `workflows`.

pub mod assessments;
pub mod jobs;
pub mod notifications;
pub mod pipeline;
pub mod requests;
pub mod talents;
pub mod users;

pub use assessments::{
    Assessment, AssessmentStatus, AssessmentType, CodeAssessment, CodeAssessmentStatus,
};
pub use jobs::{
    BudgetRange, JobOffer, JobStatus, RoleType, SeniorityLevel, Skill, SkillPriority, WorkMode,
};
pub use notifications::{Notification, NotificationPriority, NotificationType};
pub use pipeline::{Application, PipelineStage};
pub use requests::{RequestStatus, RequestType, RequestUrgency, TalentRequest};
pub use talents::{Availability, Rate, SkillLevel, TalentProfile};
pub use users::{User, UserRole};

/// Closed set of string-backed values, as used by dropdown filters and the
/// kebab-case wire format.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;

    fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.slug().eq_ignore_ascii_case(raw))
    }
}
