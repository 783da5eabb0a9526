//! Multi-step forms behind the dashboard dialogs. Each workflow is an owned
//! state machine; the side effect at its end goes through an injected service
//! from [`crate::integrations`].

pub mod code_assessment;
pub mod cv_upload;
pub mod interview;
pub mod job_posting;

#[cfg(test)]
mod tests;

pub use code_assessment::{
    start_code_assessment, time_remaining, CodeAssessmentError, START_MESSAGE,
};
pub use cv_upload::{CvSection, CvStage, CvUploadError, CvUploadWorkflow};
pub use interview::{
    parse_slot, time_slots, InterviewDuration, InterviewScheduler, InterviewStep, InterviewType,
    SchedulerError, CONFIRMATION_MESSAGE,
};
pub use job_posting::{
    CostEstimate, JobPostingError, JobPostingForm, JobPostingWizard, WizardStep,
};
