//! Outbound seams for the side effects the dashboard only pretends to perform.
//!
//! Each trait has a `Simulated*` implementation that logs through `tracing`
//! and remembers what it was asked to do, so callers and tests can assert the
//! boundary without a real OCR engine, validation queue, calendar, or git host.

pub mod extraction;
pub mod provisioning;
pub mod scheduling;
pub mod submission;

use std::sync::{Mutex, MutexGuard};

pub use extraction::{
    CvDocument, EducationEntry, ExperienceEntry, ExtractedProfile, ExtractionError,
    ExtractionService, PersonalInfo, SimulatedExtraction,
};
pub use provisioning::{ProvisioningError, RepositoryProvisioner, SimulatedProvisioner};
pub use scheduling::{InterviewInvite, SchedulingError, SchedulingService, SimulatedScheduler};
pub use submission::{
    JobSubmissionService, SimulatedSubmission, SubmissionError, SubmissionReceipt,
};

/// Recording only appends, so a poisoned log is still usable.
fn recover<T>(log: &Mutex<T>) -> MutexGuard<'_, T> {
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
