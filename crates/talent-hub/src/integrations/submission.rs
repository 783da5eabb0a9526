use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::recover;
use crate::workflows::job_posting::JobPostingForm;

/// Hands a finished job posting to whoever validates offers.
pub trait JobSubmissionService: Send + Sync {
    fn submit(&self, form: &JobPostingForm) -> Result<SubmissionReceipt, SubmissionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub title: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("validation queue unavailable: {0}")]
    Unavailable(String),
}

/// Logs the posting and keeps a copy; nothing is sent anywhere.
#[derive(Debug, Default)]
pub struct SimulatedSubmission {
    sequence: AtomicU64,
    submitted: Mutex<Vec<JobPostingForm>>,
}

impl SimulatedSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<JobPostingForm> {
        recover(&self.submitted).clone()
    }

    fn next_reference(&self) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("sub-{id:06}")
    }
}

impl JobSubmissionService for SimulatedSubmission {
    fn submit(&self, form: &JobPostingForm) -> Result<SubmissionReceipt, SubmissionError> {
        let reference = self.next_reference();
        info!(
            %reference,
            title = %form.title,
            skills = form.skills.len(),
            "job posted for validation"
        );

        recover(&self.submitted).push(form.clone());
        Ok(SubmissionReceipt {
            reference,
            title: form.title.clone(),
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_are_sequential_per_service() {
        let service = SimulatedSubmission::new();
        let form = JobPostingForm {
            title: "Platform Engineer".to_string(),
            ..JobPostingForm::default()
        };

        let first = service.submit(&form).expect("submission succeeds");
        let second = service.submit(&form).expect("submission succeeds");

        assert_eq!(first.reference, "sub-000001");
        assert_eq!(second.reference, "sub-000002");
        assert_eq!(service.submitted().len(), 2);
    }
}
