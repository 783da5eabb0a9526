use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tokio::sync::mpsc;

use crate::domain::{CodeAssessment, CodeAssessmentStatus};
use crate::integrations::{
    CvDocument, ExtractedProfile, ExtractionError, ExtractionService, InterviewInvite,
    ProvisioningError, RepositoryProvisioner, SchedulingError, SchedulingService,
};

pub(super) fn pdf() -> CvDocument {
    CvDocument::new("alex-rivera-cv.pdf", "application/pdf", 182_400)
}

pub(super) fn scan() -> CvDocument {
    CvDocument::new("cv-scan.jpg", "image/jpeg", 1_048_576)
}

pub(super) fn word_document() -> CvDocument {
    CvDocument::new(
        "cv.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        40_960,
    )
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).expect("valid date")
}

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 9, 9, 0, 0).unwrap()
}

pub(super) fn not_started_assessment() -> CodeAssessment {
    CodeAssessment {
        id: "code-4".to_string(),
        title: "Real-time Chat Application".to_string(),
        description: "WebSocket chat with history.".to_string(),
        talent_id: "talent-4".to_string(),
        talent_name: "Sophie Martin".to_string(),
        status: CodeAssessmentStatus::NotStarted,
        repo_url: None,
        deadline: Utc.with_ymd_and_hms(2026, 2, 12, 18, 0, 0).unwrap(),
        started_at: None,
        submitted_at: None,
        score: None,
        feedback: None,
    }
}

/// Reports some progress and then gives up.
pub(super) struct FailingExtraction;

#[async_trait]
impl ExtractionService for FailingExtraction {
    async fn extract(
        &self,
        _document: &CvDocument,
        progress: mpsc::UnboundedSender<u8>,
    ) -> Result<ExtractedProfile, ExtractionError> {
        let _ = progress.send(20);
        Err(ExtractionError::Unavailable("ocr backend offline".to_string()))
    }
}

pub(super) struct UnavailableCalendar;

impl SchedulingService for UnavailableCalendar {
    fn schedule(&self, _invite: &InterviewInvite) -> Result<(), SchedulingError> {
        Err(SchedulingError::Unavailable("calendar api timeout".to_string()))
    }
}

pub(super) struct UnavailableGitHost;

impl RepositoryProvisioner for UnavailableGitHost {
    fn provision(&self, _assessment: &CodeAssessment) -> Result<String, ProvisioningError> {
        Err(ProvisioningError::Unavailable("rate limited".to_string()))
    }
}
