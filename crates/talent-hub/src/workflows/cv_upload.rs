//! Upload, extract, review. Extraction is delegated to an [`ExtractionService`];
//! the workflow only tracks which stage the dialog is in and the progress bar.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::integrations::{CvDocument, ExtractedProfile, ExtractionError, ExtractionService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CvStage {
    Upload,
    Processing,
    Review,
}

/// Review-screen section with its own edit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CvSection {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Certifications,
}

#[derive(Debug, thiserror::Error)]
pub enum CvUploadError {
    #[error("unsupported file type `{mime_type}`; upload a PDF or an image")]
    UnsupportedFileType { mime_type: String },
    #[error("no CV selected")]
    NoFileSelected,
    #[error("expected the {expected:?} stage but the upload is in {actual:?}")]
    WrongStage { expected: CvStage, actual: CvStage },
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

#[derive(Debug)]
pub struct CvUploadWorkflow {
    open: bool,
    stage: CvStage,
    file: Option<CvDocument>,
    progress: u8,
    extracted: ExtractedProfile,
    editing: Option<CvSection>,
}

impl Default for CvUploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl CvUploadWorkflow {
    pub fn new() -> Self {
        Self {
            open: false,
            stage: CvStage::Upload,
            file: None,
            progress: 0,
            extracted: ExtractedProfile::default(),
            editing: None,
        }
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

    pub fn stage(&self) -> CvStage {
        self.stage
    }

    pub fn file(&self) -> Option<&CvDocument> {
        self.file.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn editing(&self) -> Option<CvSection> {
        self.editing
    }

    /// Drag-and-drop path. Unsupported files are ignored and `false` is returned.
    pub fn drop_file(&mut self, document: CvDocument) -> bool {
        if self.stage != CvStage::Upload || !document.is_supported() {
            debug!(mime = %document.mime_type, "ignoring dropped file");
            return false;
        }
        self.file = Some(document);
        true
    }

    /// File-picker path; same acceptance rule, reported as an error.
    pub fn choose_file(&mut self, document: CvDocument) -> Result<(), CvUploadError> {
        self.expect_stage(CvStage::Upload)?;
        if !document.is_supported() {
            return Err(CvUploadError::UnsupportedFileType {
                mime_type: document.mime_type,
            });
        }
        self.file = Some(document);
        Ok(())
    }

    pub fn remove_file(&mut self) -> Option<CvDocument> {
        if self.stage != CvStage::Upload {
            return None;
        }
        self.file.take()
    }

    /// Run extraction on the selected file, mirroring every progress tick the
    /// service reports. On failure the workflow falls back to `Upload` with the
    /// file still selected.
    pub async fn extract_with<S>(
        &mut self,
        service: &S,
    ) -> Result<&ExtractedProfile, CvUploadError>
    where
        S: ExtractionService + ?Sized,
    {
        self.expect_stage(CvStage::Upload)?;
        let document = self.file.clone().ok_or(CvUploadError::NoFileSelected)?;

        self.stage = CvStage::Processing;
        self.progress = 0;
        debug!(file = %document.file_name, "cv extraction started");

        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let progress = &mut self.progress;
        let track = async {
            while let Some(tick) = rx.recv().await {
                *progress = tick.min(100);
            }
        };
        let (result, ()) = tokio::join!(service.extract(&document, tx), track);

        match result {
            Ok(profile) => {
                self.extracted = profile;
                self.editing = None;
                self.stage = CvStage::Review;
                debug!(file = %document.file_name, "cv extraction ready for review");
                Ok(&self.extracted)
            }
            Err(err) => {
                warn!(file = %document.file_name, error = %err, "cv extraction failed");
                self.stage = CvStage::Upload;
                self.progress = 0;
                Err(err.into())
            }
        }
    }

    pub fn extracted(&self) -> &ExtractedProfile {
        &self.extracted
    }

    /// Editable access to the extracted record while reviewing.
    pub fn review_mut(&mut self) -> Result<&mut ExtractedProfile, CvUploadError> {
        self.expect_stage(CvStage::Review)?;
        Ok(&mut self.extracted)
    }

    /// Switch the edit toggle of `section`; turning one on turns the others off.
    pub fn toggle_editing(&mut self, section: CvSection) -> Option<CvSection> {
        self.editing = match self.editing {
            Some(current) if current == section => None,
            _ => Some(section),
        };
        self.editing
    }

    /// Leave review for the upload screen. The extracted record is kept until
    /// the next extraction replaces it.
    pub fn back_to_upload(&mut self) -> Result<(), CvUploadError> {
        self.expect_stage(CvStage::Review)?;
        self.stage = CvStage::Upload;
        self.editing = None;
        Ok(())
    }

    /// Hand the reviewed record to the caller and reset the dialog.
    pub fn confirm(&mut self) -> Result<ExtractedProfile, CvUploadError> {
        self.expect_stage(CvStage::Review)?;
        let profile = std::mem::take(&mut self.extracted);

        self.open = false;
        self.stage = CvStage::Upload;
        self.file = None;
        self.progress = 0;
        self.editing = None;
        debug!(name = %profile.personal_info.name, "cv profile confirmed");
        Ok(profile)
    }

    fn expect_stage(&self, expected: CvStage) -> Result<(), CvUploadError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CvUploadError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }
}
