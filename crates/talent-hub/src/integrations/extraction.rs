use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

use super::recover;

/// Uploaded CV metadata. The simulated pipeline never reads file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDocument {
    pub file_name: String,
    pub mime_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

impl CvDocument {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// PDF or any image type; everything else is rejected at upload.
    pub fn is_supported(&self) -> bool {
        match self.mime_type.trim().parse::<mime::Mime>() {
            Ok(parsed) => {
                parsed.essence_str() == mime::APPLICATION_PDF.essence_str()
                    || parsed.type_() == mime::IMAGE
            }
            Err(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// Structured CV data, editable by the user before it is confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

impl ExtractedProfile {
    /// The canned result every simulated extraction returns.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Alex Rivera".to_string(),
                email: "alex.rivera@email.com".to_string(),
                phone: "+34 612 345 678".to_string(),
                location: "Barcelona, Spain".to_string(),
            },
            education: vec![
                EducationEntry {
                    degree: "MSc Computer Science".to_string(),
                    institution: "Technical University of Barcelona".to_string(),
                    year: "2016-2018".to_string(),
                },
                EducationEntry {
                    degree: "BSc Software Engineering".to_string(),
                    institution: "University of Valencia".to_string(),
                    year: "2012-2016".to_string(),
                },
            ],
            experience: vec![
                ExperienceEntry {
                    title: "Senior Frontend Developer".to_string(),
                    company: "TechCorp Solutions".to_string(),
                    duration: "2020 - Present".to_string(),
                    description: "Leading frontend development for enterprise SaaS platform. React, TypeScript, Next.js".to_string(),
                },
                ExperienceEntry {
                    title: "Frontend Developer".to_string(),
                    company: "StartupXYZ".to_string(),
                    duration: "2018 - 2020".to_string(),
                    description: "Built responsive web applications using React and modern JavaScript.".to_string(),
                },
            ],
            skills: [
                "React",
                "TypeScript",
                "Next.js",
                "TailwindCSS",
                "Node.js",
                "GraphQL",
                "PostgreSQL",
                "Docker",
                "AWS",
                "Git",
            ]
            .iter()
            .map(|skill| skill.to_string())
            .collect(),
            certifications: vec![
                "AWS Certified Developer".to_string(),
                "React Professional Certificate".to_string(),
                "Scrum Master Certified".to_string(),
            ],
        }
    }
}

/// Turns an uploaded document into structured profile data, reporting
/// percentage progress on `progress` as it goes.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn extract(
        &self,
        document: &CvDocument,
        progress: mpsc::UnboundedSender<u8>,
    ) -> Result<ExtractedProfile, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document could not be read: {0}")]
    Unreadable(String),
    #[error("extraction backend unavailable: {0}")]
    Unavailable(String),
}

/// Fake OCR: five progress ticks, one `tick` apart, then [`ExtractedProfile::sample`].
#[derive(Debug, Default)]
pub struct SimulatedExtraction {
    tick: Duration,
    documents: Mutex<Vec<String>>,
}

impl SimulatedExtraction {
    pub const TICKS: [u8; 5] = [20, 40, 60, 80, 100];

    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            documents: Mutex::new(Vec::new()),
        }
    }

    /// File names processed so far, oldest first.
    pub fn documents(&self) -> Vec<String> {
        recover(&self.documents).clone()
    }
}

#[async_trait]
impl ExtractionService for SimulatedExtraction {
    async fn extract(
        &self,
        document: &CvDocument,
        progress: mpsc::UnboundedSender<u8>,
    ) -> Result<ExtractedProfile, ExtractionError> {
        info!(file = %document.file_name, mime = %document.mime_type, "simulating cv extraction");

        for tick in Self::TICKS {
            tokio::time::sleep(self.tick).await;
            // The receiver going away only means nobody is watching.
            let _ = progress.send(tick);
        }

        recover(&self.documents).push(document.file_name.clone());
        Ok(ExtractedProfile::sample())
    }
}
