use crate::config::ConfigError;
use crate::session::NotificationError;
use crate::telemetry::TelemetryError;
use crate::workflows::{CodeAssessmentError, CvUploadError, JobPostingError, SchedulerError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    CvUpload(CvUploadError),
    JobPosting(JobPostingError),
    Scheduler(SchedulerError),
    CodeAssessment(CodeAssessmentError),
    Notification(NotificationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CvUpload(CvUploadError::UnsupportedFileType { .. }) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::CvUpload(CvUploadError::Extraction(_))
            | AppError::JobPosting(JobPostingError::Submission(_))
            | AppError::Scheduler(SchedulerError::Scheduling(_))
            | AppError::CodeAssessment(CodeAssessmentError::Provisioning(_)) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::CvUpload(_) => StatusCode::BAD_REQUEST,
            AppError::JobPosting(_)
            | AppError::CodeAssessment(CodeAssessmentError::NotStartable { .. }) => {
                StatusCode::CONFLICT
            }
            AppError::Scheduler(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CodeAssessment(CodeAssessmentError::NotFound { .. })
            | AppError::Notification(NotificationError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::CvUpload(err) => write!(f, "cv upload error: {}", err),
            AppError::JobPosting(err) => write!(f, "job posting error: {}", err),
            AppError::Scheduler(err) => write!(f, "interview scheduling error: {}", err),
            AppError::CodeAssessment(err) => write!(f, "code assessment error: {}", err),
            AppError::Notification(err) => write!(f, "notification error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::CvUpload(err) => Some(err),
            AppError::JobPosting(err) => Some(err),
            AppError::Scheduler(err) => Some(err),
            AppError::CodeAssessment(err) => Some(err),
            AppError::Notification(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CvUploadError> for AppError {
    fn from(value: CvUploadError) -> Self {
        Self::CvUpload(value)
    }
}

impl From<JobPostingError> for AppError {
    fn from(value: JobPostingError) -> Self {
        Self::JobPosting(value)
    }
}

impl From<SchedulerError> for AppError {
    fn from(value: SchedulerError) -> Self {
        Self::Scheduler(value)
    }
}

impl From<CodeAssessmentError> for AppError {
    fn from(value: CodeAssessmentError) -> Self {
        Self::CodeAssessment(value)
    }
}

impl From<NotificationError> for AppError {
    fn from(value: NotificationError) -> Self {
        Self::Notification(value)
    }
}
