use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{CodeAssessment, CodeAssessmentStatus};
use crate::integrations::{ProvisioningError, RepositoryProvisioner};

pub const START_MESSAGE: &str =
    "GitHub repository created! You will receive an email with access details.";

#[derive(Debug, thiserror::Error)]
pub enum CodeAssessmentError {
    #[error("code assessment {id} not found")]
    NotFound { id: String },
    #[error("code assessment {id} is {status:?} and cannot be started again")]
    NotStartable {
        id: String,
        status: CodeAssessmentStatus,
    },
    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),
}

/// Provision a repository for a not-started challenge and mark it in progress.
pub fn start_code_assessment<P>(
    assessment: &mut CodeAssessment,
    provisioner: &P,
    now: DateTime<Utc>,
) -> Result<(), CodeAssessmentError>
where
    P: RepositoryProvisioner + ?Sized,
{
    if assessment.status != CodeAssessmentStatus::NotStarted {
        return Err(CodeAssessmentError::NotStartable {
            id: assessment.id.clone(),
            status: assessment.status,
        });
    }

    let repo_url = provisioner.provision(assessment)?;
    info!(assessment = %assessment.id, %repo_url, "code assessment started");

    assessment.repo_url = Some(repo_url);
    assessment.started_at = Some(now);
    assessment.status = CodeAssessmentStatus::InProgress;
    Ok(())
}

/// Countdown label for a deadline: `Expired`, or whole hours and minutes left.
pub fn time_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let left = deadline - now;
    if left <= chrono::Duration::zero() {
        return "Expired".to_string();
    }
    let hours = left.num_hours();
    let minutes = left.num_minutes() % 60;
    format!("{hours}h {minutes}m remaining")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn time_remaining_formats_hours_and_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 2, 8, 10, 0, 0).unwrap();
        assert_eq!(
            time_remaining(now + Duration::minutes(150) + Duration::seconds(59), now),
            "2h 30m remaining"
        );
        assert_eq!(time_remaining(now + Duration::seconds(30), now), "0h 0m remaining");
        assert_eq!(time_remaining(now, now), "Expired");
        assert_eq!(time_remaining(now - Duration::hours(1), now), "Expired");
    }
}
