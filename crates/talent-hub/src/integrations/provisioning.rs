use std::sync::Mutex;

use tracing::info;

use super::recover;
use crate::domain::CodeAssessment;

const REPOSITORY_BASE: &str = "https://github.com/talenthub";

/// Creates the private repository a candidate works in.
pub trait RepositoryProvisioner: Send + Sync {
    fn provision(&self, assessment: &CodeAssessment) -> Result<String, ProvisioningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    #[error("repository host unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct SimulatedProvisioner {
    provisioned: Mutex<Vec<String>>,
}

impl SimulatedProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assessment ids a repository was created for.
    pub fn provisioned(&self) -> Vec<String> {
        recover(&self.provisioned).clone()
    }
}

impl RepositoryProvisioner for SimulatedProvisioner {
    fn provision(&self, assessment: &CodeAssessment) -> Result<String, ProvisioningError> {
        let url = format!(
            "{REPOSITORY_BASE}/{}-{}",
            slugify(&assessment.talent_name),
            slugify(&assessment.title)
        );
        info!(assessment = %assessment.id, %url, "creating private repository");
        recover(&self.provisioned).push(assessment.id.clone());
        Ok(url)
    }
}

/// Lowercase ASCII words joined by single hyphens.
pub fn slugify(value: &str) -> String {
    value
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Real-time Chat Application"), "real-time-chat-application");
        assert_eq!(slugify("  Liam O'Connor "), "liam-o-connor");
        assert_eq!(slugify("!!!"), "");
    }
}
