use serde::{Deserialize, Serialize};

use super::jobs::SeniorityLevel;
use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    PartiallyAvailable,
    Unavailable,
}

impl Choice for Availability {
    const ALL: &'static [Self] = &[
        Self::Available,
        Self::PartiallyAvailable,
        Self::Unavailable,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::PartiallyAvailable => "partially-available",
            Self::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub amount: u32,
    pub currency: String,
}

impl Rate {
    pub fn eur(amount: u32) -> Self {
        Self {
            amount,
            currency: "EUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    pub level: SeniorityLevel,
}

/// Candidate record. `matching_score` is a static value carried by the mock
/// data, never computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub title: String,
    pub location: String,
    pub timezone: String,
    pub skills: Vec<SkillLevel>,
    pub experience: u8,
    pub education: String,
    pub certifications: Vec<String>,
    pub availability: Availability,
    pub daily_rate: Rate,
    pub hourly_rate: Rate,
    pub custom_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
}

impl TalentProfile {
    /// Up to `limit` skill names followed by the count of hidden ones.
    pub fn top_skills(&self, limit: usize) -> (Vec<&str>, usize) {
        let shown = self
            .skills
            .iter()
            .take(limit)
            .map(|skill| skill.name.as_str())
            .collect();
        (shown, self.skills.len().saturating_sub(limit))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, StaticCatalog};

    #[test]
    fn top_skills_reports_overflow() {
        let catalog = StaticCatalog::seeded();
        let talent = &catalog.talent_profiles()[0];
        let (shown, hidden) = talent.top_skills(3);
        assert_eq!(shown.len(), 3.min(talent.skills.len()));
        assert_eq!(hidden, talent.skills.len().saturating_sub(3));
    }
}
