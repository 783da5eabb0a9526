use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Draft,
    Submitted,
    Validated,
    Open,
    Closed,
}

impl Choice for JobStatus {
    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Submitted,
        Self::Validated,
        Self::Open,
        Self::Closed,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Validated => "validated",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
            Self::Onsite => "On-site",
        }
    }
}

impl Choice for WorkMode {
    const ALL: &'static [Self] = &[Self::Remote, Self::Hybrid, Self::Onsite];

    fn slug(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Onsite => "onsite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeniorityLevel {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
    Principal,
}

impl SeniorityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intern => "Intern",
            Self::Junior => "Junior",
            Self::Mid => "Mid-Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Principal => "Principal",
        }
    }
}

impl Choice for SeniorityLevel {
    const ALL: &'static [Self] = &[
        Self::Intern,
        Self::Junior,
        Self::Mid,
        Self::Senior,
        Self::Lead,
        Self::Principal,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Intern => "intern",
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
            Self::Principal => "principal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleType {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
    Mobile,
    Qa,
}

impl RoleType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Developer",
            Self::Backend => "Backend Developer",
            Self::Fullstack => "Full-Stack Developer",
            Self::Devops => "DevOps Engineer",
            Self::Data => "Data Engineer",
            Self::Mobile => "Mobile Developer",
            Self::Qa => "QA Engineer",
        }
    }
}

impl Choice for RoleType {
    const ALL: &'static [Self] = &[
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::Devops,
        Self::Data,
        Self::Mobile,
        Self::Qa,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Devops => "devops",
            Self::Data => "data",
            Self::Mobile => "mobile",
            Self::Qa => "qa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillPriority {
    MustHave,
    NiceToHave,
}

impl Choice for SkillPriority {
    const ALL: &'static [Self] = &[Self::MustHave, Self::NiceToHave];

    fn slug(self) -> &'static str {
        match self {
            Self::MustHave => "must-have",
            Self::NiceToHave => "nice-to-have",
        }
    }
}

/// Requirement attached to a job offer or talent request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub priority: SkillPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SeniorityLevel>,
}

impl Skill {
    pub fn new(name: impl Into<String>, priority: SkillPriority) -> Self {
        Self {
            name: name.into(),
            priority,
            level: None,
        }
    }
}

/// Daily-rate budget bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub role: RoleType,
    pub skills: Vec<Skill>,
    pub seniority_level: SeniorityLevel,
    pub project_duration: String,
    pub start_date: NaiveDate,
    pub budget_range: BudgetRange,
    pub soft_skills: Vec<String>,
    pub work_mode: WorkMode,
    pub status: JobStatus,
    pub client_id: String,
    pub client_name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl JobOffer {
    pub fn must_have_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.priority == SkillPriority::MustHave)
    }
}
