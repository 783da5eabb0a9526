//! Five-step job posting wizard. Steps never block on field validation; the
//! only gate is that submission happens from the review step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{RoleType, SeniorityLevel, Skill, SkillPriority, WorkMode};
use crate::integrations::{JobSubmissionService, SubmissionError, SubmissionReceipt};

const ESTIMATE_MIN_DAYS: u64 = 90;
const ESTIMATE_MAX_DAYS: u64 = 180;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    BasicInfo,
    SkillsAndRequirements,
    EngagementDetails,
    BudgetAndTerms,
    Review,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::BasicInfo,
            Self::SkillsAndRequirements,
            Self::EngagementDetails,
            Self::BudgetAndTerms,
            Self::Review,
        ]
    }

    /// One-based position shown in the stepper.
    pub const fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::SkillsAndRequirements => 2,
            Self::EngagementDetails => 3,
            Self::BudgetAndTerms => 4,
            Self::Review => 5,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::SkillsAndRequirements => "Skills & Requirements",
            Self::EngagementDetails => "Engagement Details",
            Self::BudgetAndTerms => "Budget & Terms",
            Self::Review => "Review",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::SkillsAndRequirements),
            Self::SkillsAndRequirements => Some(Self::EngagementDetails),
            Self::EngagementDetails => Some(Self::BudgetAndTerms),
            Self::BudgetAndTerms => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::SkillsAndRequirements => Some(Self::BasicInfo),
            Self::EngagementDetails => Some(Self::SkillsAndRequirements),
            Self::BudgetAndTerms => Some(Self::EngagementDetails),
            Self::Review => Some(Self::BudgetAndTerms),
        }
    }
}

/// Everything the wizard collects. Unset choices stay `None` rather than
/// defaulting to a variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingForm {
    pub title: String,
    pub role: Option<RoleType>,
    pub seniority_level: Option<SeniorityLevel>,
    pub skills: Vec<Skill>,
    pub project_duration: String,
    pub start_date: Option<NaiveDate>,
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub work_mode: Option<WorkMode>,
    pub soft_skills: Vec<String>,
    pub description: String,
}

/// Projected engagement cost shown on the budget step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub low: u64,
    pub high: u64,
    pub currency: &'static str,
}

impl CostEstimate {
    /// Average daily rate over a 90 to 180 day engagement. Missing bounds count as zero.
    pub fn from_budget(budget_min: Option<u32>, budget_max: Option<u32>) -> Self {
        let sum = u64::from(budget_min.unwrap_or(0)) + u64::from(budget_max.unwrap_or(0));
        Self {
            low: sum * ESTIMATE_MIN_DAYS / 2,
            high: sum * ESTIMATE_MAX_DAYS / 2,
            currency: "EUR",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobPostingError {
    #[error("job offers are submitted from the review step, not step {step}")]
    NotAtReview { step: u8 },
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug, Default)]
pub struct JobPostingWizard {
    open: bool,
    step: WizardStep,
    form: JobPostingForm,
}

impl JobPostingWizard {
    pub fn new() -> Self {
        Self::default()
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

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &JobPostingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut JobPostingForm {
        &mut self.form
    }

    pub fn next(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn progress_pct(&self) -> u8 {
        let steps = WizardStep::ordered().len() as u16;
        (u16::from(self.step.number()) * 100 / steps) as u8
    }

    /// Append a required skill. Blank names are ignored.
    pub fn add_skill(&mut self, name: &str, priority: SkillPriority) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.form.skills.push(Skill::new(name, priority));
        true
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<Skill> {
        (index < self.form.skills.len()).then(|| self.form.skills.remove(index))
    }

    pub fn add_soft_skill(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.form.soft_skills.push(name.to_string());
        true
    }

    pub fn remove_soft_skill(&mut self, index: usize) -> Option<String> {
        (index < self.form.soft_skills.len()).then(|| self.form.soft_skills.remove(index))
    }

    pub fn estimated_cost(&self) -> CostEstimate {
        CostEstimate::from_budget(self.form.budget_min, self.form.budget_max)
    }

    /// Static rate hint rendered next to the budget fields.
    pub fn market_insight(&self) -> String {
        let subject = [
            self.form.seniority_level.map(SeniorityLevel::label),
            self.form.role.map(RoleType::label),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        let subject = if subject.is_empty() {
            "professional".to_string()
        } else {
            subject
        };
        format!(
            "Based on your requirements, the typical rate for a {subject} is €450-700/day."
        )
    }

    /// Submit from the review step, then close and reset the wizard.
    pub fn submit<S>(&mut self, service: &S) -> Result<SubmissionReceipt, JobPostingError>
    where
        S: JobSubmissionService + ?Sized,
    {
        if self.step != WizardStep::Review {
            return Err(JobPostingError::NotAtReview {
                step: self.step.number(),
            });
        }

        let receipt = service.submit(&self.form)?;
        info!(reference = %receipt.reference, title = %self.form.title, "job offer submitted");

        self.open = false;
        self.step = WizardStep::BasicInfo;
        self.form = JobPostingForm::default();
        debug!("job posting wizard reset");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_step_number() {
        let mut wizard = JobPostingWizard::new();
        assert_eq!(wizard.progress_pct(), 20);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.progress_pct(), 60);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.progress_pct(), 100);
    }

    #[test]
    fn progress_covers_every_step() {
        let mut wizard = JobPostingWizard::new();
        let mut seen = vec![wizard.progress_pct()];
        while wizard.step() != WizardStep::Review {
            wizard.next();
            seen.push(wizard.progress_pct());
        }
        assert_eq!(seen, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn estimate_uses_average_daily_rate() {
        let estimate = CostEstimate::from_budget(Some(500), Some(700));
        assert_eq!(estimate.low, 54_000);
        assert_eq!(estimate.high, 108_000);

        let partial = CostEstimate::from_budget(Some(501), None);
        assert_eq!(partial.low, 22_545);
        assert_eq!(partial.high, 45_090);

        let empty = CostEstimate::from_budget(None, None);
        assert_eq!((empty.low, empty.high), (0, 0));
    }

    #[test]
    fn market_insight_names_the_profile() {
        let mut wizard = JobPostingWizard::new();
        assert!(wizard.market_insight().contains("a professional is €450-700/day"));

        wizard.form_mut().seniority_level = Some(SeniorityLevel::Senior);
        wizard.form_mut().role = Some(RoleType::Backend);
        assert!(wizard
            .market_insight()
            .contains("a Senior Backend Developer is €450-700/day"));
    }

    #[test]
    fn removing_out_of_range_skill_is_a_no_op() {
        let mut wizard = JobPostingWizard::new();
        assert!(wizard.add_skill("Rust", SkillPriority::MustHave));
        assert_eq!(wizard.remove_skill(3), None);
        assert_eq!(wizard.form().skills.len(), 1);
        assert_eq!(wizard.remove_soft_skill(0), None);
    }
}
