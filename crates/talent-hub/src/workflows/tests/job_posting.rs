use crate::domain::{RoleType, SeniorityLevel, SkillPriority, WorkMode};
use crate::integrations::SimulatedSubmission;
use crate::workflows::job_posting::{JobPostingError, JobPostingForm, JobPostingWizard, WizardStep};

#[test]
fn next_reaches_review_with_an_empty_form() {
    let mut wizard = JobPostingWizard::new();
    for _ in 0..10 {
        wizard.next();
    }
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.form(), &JobPostingForm::default());
}

#[test]
fn previous_stops_at_the_first_step() {
    let mut wizard = JobPostingWizard::new();
    assert_eq!(wizard.previous(), WizardStep::BasicInfo);
    wizard.next();
    assert_eq!(wizard.previous(), WizardStep::BasicInfo);
    assert_eq!(wizard.previous(), WizardStep::BasicInfo);
}

#[test]
fn blank_skills_are_ignored() {
    let mut wizard = JobPostingWizard::new();
    assert!(!wizard.add_skill("   ", SkillPriority::MustHave));
    assert!(!wizard.add_soft_skill(""));
    assert!(wizard.add_skill(" Kubernetes ", SkillPriority::NiceToHave));
    assert!(wizard.add_soft_skill("Mentoring"));

    assert_eq!(wizard.form().skills.len(), 1);
    assert_eq!(wizard.form().skills[0].name, "Kubernetes");
    assert_eq!(wizard.form().skills[0].priority, SkillPriority::NiceToHave);
    assert_eq!(wizard.remove_soft_skill(0).as_deref(), Some("Mentoring"));
}

#[test]
fn submit_outside_review_is_refused() {
    let service = SimulatedSubmission::new();
    let mut wizard = JobPostingWizard::new();
    wizard.next();

    let err = wizard.submit(&service).expect_err("step 2 cannot submit");
    assert!(matches!(err, JobPostingError::NotAtReview { step: 2 }));
    assert!(service.submitted().is_empty());
}

#[test]
fn submit_hands_off_the_form_and_resets() {
    let service = SimulatedSubmission::new();
    let mut wizard = JobPostingWizard::new();
    wizard.open();

    {
        let form = wizard.form_mut();
        form.title = "Staff Platform Engineer".to_string();
        form.role = Some(RoleType::Devops);
        form.seniority_level = Some(SeniorityLevel::Lead);
        form.work_mode = Some(WorkMode::Remote);
        form.budget_min = Some(700);
        form.budget_max = Some(900);
    }
    wizard.add_skill("Terraform", SkillPriority::MustHave);
    while wizard.step() != WizardStep::Review {
        wizard.next();
    }

    let receipt = wizard.submit(&service).expect("submits from review");
    assert_eq!(receipt.title, "Staff Platform Engineer");

    let submitted = service.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].skills[0].name, "Terraform");
    assert_eq!(submitted[0].budget_max, Some(900));

    assert!(!wizard.is_open());
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(wizard.form(), &JobPostingForm::default());
}
