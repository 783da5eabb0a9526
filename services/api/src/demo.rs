use chrono::{Duration as ChronoDuration, Local, NaiveDate, NaiveTime, Utc};
use clap::Args;
use std::time::Duration;
use talent_hub::catalog::{Catalog, StaticCatalog};
use talent_hub::display::StatusBadge;
use talent_hub::domain::{Choice, CodeAssessmentStatus, SkillPriority, UserRole};
use talent_hub::error::AppError;
use talent_hub::integrations::{
    CvDocument, SimulatedExtraction, SimulatedProvisioner, SimulatedScheduler,
    SimulatedSubmission,
};
use talent_hub::session::{InboxFilter, Session};
use talent_hub::views::{
    dashboard, job_offers, pipeline_board, Dashboard, JobQuery, PipelineQuery, Viewer,
};
use talent_hub::workflows::{
    start_code_assessment, time_remaining, CvUploadWorkflow, InterviewScheduler,
    JobPostingWizard, WizardStep, START_MESSAGE,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only show one role (client, admin or talent). Defaults to all three.
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<UserRole>,
    /// Override the reference date used for scheduling (YYYY-MM-DD).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the CV, job posting, interview and code assessment walkthroughs.
    #[arg(long)]
    pub(crate) skip_workflows: bool,
}

fn parse_role(raw: &str) -> Result<UserRole, String> {
    UserRole::from_slug(raw).ok_or_else(|| format!("unknown role '{raw}' (client, admin, talent)"))
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        role,
        today,
        skip_workflows,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let catalog = StaticCatalog::seeded();
    let mut session = Session::from_catalog(&catalog);

    println!("Talent Hub demo");
    let roles = match role {
        Some(role) => vec![role],
        None => UserRole::ALL.to_vec(),
    };
    for role in roles {
        session.switch_role(&catalog, role);
        render_role(&catalog, &session);
    }

    println!(
        "\nNotifications: {} unread of {}",
        session.inbox().unread_count(),
        session.inbox().list(InboxFilter::All).len()
    );

    if skip_workflows {
        return Ok(());
    }

    run_cv_upload().await?;
    run_job_posting()?;
    run_interview(today)?;
    run_code_assessment(&catalog)?;
    Ok(())
}

fn render_role(catalog: &StaticCatalog, session: &Session) {
    let Some(user) = session.user() else {
        return;
    };

    println!("\n== {} ({}) ==", user.name, user.role.label());
    let navigation = session
        .navigation()
        .iter()
        .map(|item| item.label)
        .collect::<Vec<_>>();
    println!("Navigation: {}", navigation.join(" | "));

    match dashboard(catalog, user) {
        Dashboard::Client { stats, recent_jobs } => {
            println!(
                "- {} active jobs | {} matched talents | {} upcoming interviews | {} pending requests",
                stats.active_jobs,
                stats.matched_talents,
                stats.upcoming_interviews,
                stats.pending_requests
            );
            for job in recent_jobs {
                println!("  - {} [{}]", job.title, job.status.badge().label);
            }
        }
        Dashboard::Admin {
            stats,
            pending_jobs,
        } => {
            println!(
                "- {} pending validations | {} active requests | {} talents | {} active assessments",
                stats.pending_validations,
                stats.active_requests,
                stats.total_talents,
                stats.active_assessments
            );
            for job in pending_jobs {
                println!("  - awaiting validation: {} ({})", job.title, job.client_name);
            }
        }
        Dashboard::Talent {
            stats,
            recent_applications,
            recent_assessments,
        } => {
            let average = stats
                .average_match_score
                .map_or_else(|| "n/a".to_string(), |score| format!("{score}%"));
            println!(
                "- {} applications | {} upcoming interviews | {} pending assessments | {} average match",
                stats.applied_jobs, stats.upcoming_interviews, stats.pending_assessments, average
            );
            for application in recent_applications {
                println!(
                    "  - {} [{}]",
                    application.job_title,
                    application.stage.badge().label
                );
            }
            for assessment in recent_assessments {
                println!(
                    "  - {} [{}]",
                    assessment.title,
                    assessment.status.badge().label
                );
            }
        }
    }

    let viewer = Viewer::new(Some(user));
    let jobs = job_offers(catalog, viewer, &JobQuery::default());
    println!("Job offers visible: {}", jobs.len());

    let board = pipeline_board(catalog, viewer, &PipelineQuery::default());
    let columns = board
        .columns
        .iter()
        .map(|column| format!("{} {}", column.label, column.count))
        .collect::<Vec<_>>();
    println!("Pipeline: {}", columns.join(" | "));
}

async fn run_cv_upload() -> Result<(), AppError> {
    println!("\nCV upload");
    let service = SimulatedExtraction::new(Duration::ZERO);
    let mut workflow = CvUploadWorkflow::new();
    workflow.open();
    workflow.choose_file(CvDocument::new("alex-rivera-cv.pdf", "application/pdf", 184_320))?;

    let profile = workflow.extract_with(&service).await?;
    println!(
        "- extracted {} | {} education entries | {} roles | {} skills | {} certifications",
        profile.personal_info.name,
        profile.education.len(),
        profile.experience.len(),
        profile.skills.len(),
        profile.certifications.len()
    );

    let confirmed = workflow.confirm()?;
    println!("- profile saved for {}", confirmed.personal_info.email);
    Ok(())
}

fn run_job_posting() -> Result<(), AppError> {
    println!("\nJob posting");
    let service = SimulatedSubmission::new();
    let mut wizard = JobPostingWizard::new();
    wizard.open();
    wizard.form_mut().title = "Platform Engineer".to_string();
    wizard.add_skill("Rust", SkillPriority::MustHave);
    wizard.add_skill("Kubernetes", SkillPriority::NiceToHave);
    wizard.form_mut().budget_min = Some(500);
    wizard.form_mut().budget_max = Some(700);

    while wizard.next() != WizardStep::Review {}
    let estimate = wizard.estimated_cost();
    println!(
        "- estimated cost €{}-{} ({}% complete)",
        estimate.low,
        estimate.high,
        wizard.progress_pct()
    );
    println!("- {}", wizard.market_insight());

    let receipt = wizard.submit(&service)?;
    println!("- submitted for validation as {}", receipt.reference);
    Ok(())
}

fn run_interview(today: NaiveDate) -> Result<(), AppError> {
    println!("\nInterview scheduling");
    let calendar = SimulatedScheduler::new();
    let mut scheduler = InterviewScheduler::new("Alex Rivera", "Senior Frontend Developer");
    scheduler.open();
    scheduler.set_interviewer(0, "sarah.johnson@techcorp.com")?;

    scheduler.next()?;
    scheduler.select_date(today + ChronoDuration::days(1), today)?;
    if let Some(slot) = NaiveTime::from_hms_opt(10, 0, 0) {
        scheduler.select_time(slot)?;
    }
    scheduler.next()?;

    let invite = scheduler.invite()?;
    println!(
        "- {} on {} at {} ({})",
        invite.interview_type.label(),
        invite.date,
        invite.time.format("%H:%M"),
        scheduler.duration.label()
    );
    println!("- {}", scheduler.confirm(&calendar)?);
    Ok(())
}

fn run_code_assessment(catalog: &StaticCatalog) -> Result<(), AppError> {
    println!("\nCode assessment");
    let provisioner = SimulatedProvisioner::new();
    let Some(mut assessment) = catalog
        .code_assessments()
        .iter()
        .find(|assessment| assessment.status == CodeAssessmentStatus::NotStarted)
        .cloned()
    else {
        println!("- no challenge waiting to be started");
        return Ok(());
    };

    let now = Utc::now();
    start_code_assessment(&mut assessment, &provisioner, now)?;
    println!("- {} for {}", assessment.title, assessment.talent_name);
    if let Some(url) = &assessment.repo_url {
        println!("- repository {url}");
    }
    println!("- {}", time_remaining(assessment.deadline, now));
    println!("- {START_MESSAGE}");
    Ok(())
}
