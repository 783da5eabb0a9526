use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::{
    Application, Assessment, AssessmentStatus, AssessmentType, Availability, BudgetRange,
    CodeAssessment, CodeAssessmentStatus, JobOffer, JobStatus, Notification,
    NotificationPriority, NotificationType, PipelineStage, Rate, RequestStatus, RequestType,
    RequestUrgency, RoleType, SeniorityLevel, Skill, SkillLevel, SkillPriority, TalentProfile,
    TalentRequest, User, UserRole, WorkMode,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    let naive = date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default();
    Utc.from_utc_datetime(&naive)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn must(name: &str) -> Skill {
    Skill::new(name, SkillPriority::MustHave)
}

fn nice(name: &str) -> Skill {
    Skill::new(name, SkillPriority::NiceToHave)
}

fn leveled(pairs: &[(&str, SeniorityLevel)]) -> Vec<SkillLevel> {
    pairs
        .iter()
        .map(|(name, level)| SkillLevel {
            name: name.to_string(),
            level: *level,
        })
        .collect()
}

fn eur_budget(min: u32, max: u32) -> BudgetRange {
    BudgetRange {
        min,
        max,
        currency: "EUR".to_string(),
    }
}

pub(super) fn user(role: UserRole) -> User {
    match role {
        UserRole::Client => User {
            id: "client-1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@techcorp.com".to_string(),
            role,
            avatar: None,
            company: Some("TechCorp Inc.".to_string()),
        },
        UserRole::Admin => User {
            id: "admin-1".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael@kothontech.com".to_string(),
            role,
            avatar: None,
            company: Some("KothonTech".to_string()),
        },
        UserRole::Talent => User {
            id: "talent-1".to_string(),
            name: "Alex Rivera".to_string(),
            email: "alex.rivera@email.com".to_string(),
            role,
            avatar: None,
            company: None,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    role: RoleType,
    seniority_level: SeniorityLevel,
    skills: Vec<Skill>,
    budget_range: BudgetRange,
    work_mode: WorkMode,
    status: JobStatus,
    client: (&str, &str),
    created_at: NaiveDate,
) -> JobOffer {
    JobOffer {
        id: id.to_string(),
        title: title.to_string(),
        role,
        skills,
        seniority_level,
        project_duration: "6 months".to_string(),
        start_date: date(2026, 3, 2),
        budget_range,
        soft_skills: strings(&["Communication", "Ownership"]),
        work_mode,
        status,
        client_id: client.0.to_string(),
        client_name: client.1.to_string(),
        created_at,
        updated_at: created_at,
        tags: Vec::new(),
    }
}

pub(super) fn job_offers() -> Vec<JobOffer> {
    let techcorp = ("client-1", "TechCorp Inc.");
    let finserve = ("client-2", "FinServe Group");
    let healthplus = ("client-3", "HealthPlus");

    let mut offers = vec![
        job(
            "job-1",
            "Senior Frontend Developer",
            RoleType::Frontend,
            SeniorityLevel::Senior,
            vec![must("React"), must("TypeScript"), nice("Next.js")],
            eur_budget(550, 700),
            WorkMode::Remote,
            JobStatus::Open,
            techcorp,
            date(2026, 1, 15),
        ),
        job(
            "job-2",
            "Backend Engineer",
            RoleType::Backend,
            SeniorityLevel::Mid,
            vec![must("Node.js"), must("PostgreSQL"), nice("GraphQL")],
            eur_budget(450, 600),
            WorkMode::Hybrid,
            JobStatus::Validated,
            techcorp,
            date(2026, 1, 20),
        ),
        job(
            "job-3",
            "DevOps Specialist",
            RoleType::Devops,
            SeniorityLevel::Senior,
            vec![must("Kubernetes"), must("Terraform"), nice("AWS")],
            eur_budget(800, 1000),
            WorkMode::Remote,
            JobStatus::Open,
            techcorp,
            date(2026, 1, 22),
        ),
        job(
            "job-4",
            "Junior Frontend Developer",
            RoleType::Frontend,
            SeniorityLevel::Junior,
            vec![must("JavaScript"), nice("Vue.js")],
            eur_budget(250, 350),
            WorkMode::Onsite,
            JobStatus::Submitted,
            finserve,
            date(2026, 2, 1),
        ),
        job(
            "job-5",
            "Data Engineer",
            RoleType::Data,
            SeniorityLevel::Mid,
            vec![must("Python"), must("Spark"), nice("Airflow")],
            eur_budget(500, 650),
            WorkMode::Hybrid,
            JobStatus::Draft,
            healthplus,
            date(2026, 2, 3),
        ),
        job(
            "job-6",
            "Mobile Developer",
            RoleType::Mobile,
            SeniorityLevel::Mid,
            vec![must("React Native"), nice("Swift")],
            eur_budget(450, 550),
            WorkMode::Remote,
            JobStatus::Closed,
            finserve,
            date(2025, 12, 10),
        ),
    ];

    offers[0].tags = strings(&["priority", "enterprise"]);
    offers[2].project_duration = "12 months".to_string();
    offers
}

#[allow(clippy::too_many_arguments)]
fn talent(
    id: &str,
    name: &str,
    email: &str,
    title: &str,
    location: &str,
    timezone: &str,
    skills: Vec<SkillLevel>,
    experience: u8,
    availability: Availability,
    daily_rate: u32,
    matching_score: Option<u8>,
) -> TalentProfile {
    TalentProfile {
        id: id.to_string(),
        user_id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
        title: title.to_string(),
        location: location.to_string(),
        timezone: timezone.to_string(),
        skills,
        experience,
        education: "BSc Computer Science".to_string(),
        certifications: Vec::new(),
        availability,
        daily_rate: Rate::eur(daily_rate),
        hourly_rate: Rate::eur(daily_rate / 8),
        custom_tags: Vec::new(),
        matching_score,
        risk_indicators: Vec::new(),
        strengths: Vec::new(),
    }
}

pub(super) fn talent_profiles() -> Vec<TalentProfile> {
    use SeniorityLevel::{Junior, Lead, Mid, Senior};

    let mut profiles = vec![
        talent(
            "talent-1",
            "Alex Rivera",
            "alex.rivera@email.com",
            "Senior Frontend Developer",
            "Barcelona, Spain",
            "CET",
            leveled(&[
                ("React", Senior),
                ("TypeScript", Senior),
                ("Next.js", Mid),
                ("Node.js", Mid),
            ]),
            7,
            Availability::Available,
            600,
            Some(94),
        ),
        talent(
            "talent-2",
            "Maria Santos",
            "maria.santos@email.com",
            "Backend Engineer",
            "Lisbon, Portugal",
            "WET",
            leveled(&[("Node.js", Senior), ("PostgreSQL", Senior), ("GraphQL", Mid)]),
            6,
            Availability::PartiallyAvailable,
            550,
            Some(92),
        ),
        talent(
            "talent-3",
            "James Wilson",
            "james.wilson@email.com",
            "DevOps Engineer",
            "London, United Kingdom",
            "GMT",
            leveled(&[
                ("Kubernetes", Lead),
                ("Terraform", Senior),
                ("AWS", Senior),
                ("Docker", Senior),
            ]),
            9,
            Availability::Available,
            850,
            Some(91),
        ),
        talent(
            "talent-4",
            "Sophie Martin",
            "sophie.martin@email.com",
            "Frontend Developer",
            "Lyon, France",
            "CET",
            leveled(&[("JavaScript", Mid), ("Vue.js", Mid), ("CSS", Mid)]),
            3,
            Availability::Available,
            350,
            Some(78),
        ),
        talent(
            "talent-5",
            "Liam O'Connor",
            "liam.oconnor@email.com",
            "Full-Stack Developer",
            "Dublin, Ireland",
            "GMT",
            leveled(&[("Python", Senior), ("Django", Senior), ("React", Mid)]),
            5,
            Availability::Unavailable,
            500,
            Some(85),
        ),
        talent(
            "talent-6",
            "Yuki Tanaka",
            "yuki.tanaka@email.com",
            "Data Engineer",
            "Berlin, Germany",
            "CET",
            leveled(&[("Python", Senior), ("Spark", Senior), ("Airflow", Junior)]),
            4,
            Availability::PartiallyAvailable,
            580,
            None,
        ),
    ];

    profiles[0].education = "MSc Computer Science".to_string();
    profiles[0].certifications = strings(&[
        "AWS Certified Developer",
        "React Professional Certificate",
        "Scrum Master Certified",
    ]);
    profiles[0].custom_tags = strings(&["top-performer"]);
    profiles[0].strengths = strings(&["Component architecture", "Mentoring"]);
    profiles[2].certifications = strings(&["CKA", "AWS Solutions Architect"]);
    profiles[3].risk_indicators = strings(&["Limited enterprise experience"]);
    profiles
}

pub(super) fn talent_requests(profiles: &[TalentProfile]) -> Vec<TalentRequest> {
    let matched = |ids: &[&str]| -> Vec<TalentProfile> {
        profiles
            .iter()
            .filter(|profile| ids.contains(&profile.id.as_str()))
            .cloned()
            .collect()
    };

    vec![
        TalentRequest {
            id: "req-1".to_string(),
            client_id: "client-1".to_string(),
            client_name: "TechCorp Inc.".to_string(),
            title: "Backend Engineer Shortlist".to_string(),
            skills: vec![must("Node.js"), must("PostgreSQL"), nice("GraphQL")],
            urgency: RequestUrgency::High,
            availability: "Full-time".to_string(),
            timezone: "CET".to_string(),
            request_type: RequestType::Shortlist,
            status: RequestStatus::Matched,
            created_at: date(2026, 2, 2),
            matched_talents: matched(&["talent-2", "talent-5", "talent-1"]),
        },
        TalentRequest {
            id: "req-2".to_string(),
            client_id: "client-1".to_string(),
            client_name: "TechCorp Inc.".to_string(),
            title: "Urgent React Developer".to_string(),
            skills: vec![must("React"), must("TypeScript")],
            urgency: RequestUrgency::Urgent,
            availability: "Immediate".to_string(),
            timezone: "CET".to_string(),
            request_type: RequestType::SingleProfile,
            status: RequestStatus::Pending,
            created_at: date(2026, 2, 6),
            matched_talents: Vec::new(),
        },
        TalentRequest {
            id: "req-3".to_string(),
            client_id: "client-2".to_string(),
            client_name: "FinServe Group".to_string(),
            title: "Data Pipeline Specialist".to_string(),
            skills: vec![must("Spark"), nice("Airflow")],
            urgency: RequestUrgency::Medium,
            availability: "Part-time".to_string(),
            timezone: "CET".to_string(),
            request_type: RequestType::BackupProfiles,
            status: RequestStatus::InReview,
            created_at: date(2026, 1, 30),
            matched_talents: Vec::new(),
        },
        TalentRequest {
            id: "req-4".to_string(),
            client_id: "client-3".to_string(),
            client_name: "HealthPlus".to_string(),
            title: "QA Automation Backup".to_string(),
            skills: vec![must("Cypress"), nice("Playwright")],
            urgency: RequestUrgency::Low,
            availability: "Full-time".to_string(),
            timezone: "GMT".to_string(),
            request_type: RequestType::BackupProfiles,
            status: RequestStatus::Completed,
            created_at: date(2026, 1, 12),
            matched_talents: matched(&["talent-4"]),
        },
    ]
}

pub(super) fn assessments() -> Vec<Assessment> {
    let base = |id: &str, talent_id: &str, kind: AssessmentType, title: &str| Assessment {
        id: id.to_string(),
        talent_id: talent_id.to_string(),
        kind,
        title: title.to_string(),
        description: String::new(),
        status: AssessmentStatus::Pending,
        score: None,
        max_score: 100,
        started_at: None,
        completed_at: None,
        deadline: None,
        repo_url: None,
    };

    vec![
        Assessment {
            description: "Hooks, rendering performance and state management.".to_string(),
            status: AssessmentStatus::Completed,
            score: Some(88),
            started_at: Some(at(2026, 2, 1, 9, 0)),
            completed_at: Some(at(2026, 2, 1, 10, 30)),
            ..base(
                "assess-1",
                "talent-1",
                AssessmentType::Technical,
                "React Advanced Assessment",
            )
        },
        Assessment {
            description: "RESTful API with authentication, products and orders.".to_string(),
            status: AssessmentStatus::InProgress,
            started_at: Some(at(2026, 2, 8, 10, 0)),
            deadline: Some(at(2026, 2, 8, 18, 0)),
            repo_url: Some("https://github.com/talenthub/alex-rivera-ecommerce-api".to_string()),
            ..base(
                "assess-2",
                "talent-1",
                AssessmentType::CodeChallenge,
                "E-commerce API Challenge",
            )
        },
        Assessment {
            description: "Collaboration scenarios and stakeholder communication.".to_string(),
            deadline: Some(at(2026, 2, 14, 18, 0)),
            ..base(
                "assess-3",
                "talent-1",
                AssessmentType::SoftSkill,
                "Communication & Teamwork",
            )
        },
        Assessment {
            description: "Node.js services, SQL modelling and API design.".to_string(),
            status: AssessmentStatus::Completed,
            score: Some(92),
            completed_at: Some(at(2026, 2, 4, 15, 0)),
            ..base(
                "assess-4",
                "talent-2",
                AssessmentType::Technical,
                "Node.js Backend Assessment",
            )
        },
        Assessment {
            description: "Infrastructure as code, CI/CD and observability.".to_string(),
            status: AssessmentStatus::Completed,
            score: Some(91),
            completed_at: Some(at(2026, 2, 5, 16, 30)),
            ..base(
                "assess-5",
                "talent-3",
                AssessmentType::Technical,
                "DevOps Technical Assessment",
            )
        },
        Assessment {
            description: "Conflict resolution role play.".to_string(),
            status: AssessmentStatus::Expired,
            deadline: Some(at(2026, 1, 31, 18, 0)),
            ..base(
                "assess-6",
                "talent-4",
                AssessmentType::SoftSkill,
                "Leadership Scenarios",
            )
        },
    ]
}

pub(super) fn code_assessments() -> Vec<CodeAssessment> {
    vec![
        CodeAssessment {
            id: "code-1".to_string(),
            title: "E-commerce API Challenge".to_string(),
            description: "Build a RESTful API for an e-commerce platform with authentication, product management, and order processing.".to_string(),
            talent_id: "talent-1".to_string(),
            talent_name: "Alex Rivera".to_string(),
            status: CodeAssessmentStatus::InProgress,
            repo_url: Some("https://github.com/talenthub/alex-rivera-ecommerce-api".to_string()),
            deadline: at(2026, 2, 8, 18, 0),
            started_at: Some(at(2026, 2, 8, 10, 0)),
            submitted_at: None,
            score: None,
            feedback: None,
        },
        CodeAssessment {
            id: "code-2".to_string(),
            title: "React Dashboard Builder".to_string(),
            description: "Create a customizable dashboard with drag-and-drop widgets, real-time data updates, and responsive design.".to_string(),
            talent_id: "talent-2".to_string(),
            talent_name: "Maria Santos".to_string(),
            status: CodeAssessmentStatus::Submitted,
            repo_url: Some("https://github.com/talenthub/maria-santos-dashboard".to_string()),
            deadline: at(2026, 2, 7, 18, 0),
            started_at: Some(at(2026, 2, 7, 9, 0)),
            submitted_at: Some(at(2026, 2, 7, 17, 45)),
            score: None,
            feedback: None,
        },
        CodeAssessment {
            id: "code-3".to_string(),
            title: "DevOps Infrastructure Setup".to_string(),
            description: "Set up a complete CI/CD pipeline with Docker, Kubernetes, and automated testing for a microservices architecture.".to_string(),
            talent_id: "talent-3".to_string(),
            talent_name: "James Wilson".to_string(),
            status: CodeAssessmentStatus::Reviewed,
            repo_url: Some("https://github.com/talenthub/james-wilson-devops".to_string()),
            deadline: at(2026, 2, 5, 18, 0),
            started_at: Some(at(2026, 2, 5, 9, 0)),
            submitted_at: Some(at(2026, 2, 5, 16, 30)),
            score: Some(91),
            feedback: Some("Excellent infrastructure setup with comprehensive documentation. Strong security practices and automated testing implementation.".to_string()),
        },
        CodeAssessment {
            id: "code-4".to_string(),
            title: "Real-time Chat Application".to_string(),
            description: "Build a real-time chat with WebSocket support, user authentication, message history, and file sharing.".to_string(),
            talent_id: "talent-4".to_string(),
            talent_name: "Sophie Martin".to_string(),
            status: CodeAssessmentStatus::NotStarted,
            repo_url: None,
            deadline: at(2026, 2, 12, 18, 0),
            started_at: None,
            submitted_at: None,
            score: None,
            feedback: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    talent: (&str, &str),
    job: (&str, &str),
    stage: PipelineStage,
    matching_score: u8,
    applied_at: NaiveDate,
    last_updated: NaiveDate,
    interview_date: Option<DateTime<Utc>>,
) -> Application {
    Application {
        id: id.to_string(),
        talent_id: talent.0.to_string(),
        talent_name: talent.1.to_string(),
        talent_avatar: None,
        job_offer_id: job.0.to_string(),
        job_title: job.1.to_string(),
        stage,
        matching_score,
        applied_at,
        last_updated,
        interview_date,
        notes: None,
    }
}

pub(super) fn applications() -> Vec<Application> {
    let alex = ("talent-1", "Alex Rivera");
    let maria = ("talent-2", "Maria Santos");
    let james = ("talent-3", "James Wilson");
    let sophie = ("talent-4", "Sophie Martin");
    let liam = ("talent-5", "Liam O'Connor");
    let yuki = ("talent-6", "Yuki Tanaka");

    let senior_frontend = ("job-1", "Senior Frontend Developer");
    let backend = ("job-2", "Backend Engineer");
    let devops = ("job-3", "DevOps Specialist");
    let junior_frontend = ("job-4", "Junior Frontend Developer");
    let data = ("job-5", "Data Engineer");
    let mobile = ("job-6", "Mobile Developer");

    let mut applications = vec![
        application(
            "app-1",
            alex,
            senior_frontend,
            PipelineStage::InterviewScheduled,
            94,
            date(2026, 1, 28),
            date(2026, 2, 6),
            Some(at(2026, 2, 10, 14, 0)),
        ),
        application(
            "app-2",
            maria,
            backend,
            PipelineStage::Assessed,
            92,
            date(2026, 1, 25),
            date(2026, 2, 4),
            None,
        ),
        application(
            "app-3",
            james,
            devops,
            PipelineStage::Results,
            91,
            date(2026, 1, 24),
            date(2026, 2, 5),
            None,
        ),
        application(
            "app-4",
            sophie,
            junior_frontend,
            PipelineStage::InterviewScheduled,
            78,
            date(2026, 2, 2),
            date(2026, 2, 7),
            Some(at(2026, 2, 12, 10, 0)),
        ),
        application(
            "app-5",
            liam,
            backend,
            PipelineStage::Screening,
            85,
            date(2026, 2, 3),
            date(2026, 2, 5),
            None,
        ),
        application(
            "app-6",
            alex,
            backend,
            PipelineStage::Applied,
            81,
            date(2026, 2, 7),
            date(2026, 2, 7),
            None,
        ),
        application(
            "app-7",
            yuki,
            data,
            PipelineStage::Accepted,
            89,
            date(2026, 1, 10),
            date(2026, 1, 30),
            None,
        ),
        application(
            "app-8",
            alex,
            mobile,
            PipelineStage::Rejected,
            64,
            date(2025, 12, 15),
            date(2026, 1, 9),
            None,
        ),
        application(
            "app-9",
            james,
            senior_frontend,
            PipelineStage::Applied,
            72,
            date(2026, 2, 6),
            date(2026, 2, 6),
            None,
        ),
    ];

    applications[0].notes = Some("Strong portfolio; panel with the platform team.".to_string());
    applications[7].notes = Some("Mobile experience below the role's bar.".to_string());
    applications
}

pub(super) fn notifications() -> Vec<Notification> {
    let notification = |id: &str,
                        kind: NotificationType,
                        title: &str,
                        message: &str,
                        created_at: DateTime<Utc>,
                        read: bool,
                        link: &str,
                        priority: NotificationPriority| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read,
        created_at,
        link: Some(link.to_string()),
        priority,
    };

    vec![
        notification(
            "1",
            NotificationType::ApplicationReceived,
            "New Application Received",
            "Alex Rivera applied to your Senior Frontend Developer position",
            at(2026, 2, 8, 11, 58),
            false,
            "/pipeline",
            NotificationPriority::High,
        ),
        notification(
            "2",
            NotificationType::InterviewScheduled,
            "Interview Scheduled",
            "Interview with Maria Santos confirmed for Feb 10, 2026 at 2:00 PM",
            at(2026, 2, 8, 11, 0),
            false,
            "/pipeline",
            NotificationPriority::High,
        ),
        notification(
            "3",
            NotificationType::AssessmentCompleted,
            "Assessment Completed",
            "James Wilson completed the DevOps technical assessment with score 91/100",
            at(2026, 2, 8, 9, 0),
            true,
            "/assessments",
            NotificationPriority::Normal,
        ),
        notification(
            "4",
            NotificationType::FinalDecision,
            "Talent Shortlist Ready",
            "3 pre-qualified candidates matched for Backend Engineer role",
            at(2026, 2, 8, 7, 0),
            true,
            "/talents",
            NotificationPriority::Normal,
        ),
        notification(
            "5",
            NotificationType::System,
            "Job Offer Validated",
            "Your DevOps Specialist job offer has been validated and is now live",
            at(2026, 2, 7, 12, 0),
            true,
            "/jobs",
            NotificationPriority::Low,
        ),
        notification(
            "6",
            NotificationType::AssessmentAssigned,
            "Application Update",
            "Sophie Martin moved to Interview stage for Junior Frontend role",
            at(2026, 2, 7, 10, 0),
            true,
            "/pipeline",
            NotificationPriority::Normal,
        ),
    ]
}
