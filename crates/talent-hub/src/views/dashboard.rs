use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::{
    Application, Assessment, AssessmentStatus, JobOffer, JobStatus, PipelineStage, RequestStatus,
    User, UserRole,
};

const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    pub active_jobs: usize,
    pub matched_talents: usize,
    pub upcoming_interviews: usize,
    pub pending_requests: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub pending_validations: usize,
    pub active_requests: usize,
    pub total_talents: usize,
    pub active_assessments: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TalentStats {
    pub applied_jobs: usize,
    pub upcoming_interviews: usize,
    pub pending_assessments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_match_score: Option<u8>,
}

/// Landing page content for the signed-in role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum Dashboard<'a> {
    Client {
        stats: ClientStats,
        recent_jobs: Vec<&'a JobOffer>,
    },
    Admin {
        stats: AdminStats,
        pending_jobs: Vec<&'a JobOffer>,
    },
    Talent {
        stats: TalentStats,
        recent_applications: Vec<&'a Application>,
        recent_assessments: Vec<&'a Assessment>,
    },
}

pub fn dashboard<'a>(catalog: &'a dyn Catalog, user: &User) -> Dashboard<'a> {
    match user.role {
        UserRole::Client => client_dashboard(catalog, &user.id),
        UserRole::Admin => admin_dashboard(catalog),
        UserRole::Talent => talent_dashboard(catalog, &user.id),
    }
}

fn client_dashboard<'a>(catalog: &'a dyn Catalog, client_id: &str) -> Dashboard<'a> {
    let own_jobs: Vec<&JobOffer> = catalog
        .job_offers()
        .iter()
        .filter(|job| job.client_id == client_id)
        .collect();
    let own_requests = catalog
        .talent_requests()
        .iter()
        .filter(|request| request.client_id == client_id);

    let stats = ClientStats {
        active_jobs: own_jobs
            .iter()
            .filter(|job| job.status == JobStatus::Open)
            .count(),
        matched_talents: own_requests
            .clone()
            .map(|request| request.matched_talents.len())
            .sum(),
        upcoming_interviews: catalog
            .applications()
            .iter()
            .filter(|app| app.stage == PipelineStage::InterviewScheduled)
            .filter(|app| own_jobs.iter().any(|job| job.id == app.job_offer_id))
            .count(),
        pending_requests: own_requests
            .filter(|request| {
                matches!(request.status, RequestStatus::Pending | RequestStatus::InReview)
            })
            .count(),
    };

    Dashboard::Client {
        stats,
        recent_jobs: own_jobs.into_iter().take(RECENT_LIMIT).collect(),
    }
}

fn admin_dashboard(catalog: &dyn Catalog) -> Dashboard<'_> {
    let pending: Vec<&JobOffer> = catalog
        .job_offers()
        .iter()
        .filter(|job| job.status == JobStatus::Submitted)
        .collect();

    let stats = AdminStats {
        pending_validations: pending.len(),
        active_requests: catalog
            .talent_requests()
            .iter()
            .filter(|request| request.status != RequestStatus::Completed)
            .count(),
        total_talents: catalog.talent_profiles().len(),
        active_assessments: catalog
            .assessments()
            .iter()
            .filter(|assessment| assessment.status == AssessmentStatus::InProgress)
            .count(),
    };

    Dashboard::Admin {
        stats,
        pending_jobs: pending.into_iter().take(RECENT_LIMIT).collect(),
    }
}

fn talent_dashboard<'a>(catalog: &'a dyn Catalog, talent_id: &str) -> Dashboard<'a> {
    let applications: Vec<&Application> = catalog
        .applications()
        .iter()
        .filter(|app| app.talent_id == talent_id)
        .collect();
    let assessments: Vec<&Assessment> = catalog
        .assessments()
        .iter()
        .filter(|assessment| assessment.talent_id == talent_id)
        .collect();

    let stats = TalentStats {
        applied_jobs: applications.len(),
        upcoming_interviews: applications
            .iter()
            .filter(|app| app.stage == PipelineStage::InterviewScheduled)
            .count(),
        pending_assessments: assessments
            .iter()
            .filter(|assessment| {
                matches!(
                    assessment.status,
                    AssessmentStatus::Pending | AssessmentStatus::InProgress
                )
            })
            .count(),
        average_match_score: average(applications.iter().map(|app| app.matching_score)),
    };

    Dashboard::Talent {
        stats,
        recent_applications: applications.into_iter().take(RECENT_LIMIT).collect(),
        recent_assessments: assessments.into_iter().take(RECENT_LIMIT).collect(),
    }
}

fn average(scores: impl Iterator<Item = u8>) -> Option<u8> {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| {
        (sum + u32::from(score), count + 1)
    });
    if count == 0 {
        return None;
    }
    u8::try_from((sum + count / 2) / count).ok()
}
