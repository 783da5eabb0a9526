//! Read-only data providers consumed by the views.
//!
//! The only provider is the built-in mock dataset; pages never write back.

mod fixtures;

use crate::domain::{
    Application, Assessment, CodeAssessment, JobOffer, Notification, TalentProfile,
    TalentRequest, User, UserRole,
};

/// Source of the collections every page renders.
pub trait Catalog: Send + Sync {
    /// The demo account signed in for `role`.
    fn user_for(&self, role: UserRole) -> &User;
    fn job_offers(&self) -> &[JobOffer];
    fn talent_profiles(&self) -> &[TalentProfile];
    fn talent_requests(&self) -> &[TalentRequest];
    fn assessments(&self) -> &[Assessment];
    fn code_assessments(&self) -> &[CodeAssessment];
    fn applications(&self) -> &[Application];
    fn notifications(&self) -> &[Notification];
}

/// In-memory catalog. `seeded()` gives the demo dataset; the `with_*`
/// builders swap single collections, mostly for tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    client: User,
    admin: User,
    talent: User,
    job_offers: Vec<JobOffer>,
    talent_profiles: Vec<TalentProfile>,
    talent_requests: Vec<TalentRequest>,
    assessments: Vec<Assessment>,
    code_assessments: Vec<CodeAssessment>,
    applications: Vec<Application>,
    notifications: Vec<Notification>,
}

impl StaticCatalog {
    pub fn seeded() -> Self {
        let talent_profiles = fixtures::talent_profiles();
        let talent_requests = fixtures::talent_requests(&talent_profiles);

        Self {
            client: fixtures::user(UserRole::Client),
            admin: fixtures::user(UserRole::Admin),
            talent: fixtures::user(UserRole::Talent),
            job_offers: fixtures::job_offers(),
            talent_profiles,
            talent_requests,
            assessments: fixtures::assessments(),
            code_assessments: fixtures::code_assessments(),
            applications: fixtures::applications(),
            notifications: fixtures::notifications(),
        }
    }

    pub fn with_job_offers(mut self, job_offers: Vec<JobOffer>) -> Self {
        self.job_offers = job_offers;
        self
    }

    pub fn with_talent_profiles(mut self, talent_profiles: Vec<TalentProfile>) -> Self {
        self.talent_profiles = talent_profiles;
        self
    }

    pub fn with_talent_requests(mut self, talent_requests: Vec<TalentRequest>) -> Self {
        self.talent_requests = talent_requests;
        self
    }

    pub fn with_assessments(mut self, assessments: Vec<Assessment>) -> Self {
        self.assessments = assessments;
        self
    }

    pub fn with_applications(mut self, applications: Vec<Application>) -> Self {
        self.applications = applications;
        self
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog for StaticCatalog {
    fn user_for(&self, role: UserRole) -> &User {
        match role {
            UserRole::Client => &self.client,
            UserRole::Admin => &self.admin,
            UserRole::Talent => &self.talent,
        }
    }

    fn job_offers(&self) -> &[JobOffer] {
        &self.job_offers
    }

    fn talent_profiles(&self) -> &[TalentProfile] {
        &self.talent_profiles
    }

    fn talent_requests(&self) -> &[TalentRequest] {
        &self.talent_requests
    }

    fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    fn code_assessments(&self) -> &[CodeAssessment] {
        &self.code_assessments
    }

    fn applications(&self) -> &[Application] {
        &self.applications
    }

    fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PipelineStage, RequestStatus};
    use std::collections::HashSet;

    #[test]
    fn demo_users_carry_their_role() {
        let catalog = StaticCatalog::seeded();
        for role in [UserRole::Client, UserRole::Admin, UserRole::Talent] {
            assert_eq!(catalog.user_for(role).role, role);
        }
        assert_eq!(catalog.user_for(UserRole::Client).id, "client-1");
        assert_eq!(catalog.user_for(UserRole::Talent).id, "talent-1");
    }

    #[test]
    fn ids_are_unique_per_collection() {
        let catalog = StaticCatalog::seeded();
        let job_ids: HashSet<_> = catalog.job_offers().iter().map(|job| &job.id).collect();
        assert_eq!(job_ids.len(), catalog.job_offers().len());
        let app_ids: HashSet<_> = catalog.applications().iter().map(|app| &app.id).collect();
        assert_eq!(app_ids.len(), catalog.applications().len());
    }

    #[test]
    fn matched_requests_reference_known_talents() {
        let catalog = StaticCatalog::seeded();
        let known: HashSet<_> = catalog
            .talent_profiles()
            .iter()
            .map(|talent| talent.id.as_str())
            .collect();

        let matched = catalog
            .talent_requests()
            .iter()
            .filter(|request| request.status == RequestStatus::Matched)
            .collect::<Vec<_>>();
        assert!(!matched.is_empty());
        for request in matched {
            assert!(!request.matched_talents.is_empty());
            for talent in &request.matched_talents {
                assert!(known.contains(talent.id.as_str()));
            }
        }
    }

    #[test]
    fn applications_cover_every_stage() {
        let catalog = StaticCatalog::seeded();
        for stage in PipelineStage::ordered() {
            assert!(
                catalog.applications().iter().any(|app| app.stage == stage),
                "no application in {stage:?}"
            );
        }
    }

    #[test]
    fn builders_replace_single_collections() {
        let catalog = StaticCatalog::seeded().with_applications(Vec::new());
        assert!(catalog.applications().is_empty());
        assert!(!catalog.job_offers().is_empty());
    }
}
