use talent_hub::catalog::{Catalog, StaticCatalog};
use talent_hub::domain::{Availability, JobStatus, UserRole};
use talent_hub::session::{navigation_for, resolve, Resolution, Route, Session};
use talent_hub::views::{
    assessments, job_offers, pipeline, talent_profiles, talent_requests, AssessmentQuery, Filter,
    JobQuery, PipelineQuery, RequestQuery, TalentQuery, Viewer,
};

#[test]
fn switching_roles_changes_scope_of_every_page() {
    let catalog = StaticCatalog::seeded();
    let mut session = Session::from_catalog(&catalog);

    session.login(&catalog, "whoever@example.com", UserRole::Client);
    let client_jobs = job_offers(&catalog, Viewer::new(session.user()), &JobQuery::default()).len();
    let client_requests =
        talent_requests(&catalog, Viewer::new(session.user()), &RequestQuery::default()).len();

    session.switch_role(&catalog, UserRole::Admin);
    let admin_jobs = job_offers(&catalog, Viewer::new(session.user()), &JobQuery::default()).len();
    let admin_requests =
        talent_requests(&catalog, Viewer::new(session.user()), &RequestQuery::default()).len();

    assert!(client_jobs < admin_jobs);
    assert!(client_requests < admin_requests);
    assert_eq!(admin_jobs, catalog.job_offers().len());

    session.switch_role(&catalog, UserRole::Talent);
    let talent_pipeline =
        pipeline(&catalog, Viewer::new(session.user()), &PipelineQuery::default());
    assert!(talent_pipeline
        .rows
        .iter()
        .all(|application| application.talent_id == "talent-1"));
    let talent_assessments =
        assessments(&catalog, Viewer::new(session.user()), &AssessmentQuery::default());
    assert!(talent_assessments
        .rows
        .iter()
        .all(|assessment| assessment.talent_id == "talent-1"));

    session.logout();
    let anonymous = pipeline(&catalog, Viewer::new(session.user()), &PipelineQuery::default());
    assert_eq!(anonymous.len(), catalog.applications().len());
}

#[test]
fn filters_are_case_insensitive_search_and_exact_status() {
    let catalog = StaticCatalog::seeded();
    let query = JobQuery {
        search: "FRONTEND".to_string(),
        status: Filter::All,
    };
    let everything = job_offers(&catalog, Viewer::anonymous(), &query);
    assert_eq!(
        everything.rows.iter().map(|job| job.id.as_str()).collect::<Vec<_>>(),
        vec!["job-1", "job-4"]
    );

    let query = JobQuery {
        status: Filter::Only(JobStatus::Submitted),
        ..query
    };
    let submitted = job_offers(&catalog, Viewer::anonymous(), &query);
    assert_eq!(
        submitted.rows.iter().map(|job| job.id.as_str()).collect::<Vec<_>>(),
        vec!["job-4"]
    );
}

#[test]
fn unavailable_talents_can_be_isolated() {
    let catalog = StaticCatalog::seeded();
    let query = TalentQuery {
        search: String::new(),
        availability: Filter::Only(Availability::Unavailable),
    };
    let view = talent_profiles(&catalog, Viewer::anonymous(), &query);
    assert_eq!(view.len(), 1);
    assert_eq!(view.rows[0].name, "Liam O'Connor");
}

#[test]
fn navigation_matches_reachable_routes() {
    for role in [UserRole::Client, UserRole::Admin, UserRole::Talent] {
        for item in navigation_for(role) {
            assert_eq!(resolve(item.path()), Resolution::Page { route: item.route });
        }
    }
    assert_eq!(resolve("/"), Resolution::Redirect { to: Route::Login });
    assert_eq!(resolve("/admin"), Resolution::NotFound);
}
