use crate::infra::{deserialize_optional_date, AppState};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use talent_hub::domain::{RoleType, SeniorityLevel, User, UserRole};
use talent_hub::error::AppError;
use talent_hub::integrations::{CvDocument, ExtractedProfile, InterviewInvite};
use talent_hub::session::{resolve, InboxFilter, NavItem};
use talent_hub::views::{
    assessments, dashboard, job_offers, pipeline, pipeline_board, talent_profiles,
    talent_requests, AssessmentQuery, JobQuery, PipelineQuery, RequestQuery, TalentQuery, Viewer,
};
use talent_hub::workflows::{
    parse_slot, start_code_assessment, time_remaining, CodeAssessmentError, CostEstimate,
    CvStage, CvUploadWorkflow, InterviewDuration, InterviewScheduler, InterviewType,
    JobPostingForm, JobPostingWizard, WizardStep, START_MESSAGE,
};
use tracing::info;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/session", get(session_endpoint))
        .route("/api/v1/session/login", post(login_endpoint))
        .route("/api/v1/session/logout", post(logout_endpoint))
        .route("/api/v1/session/role", post(switch_role_endpoint))
        .route("/api/v1/routes/resolve", get(resolve_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/jobs", get(jobs_endpoint).post(submit_job_endpoint))
        .route("/api/v1/jobs/estimate", post(estimate_endpoint))
        .route("/api/v1/talents", get(talents_endpoint))
        .route("/api/v1/requests", get(requests_endpoint))
        .route("/api/v1/assessments", get(assessments_endpoint))
        .route("/api/v1/pipeline", get(pipeline_endpoint))
        .route("/api/v1/pipeline/board", get(pipeline_board_endpoint))
        .route("/api/v1/notifications", get(notifications_endpoint))
        .route("/api/v1/notifications/read-all", post(mark_all_read_endpoint))
        .route("/api/v1/notifications/:id/read", post(mark_read_endpoint))
        .route("/api/v1/notifications/:id", delete(delete_notification_endpoint))
        .route("/api/v1/cv/extract", post(cv_extract_endpoint))
        .route("/api/v1/interviews", post(schedule_interview_endpoint))
        .route("/api/v1/code-assessments", get(code_assessments_endpoint))
        .route(
            "/api/v1/code-assessments/:id/start",
            post(start_code_assessment_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
struct SessionView<'a> {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a User>,
    navigation: Vec<&'static NavItem>,
    unread_notifications: usize,
}

fn session_response(state: &AppState) -> Response {
    let session = state.session();
    Json(SessionView {
        authenticated: session.is_authenticated(),
        user: session.user(),
        navigation: session.navigation(),
        unread_notifications: session.inbox().unread_count(),
    })
    .into_response()
}

pub(crate) async fn session_endpoint(Extension(state): Extension<AppState>) -> Response {
    session_response(&state)
}

/// Any credentials are accepted; the `password` field is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) role: UserRole,
}

pub(crate) async fn login_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Response {
    tokio::time::sleep(state.simulation.login_delay).await;
    state
        .session()
        .login(&*state.catalog, &payload.email, payload.role);
    session_response(&state)
}

pub(crate) async fn logout_endpoint(Extension(state): Extension<AppState>) -> Response {
    state.session().logout();
    session_response(&state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SwitchRoleRequest {
    pub(crate) role: UserRole,
}

pub(crate) async fn switch_role_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SwitchRoleRequest>,
) -> Response {
    state.session().switch_role(&*state.catalog, payload.role);
    session_response(&state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveQuery {
    pub(crate) path: String,
}

pub(crate) async fn resolve_endpoint(Query(query): Query<ResolveQuery>) -> Response {
    Json(resolve(&query.path)).into_response()
}

/// `null` while logged out.
pub(crate) async fn dashboard_endpoint(Extension(state): Extension<AppState>) -> Response {
    let session = state.session();
    match session.user() {
        Some(user) => Json(dashboard(&*state.catalog, user)).into_response(),
        None => Json(Value::Null).into_response(),
    }
}

pub(crate) async fn jobs_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<JobQuery>,
) -> Response {
    let session = state.session();
    Json(job_offers(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

pub(crate) async fn talents_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<TalentQuery>,
) -> Response {
    let session = state.session();
    Json(talent_profiles(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

pub(crate) async fn requests_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<RequestQuery>,
) -> Response {
    let session = state.session();
    Json(talent_requests(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

pub(crate) async fn assessments_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<AssessmentQuery>,
) -> Response {
    let session = state.session();
    Json(assessments(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

pub(crate) async fn pipeline_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<PipelineQuery>,
) -> Response {
    let session = state.session();
    Json(pipeline(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

pub(crate) async fn pipeline_board_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<PipelineQuery>,
) -> Response {
    let session = state.session();
    Json(pipeline_board(&*state.catalog, Viewer::new(session.user()), &query)).into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NotificationQuery {
    pub(crate) filter: InboxFilter,
}

pub(crate) async fn notifications_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Response {
    let session = state.session();
    let inbox = session.inbox();
    Json(json!({
        "notifications": inbox.list(query.filter),
        "unread_count": inbox.unread_count(),
    }))
    .into_response()
}

pub(crate) async fn mark_read_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let mut session = state.session();
    let notification = session.inbox_mut().mark_read(&id)?;
    Ok(Json(notification).into_response())
}

pub(crate) async fn mark_all_read_endpoint(Extension(state): Extension<AppState>) -> Json<Value> {
    let marked = state.session().inbox_mut().mark_all_read();
    Json(json!({ "marked_read": marked }))
}

pub(crate) async fn delete_notification_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = state.session().inbox_mut().delete(&id)?;
    Ok(Json(json!({ "deleted": removed.id })))
}

#[derive(Debug, Serialize)]
pub(crate) struct CvExtractResponse {
    pub(crate) stage: CvStage,
    pub(crate) progress: u8,
    pub(crate) file_name: String,
    pub(crate) profile: ExtractedProfile,
}

/// Upload then extract in one call; the dialog ends on its review step.
pub(crate) async fn cv_extract_endpoint(
    Extension(state): Extension<AppState>,
    Json(document): Json<CvDocument>,
) -> Result<Json<CvExtractResponse>, AppError> {
    let file_name = document.file_name.clone();
    let mut workflow = CvUploadWorkflow::new();
    workflow.open();
    workflow.choose_file(document)?;

    let profile = workflow.extract_with(&*state.extraction).await?.clone();

    Ok(Json(CvExtractResponse {
        stage: workflow.stage(),
        progress: workflow.progress(),
        file_name,
        profile,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EstimateRequest {
    pub(crate) budget_min: Option<u32>,
    pub(crate) budget_max: Option<u32>,
    pub(crate) role: Option<RoleType>,
    pub(crate) seniority_level: Option<SeniorityLevel>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) estimate: CostEstimate,
    pub(crate) market_insight: String,
}

pub(crate) async fn estimate_endpoint(Json(payload): Json<EstimateRequest>) -> Json<EstimateResponse> {
    let mut wizard = JobPostingWizard::new();
    let form = wizard.form_mut();
    form.budget_min = payload.budget_min;
    form.budget_max = payload.budget_max;
    form.role = payload.role;
    form.seniority_level = payload.seniority_level;

    Json(EstimateResponse {
        estimate: wizard.estimated_cost(),
        market_insight: wizard.market_insight(),
    })
}

/// Walks the wizard to its review step and submits the form for validation.
pub(crate) async fn submit_job_endpoint(
    Extension(state): Extension<AppState>,
    Json(form): Json<JobPostingForm>,
) -> Result<Response, AppError> {
    let mut wizard = JobPostingWizard::new();
    wizard.open();
    *wizard.form_mut() = form;
    while wizard.step() != WizardStep::Review {
        wizard.next();
    }

    let receipt = wizard.submit(&*state.submission)?;
    Ok((StatusCode::ACCEPTED, Json(receipt)).into_response())
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterviewRequest {
    pub(crate) candidate_name: String,
    pub(crate) job_title: String,
    #[serde(default)]
    pub(crate) interview_type: InterviewType,
    #[serde(default)]
    pub(crate) duration: InterviewDuration,
    #[serde(default)]
    pub(crate) location: String,
    #[serde(default)]
    pub(crate) notes: String,
    #[serde(default)]
    pub(crate) interviewers: Vec<String>,
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) time: Option<String>,
    /// Reference date for the "not in the past" check; defaults to today.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InterviewResponse {
    pub(crate) message: &'static str,
    pub(crate) invite: InterviewInvite,
}

pub(crate) async fn schedule_interview_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let mut scheduler = InterviewScheduler::new(payload.candidate_name, payload.job_title);
    scheduler.open();
    scheduler.interview_type = payload.interview_type;
    scheduler.duration = payload.duration;
    scheduler.location = payload.location;
    scheduler.notes = payload.notes;
    for (index, email) in payload.interviewers.into_iter().enumerate() {
        let row = if index == 0 {
            0
        } else {
            scheduler.add_interviewer()
        };
        scheduler.set_interviewer(row, email)?;
    }

    scheduler.next()?;
    if let Some(date) = payload.date {
        scheduler.select_date(date, today)?;
    }
    if let Some(time) = payload.time.as_deref() {
        scheduler.select_time(parse_slot(time)?)?;
    }
    scheduler.next()?;

    let invite = scheduler.invite()?;
    let message = scheduler.confirm(&*state.scheduler)?;
    Ok(Json(InterviewResponse { message, invite }))
}

pub(crate) async fn code_assessments_endpoint(Extension(state): Extension<AppState>) -> Response {
    let owner = state
        .session()
        .user()
        .filter(|user| user.role == UserRole::Talent)
        .map(|user| user.id.clone());
    let now = Utc::now();

    let rows: Vec<Value> = state
        .code_assessments()
        .iter()
        .filter(|assessment| owner.as_deref().map_or(true, |id| assessment.talent_id == id))
        .map(|assessment| {
            json!({
                "assessment": assessment,
                "time_remaining": time_remaining(assessment.deadline, now),
            })
        })
        .collect();
    Json(rows).into_response()
}

pub(crate) async fn start_code_assessment_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut assessments = state.code_assessments();
    let assessment = assessments
        .iter_mut()
        .find(|assessment| assessment.id == id)
        .ok_or_else(|| CodeAssessmentError::NotFound { id: id.clone() })?;

    start_code_assessment(assessment, &*state.provisioner, Utc::now())?;
    info!(assessment = %id, "code assessment started over http");

    Ok(Json(json!({
        "message": START_MESSAGE,
        "assessment": assessment,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use talent_hub::config::SimulationConfig;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState::new(
            Arc::new(AtomicBool::new(true)),
            handle,
            SimulationConfig::instant(),
        )
    }

    fn app(state: &AppState) -> Router {
        router().layer(Extension(state.clone()))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        app(state).oneshot(request).await.expect("route executes")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    async fn login_as(state: &AppState, role: &str) {
        let response = send(
            state,
            post_json(
                "/api/v1/session/login",
                json!({ "email": "demo@talenthub.io", "password": "anything", "role": role }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_returns_user_and_navigation() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/session/login",
                json!({ "email": "x@y.z", "password": "", "role": "talent" }),
            ),
        )
        .await;
        let body = read_json_body(response).await;

        assert_eq!(body["authenticated"], json!(true));
        assert_eq!(body["user"]["id"], json!("talent-1"));
        let labels: Vec<_> = body["navigation"]
            .as_array()
            .expect("navigation array")
            .iter()
            .map(|item| item["label"].as_str().unwrap_or_default().to_string())
            .collect();
        assert!(!labels.contains(&"Talent Requests".to_string()));
        assert!(labels.contains(&"My Profile".to_string()));
    }

    #[tokio::test]
    async fn logged_out_dashboard_is_null() {
        let state = test_state();
        let body = read_json_body(send(&state, get_request("/api/v1/dashboard")).await).await;
        assert_eq!(body, Value::Null);

        login_as(&state, "admin").await;
        let body = read_json_body(send(&state, get_request("/api/v1/dashboard")).await).await;
        assert_eq!(body["role"], json!("admin"));
    }

    #[tokio::test]
    async fn job_list_follows_the_session_role() {
        let state = test_state();
        login_as(&state, "client").await;
        let client = read_json_body(send(&state, get_request("/api/v1/jobs")).await).await;

        let response = send(
            &state,
            post_json("/api/v1/session/role", json!({ "role": "admin" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let admin = read_json_body(send(&state, get_request("/api/v1/jobs")).await).await;

        assert!(client["total"].as_u64() < admin["total"].as_u64());
    }

    #[tokio::test]
    async fn list_filters_come_from_the_query_string() {
        let state = test_state();
        let body = read_json_body(
            send(&state, get_request("/api/v1/jobs?search=nothing-matches&status=all")).await,
        )
        .await;
        assert_eq!(body["total"], json!(0));
        assert_eq!(body["empty_message"], json!("No job offers found"));

        let response = send(&state, get_request("/api/v1/jobs?status=archived")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn resolve_redirects_root_to_login() {
        let state = test_state();
        let body =
            read_json_body(send(&state, get_request("/api/v1/routes/resolve?path=/")).await).await;
        assert_eq!(body["kind"], json!("redirect"));
    }

    #[tokio::test]
    async fn unsupported_cv_type_is_rejected() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/cv/extract",
                json!({ "file_name": "cv.docx", "mime_type": "application/msword" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = read_json_body(response).await;
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn cv_extraction_reaches_review() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/cv/extract",
                json!({ "file_name": "cv.pdf", "mime_type": "application/pdf", "size_bytes": 2048 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["progress"], json!(100));
        assert_eq!(body["profile"]["personal_info"]["name"], json!("Alex Rivera"));
        assert_eq!(state.extraction.documents(), vec!["cv.pdf".to_string()]);
    }

    #[tokio::test]
    async fn job_submission_is_accepted() {
        let state = test_state();
        let response = send(
            &state,
            post_json("/api/v1/jobs", json!({ "title": "Platform Engineer" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = read_json_body(response).await;
        assert!(body["reference"].as_str().is_some());
        assert_eq!(state.submission.submitted()[0].title, "Platform Engineer");
    }

    #[tokio::test]
    async fn estimate_uses_both_budget_bounds() {
        let state = test_state();
        let body = read_json_body(
            send(
                &state,
                post_json("/api/v1/jobs/estimate", json!({ "budget_min": 500, "budget_max": 700 })),
            )
            .await,
        )
        .await;
        assert_eq!(body["estimate"]["low"], json!(54_000));
        assert_eq!(body["estimate"]["high"], json!(108_000));
    }

    #[tokio::test]
    async fn interview_in_the_past_is_unprocessable() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/interviews",
                json!({
                    "candidate_name": "Alex Rivera",
                    "job_title": "Senior Frontend Developer",
                    "date": "2026-02-08",
                    "time": "10:00",
                    "today": "2026-02-09",
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.scheduler.invites().is_empty());
    }

    #[tokio::test]
    async fn interview_without_time_is_unprocessable() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/interviews",
                json!({
                    "candidate_name": "Alex Rivera",
                    "job_title": "Senior Frontend Developer",
                    "date": "2026-02-10",
                    "today": "2026-02-09",
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn interview_is_scheduled() {
        let state = test_state();
        let response = send(
            &state,
            post_json(
                "/api/v1/interviews",
                json!({
                    "candidate_name": "Maria Santos",
                    "job_title": "Backend Engineer",
                    "interview_type": "onsite",
                    "duration": 45,
                    "location": "Paris office",
                    "interviewers": ["cto@techcorp.com", "lead@techcorp.com"],
                    "date": "2026-02-10",
                    "time": "09:30",
                    "today": "2026-02-09",
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let invites = state.scheduler.invites();
        assert_eq!(invites.len(), 1);
        assert_eq!(invites[0].interviewers.len(), 2);
        assert_eq!(invites[0].location.as_deref(), Some("Paris office"));
    }

    #[tokio::test]
    async fn notifications_can_be_marked_and_deleted() {
        let state = test_state();
        let response = send(&state, post_json("/api/v1/notifications/1/read", json!({}))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json_body(
            send(&state, get_request("/api/v1/notifications?filter=unread")).await,
        )
        .await;
        assert_eq!(body["unread_count"], json!(1));

        let response = send(
            &state,
            Request::delete("/api/v1/notifications/99")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_json_body(
            send(&state, post_json("/api/v1/notifications/read-all", json!({}))).await,
        )
        .await;
        assert_eq!(body["marked_read"], json!(1));
    }

    #[tokio::test]
    async fn code_assessment_starts_once() {
        let state = test_state();
        let response = send(
            &state,
            post_json("/api/v1/code-assessments/code-4/start", json!({})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["assessment"]["status"], json!("in-progress"));

        let again = send(
            &state,
            post_json("/api/v1/code-assessments/code-4/start", json!({})),
        )
        .await;
        assert_eq!(again.status(), StatusCode::CONFLICT);

        let missing = send(
            &state,
            post_json("/api/v1/code-assessments/code-9/start", json!({})),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn readiness_reports_flag() {
        let state = test_state();
        state
            .readiness
            .store(false, std::sync::atomic::Ordering::Release);
        let response = send(&state, get_request("/ready")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
