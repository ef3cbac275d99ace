//! REST API helpers for communicating with the AfriCore backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Authenticated calls
//! send `Authorization: Bearer <token>`; mutating feature actions also send
//! a fresh `Idempotency-Key` so a backend can drop duplicate submissions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::*;

/// Header carrying the per-action deduplication key.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug)]
struct Call<'a> {
    method: Method,
    path: &'a str,
    token: Option<&'a str>,
    idempotent: bool,
}

impl<'a> Call<'a> {
    fn get(path: &'a str, token: &'a str) -> Self {
        Self { method: Method::Get, path, token: Some(token), idempotent: false }
    }

    fn public_post(path: &'a str) -> Self {
        Self { method: Method::Post, path, token: None, idempotent: false }
    }

    fn action(method: Method, path: &'a str, token: &'a str) -> Self {
        Self { method, path, token: Some(token), idempotent: true }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Keep only query parameters with a non-blank value.
fn non_empty_query(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (*key, value.to_owned()))
        })
        .collect()
}

/// Turn a status + body pair into a typed result.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send<B, T>(call: Call<'_>, query: &[(&'static str, String)], body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match call.method {
            Method::Get => Request::get(call.path),
            Method::Post => Request::post(call.path),
            Method::Put => Request::put(call.path),
            Method::Delete => Request::delete(call.path),
        };
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        if let Some(token) = call.token {
            builder = builder.header("Authorization", &bearer(token));
        }
        if call.idempotent {
            builder = builder.header(IDEMPOTENCY_HEADER, &new_idempotency_key());
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (call, query, body);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str, token: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
    send::<(), T>(Call::get(path, token), query, None).await
}

async fn act<B, T>(method: Method, path: &str, token: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send(Call::action(method, path, token), &[], body).await
}

// =============================================================
// PATHS
// =============================================================

fn user_path(user_id: &str) -> String {
    format!("/api/user/{user_id}")
}

fn connection_accept_path(connection_id: &str) -> String {
    format!("/api/connection/{connection_id}/accept")
}

fn messages_path(other_user_id: &str) -> String {
    format!("/api/messages/{other_user_id}")
}

fn job_apply_path(job_id: &str) -> String {
    format!("/api/jobs/{job_id}/apply")
}

fn application_status_path(application_id: &str) -> String {
    format!("/api/applications/{application_id}/status")
}

fn project_path(project_id: &str) -> String {
    format!("/api/projects/{project_id}")
}

fn project_contribute_path(project_id: &str) -> String {
    format!("/api/projects/{project_id}/contribute")
}

fn policy_vote_path(policy_id: &str) -> String {
    format!("/api/policies/{policy_id}/vote")
}

fn policy_feedback_path(policy_id: &str) -> String {
    format!("/api/policies/{policy_id}/feedback")
}

fn course_enroll_path(course_id: &str) -> String {
    format!("/api/courses/{course_id}/enroll")
}

// =============================================================
// AUTH + PROFILE
// =============================================================

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns the server `detail` (e.g. "Email already registered") or a network error.
pub async fn register(req: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    send(Call::public_post("/api/register"), &[], Some(req)).await
}

/// Exchange credentials for a token via `POST /api/login`.
///
/// # Errors
///
/// Returns the server `detail` (e.g. "Incorrect email or password") or a network error.
pub async fn login(req: &LoginRequest) -> Result<TokenResponse, ApiError> {
    send(Call::public_post("/api/login"), &[], Some(req)).await
}

/// Fetch the signed-in user's profile from `GET /api/profile`.
///
/// # Errors
///
/// Any non-success means the token is no longer usable.
pub async fn fetch_profile(token: &str) -> Result<Profile, ApiError> {
    get("/api/profile", token, &[]).await
}

/// Replace the signed-in user's profile via `PUT /api/profile`.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn update_profile(token: &str, update: &ProfileUpdate) -> Result<Ack, ApiError> {
    act(Method::Put, "/api/profile", token, Some(update)).await
}

// =============================================================
// PEOPLE
// =============================================================

/// List other members, optionally narrowed by country and skill.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_members(token: &str, country: &str, skill: &str) -> Result<Vec<Member>, ApiError> {
    let query = non_empty_query(&[("country", country), ("skill", skill)]);
    let resp: MembersResponse = get("/api/users", token, &query).await?;
    Ok(resp.users)
}

/// Fetch another member's public profile.
///
/// # Errors
///
/// Returns the server `detail` (e.g. "User not found") or a network error.
pub async fn fetch_user(token: &str, user_id: &str) -> Result<Member, ApiError> {
    get(&user_path(user_id), token, &[]).await
}

/// Send a connection request via `POST /api/connect`.
///
/// # Errors
///
/// Returns the server `detail` (e.g. "Connection already exists") or a network error.
pub async fn send_connection_request(token: &str, req: &ConnectRequest) -> Result<Ack, ApiError> {
    act(Method::Post, "/api/connect", token, Some(req)).await
}

/// Fetch pending requests and accepted connections.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_connections(token: &str) -> Result<ConnectionsResponse, ApiError> {
    get("/api/connections", token, &[]).await
}

/// Accept an incoming connection request.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn accept_connection(token: &str, connection_id: &str) -> Result<Ack, ApiError> {
    act::<(), _>(Method::Post, &connection_accept_path(connection_id), token, None).await
}

/// Fetch the conversation with another member, oldest first.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_messages(token: &str, other_user_id: &str) -> Result<Vec<Message>, ApiError> {
    let resp: MessagesResponse = get(&messages_path(other_user_id), token, &[]).await?;
    Ok(resp.messages)
}

/// Send a direct message to a connected member.
///
/// # Errors
///
/// Returns the server `detail` (403 when not connected) or a network error.
pub async fn send_message(token: &str, msg: &NewMessage) -> Result<Ack, ApiError> {
    act(Method::Post, "/api/messages", token, Some(msg)).await
}

// =============================================================
// JOBS + ORGANIZATIONS
// =============================================================

/// List job postings, optionally narrowed by job type.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_jobs(token: &str, job_type: &str) -> Result<Vec<Job>, ApiError> {
    let query = non_empty_query(&[("job_type", job_type)]);
    let resp: JobsResponse = get("/api/jobs", token, &query).await?;
    Ok(resp.jobs)
}

/// List jobs matched to the signed-in user's skills.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_recommended_jobs(token: &str) -> Result<Vec<Job>, ApiError> {
    let resp: JobsResponse = get("/api/jobs/recommended", token, &[]).await?;
    Ok(resp.jobs)
}

/// Publish a job for the signed-in user's organization.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn post_job(token: &str, job: &NewJob) -> Result<JobCreated, ApiError> {
    act(Method::Post, "/api/jobs", token, Some(job)).await
}

/// Apply to a job.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn apply_to_job(token: &str, req: &JobApplicationRequest) -> Result<ApplicationCreated, ApiError> {
    act(Method::Post, &job_apply_path(&req.job_id), token, Some(req)).await
}

/// List the signed-in user's own applications.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_my_applications(token: &str) -> Result<Vec<Application>, ApiError> {
    let resp: ApplicationsResponse = get("/api/applications", token, &[]).await?;
    Ok(resp.applications)
}

/// List applications received by the signed-in user's organization.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_organization_applications(token: &str) -> Result<Vec<Application>, ApiError> {
    let resp: ApplicationsResponse = get("/api/organization/applications", token, &[]).await?;
    Ok(resp.applications)
}

/// Move an application to a new review state.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn update_application_status(
    token: &str,
    application_id: &str,
    status: ApplicationStatus,
) -> Result<Ack, ApiError> {
    let body = ApplicationStatusUpdate { status };
    act(Method::Put, &application_status_path(application_id), token, Some(&body)).await
}

/// List registered organizations, optionally narrowed by type.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_organizations(token: &str, org_type: &str) -> Result<Vec<Organization>, ApiError> {
    let query = non_empty_query(&[("org_type", org_type)]);
    let resp: OrganizationsResponse = get("/api/organizations", token, &query).await?;
    Ok(resp.organizations)
}

/// Register an organization owned by the signed-in user.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn register_organization(token: &str, org: &NewOrganization) -> Result<OrganizationCreated, ApiError> {
    act(Method::Post, "/api/organization/register", token, Some(org)).await
}

// =============================================================
// FUNDING
// =============================================================

/// List crowdfunding projects, optionally narrowed by category.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_projects(token: &str, category: &str) -> Result<Vec<Project>, ApiError> {
    let query = non_empty_query(&[("category", category)]);
    let resp: ProjectsResponse = get("/api/projects", token, &query).await?;
    Ok(resp.projects)
}

/// Fetch one project by id.
///
/// # Errors
///
/// Returns the server `detail` (e.g. "Project not found") or a network error.
pub async fn fetch_project(token: &str, project_id: &str) -> Result<Project, ApiError> {
    get(&project_path(project_id), token, &[]).await
}

/// List projects created by the signed-in user.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_my_projects(token: &str) -> Result<Vec<Project>, ApiError> {
    let resp: ProjectsResponse = get("/api/projects/my", token, &[]).await?;
    Ok(resp.projects)
}

/// Submit a new project proposal.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn create_project(token: &str, project: &NewProject) -> Result<ProjectCreated, ApiError> {
    act(Method::Post, "/api/projects", token, Some(project)).await
}

/// Withdraw one of the signed-in user's projects.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn delete_project(token: &str, project_id: &str) -> Result<Ack, ApiError> {
    act::<(), _>(Method::Delete, &project_path(project_id), token, None).await
}

/// Contribute to a project.
///
/// # Errors
///
/// Returns the server `detail` (e.g. project not active) or a network error.
pub async fn contribute(token: &str, req: &ContributionRequest) -> Result<ContributionCreated, ApiError> {
    act(Method::Post, &project_contribute_path(&req.project_id), token, Some(req)).await
}

/// List the signed-in user's contributions.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_my_contributions(token: &str) -> Result<Vec<Contribution>, ApiError> {
    let resp: ContributionsResponse = get("/api/contributions/my", token, &[]).await?;
    Ok(resp.contributions)
}

// =============================================================
// CIVIC
// =============================================================

/// List policy proposals, optionally narrowed by category.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_policies(token: &str, category: &str) -> Result<Vec<Policy>, ApiError> {
    let query = non_empty_query(&[("category", category)]);
    let resp: PoliciesResponse = get("/api/policies", token, &query).await?;
    Ok(resp.policies)
}

/// Propose a new policy.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn create_policy(token: &str, policy: &NewPolicy) -> Result<PolicyCreated, ApiError> {
    act(Method::Post, "/api/policies", token, Some(policy)).await
}

/// Support or oppose a policy.
///
/// # Errors
///
/// Returns the server `detail` (e.g. already voted) or a network error.
pub async fn vote_on_policy(token: &str, vote: &PolicyVote) -> Result<Ack, ApiError> {
    act(Method::Post, &policy_vote_path(&vote.policy_id), token, Some(vote)).await
}

/// Leave written feedback on a policy.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn submit_policy_feedback(token: &str, feedback: &PolicyFeedback) -> Result<FeedbackCreated, ApiError> {
    act(Method::Post, &policy_feedback_path(&feedback.policy_id), token, Some(feedback)).await
}

/// Fetch the signed-in user's civic participation summary.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_civic_participation(token: &str) -> Result<CivicParticipation, ApiError> {
    get("/api/civic/my-participation", token, &[]).await
}

// =============================================================
// EDUCATION
// =============================================================

/// List catalog courses, optionally narrowed by category.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_courses(token: &str, category: &str) -> Result<Vec<Course>, ApiError> {
    let query = non_empty_query(&[("category", category)]);
    let resp: CoursesResponse = get("/api/courses", token, &query).await?;
    Ok(resp.courses)
}

/// List courses the signed-in user is enrolled in.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn fetch_my_courses(token: &str) -> Result<Vec<Course>, ApiError> {
    let resp: CoursesResponse = get("/api/courses/my-courses", token, &[]).await?;
    Ok(resp.courses)
}

/// Publish a new course taught by the signed-in user.
///
/// # Errors
///
/// Returns the server `detail` or a network error.
pub async fn create_course(token: &str, course: &NewCourse) -> Result<CourseCreated, ApiError> {
    act(Method::Post, "/api/courses", token, Some(course)).await
}

/// Enroll in a course.
///
/// # Errors
///
/// Returns the server `detail` (e.g. already enrolled) or a network error.
pub async fn enroll_in_course(token: &str, course_id: &str) -> Result<EnrollmentCreated, ApiError> {
    let body = EnrollRequest { course_id: course_id.to_owned() };
    act(Method::Post, &course_enroll_path(course_id), token, Some(&body)).await
}
