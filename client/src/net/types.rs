//! Wire DTOs for the AfriCore REST API.
//!
//! DESIGN
//! ======
//! Records deserialize leniently: every optional or list field carries a
//! default so a sparse backend document still decodes. Client-only status
//! flags (`has_applied`, `is_enrolled`, ...) default to `false` and are
//! patched locally by optimistic actions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// AUTH + PROFILE
// =============================================================

/// `POST /api/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub country: String,
    pub age: u32,
}

/// `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token issued by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// The authenticated user's own profile as returned by `GET /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub country: String,
    pub age: u32,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub goals: String,
    pub current_projects: String,
    pub languages: Vec<String>,
    pub phone: String,
    pub linkedin: String,
    pub profile_image: String,
}

impl Profile {
    /// First letter of the display name, used for the header avatar.
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// `PUT /api/profile` body. The backend replaces the whole record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub country: String,
    pub age: u32,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub goals: String,
    pub current_projects: String,
    pub languages: Vec<String>,
    pub phone: String,
    pub linkedin: String,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            country: profile.country.clone(),
            age: profile.age,
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
            interests: profile.interests.clone(),
            education: profile.education.clone(),
            goals: profile.goals.clone(),
            current_projects: profile.current_projects.clone(),
            languages: profile.languages.clone(),
            phone: profile.phone.clone(),
            linkedin: profile.linkedin.clone(),
        }
    }
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub message: String,
}

// =============================================================
// PEOPLE
// =============================================================

/// Another member as listed by `GET /api/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub user_id: String,
    pub full_name: String,
    pub country: String,
    pub age: u32,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub languages: Vec<String>,
    pub profile_image: String,
    /// Set locally once a connection request has been sent.
    #[serde(skip_serializing)]
    pub connection_requested: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MembersResponse {
    pub users: Vec<Member>,
}

/// `POST /api/connect` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConnectRequest {
    pub target_user_id: String,
    pub message: String,
}

/// Incoming connection request awaiting acceptance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PendingRequest {
    pub connection_id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub requester_country: String,
    pub message: String,
    pub status: String,
}

/// Accepted connection, resolved to the other participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub connection_id: String,
    pub other_user_id: String,
    pub other_user_name: String,
    pub other_user_country: String,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionsResponse {
    pub pending_requests: Vec<PendingRequest>,
    pub connections: Vec<Connection>,
}

/// Direct message between two connected members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub created_at: String,
    pub read: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// `POST /api/messages` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub recipient_id: String,
    pub content: String,
}

// =============================================================
// JOBS + ORGANIZATIONS
// =============================================================

/// A job posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub organization_id: String,
    pub organization_name: String,
    pub job_type: String,
    pub job_category: String,
    pub location_type: String,
    pub location: String,
    pub salary_range: String,
    pub requirements: Vec<String>,
    pub skills_required: Vec<String>,
    pub experience_level: String,
    pub benefits: String,
    pub has_applied: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

/// `POST /api/jobs` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub job_type: String,
    pub job_category: String,
    pub location_type: String,
    pub location: String,
    pub salary_range: String,
    pub skills_required: Vec<String>,
    pub experience_level: String,
    pub benefits: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobCreated {
    pub job_id: String,
    pub message: String,
}

/// `POST /api/jobs/{id}/apply` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobApplicationRequest {
    pub job_id: String,
    pub cover_letter: String,
    pub portfolio_links: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationCreated {
    pub application_id: String,
}

/// Review state of a job application. Statuses this client does not know
/// are kept verbatim in `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Accepted,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    /// States an organization may move an application into.
    pub const REVIEWABLE: [Self; 5] = [Self::Pending, Self::Reviewed, Self::Shortlisted, Self::Accepted, Self::Rejected];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Shortlisted => "shortlisted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::REVIEWABLE
            .into_iter()
            .find(|s| s.as_str() == raw)
            .unwrap_or_else(|| Self::Other(raw.to_owned()))
    }

    pub fn is_reviewable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ApplicationStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A job application, seen either by the applicant or the hiring organization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Application {
    pub application_id: String,
    pub job_id: String,
    pub job_title: String,
    pub organization_name: String,
    pub applicant_id: String,
    pub applicant_name: String,
    pub cover_letter: String,
    pub portfolio_links: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// `PUT /api/applications/{id}/status` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}

/// A registered employer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub organization_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub organization_type: String,
    pub country: String,
    pub website: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub size: String,
    pub founded_year: Option<u32>,
    pub verified: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationsResponse {
    pub organizations: Vec<Organization>,
}

/// `POST /api/organization/register` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub description: String,
    pub organization_type: String,
    pub country: String,
    pub website: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub size: String,
    pub founded_year: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationCreated {
    pub organization_id: String,
}

// =============================================================
// FUNDING
// =============================================================

/// A crowdfunding project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project_id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub funding_goal: f64,
    pub current_funding: f64,
    pub funding_goal_type: String,
    pub duration_months: u32,
    pub location: String,
    pub impact_description: String,
    pub milestones: Vec<String>,
    pub status: String,
    pub backers_count: u32,
    pub has_contributed: bool,
}

impl Project {
    /// Share of the goal raised so far, in `[0, 100]`.
    ///
    /// Over-funded projects report 100; a zero or negative goal reports 0.
    pub fn progress_percent(&self) -> f64 {
        if self.funding_goal <= 0.0 || !self.funding_goal.is_finite() {
            return 0.0;
        }
        let raw = self.current_funding / self.funding_goal * 100.0;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 100.0)
    }

    /// Record a local contribution of `amount`.
    pub fn record_contribution(&mut self, amount: f64) {
        self.current_funding += amount;
        self.backers_count += 1;
        self.has_contributed = true;
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// `POST /api/projects` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub funding_goal: f64,
    pub funding_goal_type: String,
    pub duration_months: u32,
    pub location: String,
    pub impact_description: String,
    pub budget_breakdown: String,
    pub milestones: Vec<String>,
    pub images: Vec<String>,
    pub team_members: String,
    pub risks_challenges: String,
    pub sustainability_plan: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectCreated {
    pub project_id: String,
    pub message: String,
}

/// `POST /api/projects/{id}/contribute` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContributionRequest {
    pub project_id: String,
    pub amount: f64,
    pub anonymous: bool,
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContributionCreated {
    pub contribution_id: String,
}

/// A contribution made by the current user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contribution {
    pub contribution_id: String,
    pub project_id: String,
    pub project_title: String,
    pub amount: f64,
    pub anonymous: bool,
    pub message: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContributionsResponse {
    pub contributions: Vec<Contribution>,
}

// =============================================================
// CIVIC
// =============================================================

/// A policy proposal open for discussion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub policy_id: String,
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub proposal_type: String,
    pub target_location: String,
    pub expected_impact: String,
    pub implementation_timeline: String,
    pub resources_needed: String,
    pub status: String,
    pub support_count: u32,
    pub oppose_count: u32,
    pub feedback_count: u32,
    pub has_participated: bool,
}

impl Policy {
    /// Apply a local vote and mark the policy as participated.
    pub fn record_vote(&mut self, vote: VoteType) {
        match vote {
            VoteType::Support => self.support_count += 1,
            VoteType::Oppose => self.oppose_count += 1,
        }
        self.has_participated = true;
    }

    /// Apply a local feedback submission.
    pub fn record_feedback(&mut self) {
        self.feedback_count += 1;
        self.has_participated = true;
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PoliciesResponse {
    pub policies: Vec<Policy>,
}

/// `POST /api/policies` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewPolicy {
    pub title: String,
    pub description: String,
    pub category: String,
    pub proposal_type: String,
    pub target_location: String,
    pub expected_impact: String,
    pub implementation_timeline: String,
    pub resources_needed: String,
    pub supporting_documents: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolicyCreated {
    pub policy_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Support,
    Oppose,
}

/// `POST /api/policies/{id}/vote` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyVote {
    pub policy_id: String,
    pub vote_type: VoteType,
    pub comment: String,
}

/// `POST /api/policies/{id}/feedback` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyFeedback {
    pub policy_id: String,
    pub feedback_type: String,
    pub content: String,
    pub impact_assessment: String,
    pub alternative_suggestion: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackCreated {
    pub feedback_id: String,
}

/// Summary returned by `GET /api/civic/my-participation`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CivicParticipation {
    pub total_points: i64,
    pub participation_level: String,
    pub votes_cast: u32,
    pub feedback_given: u32,
    pub policies_proposed: u32,
}

// =============================================================
// EDUCATION
// =============================================================

/// A course in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub course_id: String,
    pub instructor_name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration_hours: u32,
    pub price: f64,
    pub learning_objectives: Vec<String>,
    pub skills_gained: Vec<String>,
    pub enrollment_count: u32,
    pub rating: f64,
    pub is_enrolled: bool,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

/// `POST /api/courses` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration_hours: u32,
    pub price: f64,
    pub learning_objectives: Vec<String>,
    pub prerequisites: Vec<String>,
    pub skills_gained: Vec<String>,
    pub certificate_type: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CourseCreated {
    pub course_id: String,
}

/// `POST /api/courses/{id}/enroll` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrollRequest {
    pub course_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentCreated {
    pub enrollment_id: String,
}
