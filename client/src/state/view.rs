//! View selector and local UI chrome state.
//!
//! DESIGN
//! ======
//! Screens are a closed enum so the root dispatch is one exhaustive `match`.
//! The selector is never persisted and falls back to `Home` on logout.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// One full-screen feature view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Profile,
    Discover,
    Connections,
    Messages,
    Jobs,
    MyApplications,
    Organization,
    PostJob,
    ManageApplications,
    Funding,
    MyProjects,
    CreateProject,
    MyContributions,
    Civic,
    MyCivic,
    CreatePolicy,
    CivicForums,
    Education,
    MyCourses,
    CreateCourse,
    Mentorship,
}

impl View {
    pub const ALL: [Self; 22] = [
        Self::Home,
        Self::Profile,
        Self::Discover,
        Self::Connections,
        Self::Messages,
        Self::Jobs,
        Self::MyApplications,
        Self::Organization,
        Self::PostJob,
        Self::ManageApplications,
        Self::Funding,
        Self::MyProjects,
        Self::CreateProject,
        Self::MyContributions,
        Self::Civic,
        Self::MyCivic,
        Self::CreatePolicy,
        Self::CivicForums,
        Self::Education,
        Self::MyCourses,
        Self::CreateCourse,
        Self::Mentorship,
    ];

    /// Top-level header navigation, in display order.
    pub const NAV: [Self; 8] = [
        Self::Home,
        Self::Discover,
        Self::Jobs,
        Self::Funding,
        Self::Civic,
        Self::Education,
        Self::Connections,
        Self::Organization,
    ];

    /// Stable kebab-case name.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::Discover => "discover",
            Self::Connections => "connections",
            Self::Messages => "messages",
            Self::Jobs => "jobs",
            Self::MyApplications => "my-applications",
            Self::Organization => "organization",
            Self::PostJob => "post-job",
            Self::ManageApplications => "manage-applications",
            Self::Funding => "funding",
            Self::MyProjects => "my-projects",
            Self::CreateProject => "create-project",
            Self::MyContributions => "my-contributions",
            Self::Civic => "civic",
            Self::MyCivic => "my-civic",
            Self::CreatePolicy => "create-policy",
            Self::CivicForums => "civic-forums",
            Self::Education => "education",
            Self::MyCourses => "my-courses",
            Self::CreateCourse => "create-course",
            Self::Mentorship => "mentorship",
        }
    }

    /// Parse a slug; unknown names yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }

    /// Label for navigation buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Discover => "Discover",
            Self::Connections => "Connections",
            Self::Messages => "Messages",
            Self::Jobs => "Jobs",
            Self::MyApplications => "My Applications",
            Self::Organization => "Employer",
            Self::PostJob => "Post Job",
            Self::ManageApplications => "Manage Applications",
            Self::Funding => "Funding",
            Self::MyProjects => "My Projects",
            Self::CreateProject => "Create Project",
            Self::MyContributions => "My Contributions",
            Self::Civic => "Civic",
            Self::MyCivic => "My Participation",
            Self::CreatePolicy => "Propose Policy",
            Self::CivicForums => "Civic Forums",
            Self::Education => "Education",
            Self::MyCourses => "My Learning",
            Self::CreateCourse => "Teach a Course",
            Self::Mentorship => "Mentorship",
        }
    }

    /// Navigation entry highlighted while this view is mounted.
    pub fn section(self) -> Self {
        match self {
            Self::Home | Self::Profile => Self::Home,
            Self::Discover => Self::Discover,
            Self::Connections | Self::Messages => Self::Connections,
            Self::Jobs | Self::MyApplications => Self::Jobs,
            Self::Organization | Self::PostJob | Self::ManageApplications => Self::Organization,
            Self::Funding | Self::MyProjects | Self::CreateProject | Self::MyContributions => Self::Funding,
            Self::Civic | Self::MyCivic | Self::CreatePolicy | Self::CivicForums => Self::Civic,
            Self::Education | Self::MyCourses | Self::CreateCourse | Self::Mentorship => Self::Education,
        }
    }
}

/// The member a `Messages` view is talking to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub user_id: String,
    pub name: String,
}

/// Selected view plus the little bits of cross-view UI context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub view: View,
    pub conversation: Option<Conversation>,
    pub mobile_menu_open: bool,
    /// View asked for by a deep link, mounted once the session is signed in.
    pub pending_view: Option<View>,
}

impl UiState {
    /// Mount `view`. Setting the current view again is a no-op.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.mobile_menu_open = false;
    }

    /// Remember the view named `slug` until [`UiState::apply_pending_view`].
    /// Unknown names are ignored.
    pub fn request_view(&mut self, slug: &str) -> bool {
        match View::from_slug(slug) {
            Some(view) => {
                self.pending_view = Some(view);
                true
            }
            None => false,
        }
    }

    /// Mount the deep-linked view, if any, and forget it.
    pub fn apply_pending_view(&mut self) {
        if let Some(view) = self.pending_view.take() {
            self.set_view(view);
        }
    }

    /// Open the message thread with another member.
    pub fn open_conversation(&mut self, user_id: String, name: String) {
        self.conversation = Some(Conversation { user_id, name });
        self.set_view(View::Messages);
    }

    /// Back to the logged-out defaults. A deep link not yet applied survives
    /// so it can be mounted after sign-in.
    pub fn reset(&mut self) {
        let pending_view = self.pending_view.take();
        *self = Self { pending_view, ..Self::default() };
    }
}
