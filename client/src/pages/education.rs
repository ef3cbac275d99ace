//! Learning views: the course catalog, my enrolled courses, course creation
//! and the mentorship placeholder.

#[cfg(test)]
#[path = "education_test.rs"]
mod education_test;

use leptos::prelude::*;

use crate::components::coming_soon::ComingSoon;
use crate::components::field::{FormMessage, SelectField, TextArea, TextField};
use crate::components::filter_bar::FilterBar;
use crate::components::list_status::ListStatus;
use crate::net::api;
use crate::net::types::{Course, NewCourse};
use crate::pages::form::{join_list, parse_amount, parse_list, parse_whole, required};
use crate::pages::options::{COURSE_CATEGORIES, COURSE_LEVELS, choices, label_for};
use crate::state::filter::ListFilter;
use crate::state::listing::Listing;
use crate::state::session::SessionState;
use crate::state::view::{UiState, View};
use crate::util::listing::{load_listing, run_item_action, submit};

/// "Free" or a dollar price.
pub fn price_label(course: &Course) -> String {
    if course.is_free() { "Free".to_owned() } else { format!("${:.2}", course.price) }
}

/// "Beginner • 12h • 4.5★ • 230 enrolled" meta line.
pub fn course_meta(course: &Course) -> String {
    format!(
        "{} • {}h • {:.1}★ • {} enrolled",
        label_for(COURSE_LEVELS, &course.level),
        course.duration_hours,
        course.rating,
        course.enrollment_count
    )
}

/// Raw course creation fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration_hours: String,
    pub price: String,
    pub learning_objectives: String,
    pub prerequisites: String,
    pub skills_gained: String,
    pub certificate_type: String,
}

impl CourseForm {
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self) -> Result<NewCourse, String> {
        let price = if self.price.trim().is_empty() { 0.0 } else { parse_amount("Price", &self.price, true)? };
        let certificate_type = match self.certificate_type.trim() {
            "" => "completion".to_owned(),
            other => other.to_owned(),
        };
        Ok(NewCourse {
            title: required("Course title", &self.title)?,
            description: required("Description", &self.description)?,
            category: required("Category", &self.category)?,
            level: required("Level", &self.level)?,
            duration_hours: parse_whole("Duration", &self.duration_hours, 1, 1000)?,
            price,
            learning_objectives: parse_list(&self.learning_objectives),
            prerequisites: parse_list(&self.prerequisites),
            skills_gained: parse_list(&self.skills_gained),
            certificate_type,
        })
    }
}

#[component]
pub fn EducationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let courses = RwSignal::new(Listing::<Course>::default());
    let filter = RwSignal::new(ListFilter::default());

    Effect::new(move || {
        load_listing(session, courses, |token| async move { api::fetch_courses(&token, "").await });
    });

    let visible = move || filter.with(|f| courses.with(|l| l.visible(f)));

    let enroll = move |course_id: String| {
        let id = course_id.clone();
        run_item_action(
            session,
            courses,
            &course_id,
            |c| {
                c.is_enrolled = true;
                c.enrollment_count += 1;
            },
            move |token| async move { api::enroll_in_course(&token, &id).await },
            |_| {},
        );
    };

    view! {
        <div class="education">
            <section class="banner banner--education">
                <h1>"EduNations"</h1>
                <p>
                    "Unlock your potential with world-class education. Learn new skills, earn certifications, and build your career with courses designed for African youth."
                </p>
                <div class="banner__actions">
                    <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::CreateCourse))>
                        "Teach a Course"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::MyCourses))>
                        "My Learning"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| ui.update(|u| u.set_view(View::Mentorship))>
                        "Find Mentor"
                    </button>
                </div>
            </section>
            <FilterBar filter=filter categories=COURSE_CATEGORIES placeholder="Search courses"/>
            <ListStatus
                loading=Signal::derive(move || courses.with(Listing::loading))
                error=Signal::derive(move || courses.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || visible().is_empty())
                empty_message="No courses match your search yet."
            />
            <div class="card-grid">
                <For each=visible key=|c| (c.course_id.clone(), c.is_enrolled) let:course>
                    {
                        let id = course.course_id.clone();
                        let pending_id = id.clone();
                        let pending = Signal::derive(move || courses.with(|l| l.is_pending(&pending_id)));
                        let enrolled = course.is_enrolled;
                        view! {
                            <article class="card course-card">
                                <h3>{course.title.clone()}</h3>
                                <p class="card__meta">
                                    {format!(
                                        "{} • by {} • {}",
                                        label_for(COURSE_CATEGORIES, &course.category),
                                        course.instructor_name,
                                        price_label(&course),
                                    )}
                                </p>
                                <p>{course.description.clone()}</p>
                                <p class="card__meta">{course_meta(&course)}</p>
                                <p class="card__tags">{join_list(&course.skills_gained)}</p>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || enrolled || pending.get()
                                    on:click=move |_| enroll(id.clone())
                                >
                                    {move || {
                                        if enrolled {
                                            "Enrolled"
                                        } else if pending.get() {
                                            "Enrolling..."
                                        } else {
                                            "Enroll"
                                        }
                                    }}
                                </button>
                            </article>
                        }
                    }
                </For>
            </div>
        </div>
    }
}

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let courses = RwSignal::new(Listing::<Course>::default());

    Effect::new(move || {
        load_listing(session, courses, |token| async move { api::fetch_my_courses(&token).await });
    });

    view! {
        <div class="panel">
            <h2>"My Learning"</h2>
            <ListStatus
                loading=Signal::derive(move || courses.with(Listing::loading))
                error=Signal::derive(move || courses.with(|l| l.error().map(str::to_owned)))
                is_empty=Signal::derive(move || courses.with(|l| l.items().is_empty()))
                empty_message="Enroll in courses to start your learning journey."
            />
            <For each=move || courses.with(|l| l.items().to_vec()) key=|c| c.course_id.clone() let:course>
                <article class="card">
                    <h3>{course.title.clone()}</h3>
                    <p class="card__meta">{course_meta(&course)}</p>
                    <p>{course.description.clone()}</p>
                </article>
            </For>
            <button class="btn" on:click=move |_| ui.update(|u| u.set_view(View::Education))>
                "Browse Courses"
            </button>
        </div>
    }
}

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let level = RwSignal::new("beginner".to_owned());
    let duration_hours = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let learning_objectives = RwSignal::new(String::new());
    let prerequisites = RwSignal::new(String::new());
    let skills_gained = RwSignal::new(String::new());
    let certificate_type = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = CourseForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            level: level.get_untracked(),
            duration_hours: duration_hours.get_untracked(),
            price: price.get_untracked(),
            learning_objectives: learning_objectives.get_untracked(),
            prerequisites: prerequisites.get_untracked(),
            skills_gained: skills_gained.get_untracked(),
            certificate_type: certificate_type.get_untracked(),
        };
        let course = match form.validate() {
            Ok(course) => course,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        submit(
            session,
            move |token| async move { api::create_course(&token, &course).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(_) => ui.update(|u| u.set_view(View::Education)),
                    Err(e) => message.set(Some(Err(e.to_string()))),
                }
            },
        );
    };

    view! {
        <div class="panel">
            <h2>"Create Course"</h2>
            <form class="form" on:submit=on_create>
                <TextField label="Course Title" value=title/>
                <TextArea label="Description" value=description/>
                <SelectField label="Category" value=category options=choices(COURSE_CATEGORIES) blank="Select category"/>
                <SelectField label="Level" value=level options=COURSE_LEVELS/>
                <TextField label="Duration (hours)" value=duration_hours kind="number"/>
                <TextField label="Price (USD)" value=price kind="number" placeholder="0 for free"/>
                <TextArea label="Learning Objectives" value=learning_objectives placeholder="One per line"/>
                <TextArea label="Prerequisites" value=prerequisites placeholder="One per line"/>
                <TextField label="Skills Gained" value=skills_gained placeholder="Comma separated"/>
                <TextField label="Certificate" value=certificate_type placeholder="completion"/>
                <FormMessage message=message/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Course" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn MentorshipPage() -> impl IntoView {
    view! {
        <ComingSoon
            title="Mentorship"
            icon="🎯"
            blurb="Connect with mentors and accelerate your growth."
        />
    }
}
