//! Sign-in / sign-up screen rendered whenever no session is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits `POST /api/login` or `POST /api/register` and hands the issued
//! token to `util::session::complete_auth`, which loads the profile and
//! flips the root view to the signed-in shell.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::field::{FormMessage, SelectField, TextField};
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::pages::form::{parse_whole, required};
use crate::pages::options::COUNTRIES;
use crate::state::session::SessionState;

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 35;

/// Which of the two auth forms is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub country: String,
    pub age: String,
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthForm {
    /// Validate the fields `mode` needs.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self, mode: AuthMode) -> Result<AuthRequest, String> {
        let email = required("Email", &self.email)?;
        if !email.contains('@') {
            return Err("Enter a valid email address.".to_owned());
        }
        if self.password.is_empty() {
            return Err("Password is required.".to_owned());
        }
        match mode {
            AuthMode::Login => Ok(AuthRequest::Login(LoginRequest { email, password: self.password.clone() })),
            AuthMode::Register => {
                let full_name = required("Full name", &self.full_name)?;
                let country = required("Country", &self.country)?;
                let age = parse_whole("Age", &self.age, MIN_AGE, MAX_AGE)?;
                Ok(AuthRequest::Register(RegisterRequest {
                    email,
                    password: self.password.clone(),
                    full_name,
                    country,
                    age,
                }))
            }
        }
    }
}

/// Message shown when login/register fails.
pub fn auth_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Server { .. } => err.to_string(),
        ApiError::Decode(_) | ApiError::Unavailable => "Authentication failed".to_owned(),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<Result<String, String>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = AuthForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            full_name: full_name.get_untracked(),
            country: country.get_untracked(),
            age: age.get_untracked(),
        };
        let request = match form.validate(mode.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                message.set(Some(Err(msg)));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &request {
                AuthRequest::Login(req) => crate::net::api::login(req).await,
                AuthRequest::Register(req) => crate::net::api::register(req).await,
            };
            match result {
                Ok(issued) => crate::util::session::complete_auth(session, issued.access_token),
                Err(e) => {
                    leptos::logging::warn!("auth failed: {e:?}");
                    message.set(Some(Err(auth_failure_message(&e))));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session);
    };

    let is_register = move || mode.get() == AuthMode::Register;

    view! {
        <div class="auth-page">
            <section class="auth-page__hero">
                <h1>"Welcome to AfriCore"</h1>
                <p>"Pan-African Youth Development & Innovation Network"</p>
                <p class="auth-page__tagline">"Connect • Collaborate • Create"</p>
            </section>
            <section class="auth-card">
                <h2>{move || if is_register() { "Join AfriCore" } else { "Welcome Back!" }}</h2>
                <p class="auth-card__subtitle">
                    {move || {
                        if is_register() {
                            "Create your profile and connect with African youth"
                        } else {
                            "Sign in to your account"
                        }
                    }}
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="Email" value=email kind="email" placeholder="your@email.com"/>
                    <TextField label="Password" value=password kind="password"/>
                    <Show when=is_register>
                        <TextField label="Full Name" value=full_name placeholder="John Doe"/>
                        <SelectField label="Country" value=country options=COUNTRIES blank="Select your country"/>
                        <TextField label="Age" value=age kind="number" placeholder="25"/>
                    </Show>
                    <FormMessage message=message/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Please wait..."
                            } else if is_register() {
                                "Create Account"
                            } else {
                                "Sign In"
                            }
                        }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {move || if is_register() { "Already have an account? " } else { "Don't have an account? " }}
                    <button
                        class="btn btn--link"
                        on:click=move |_| {
                            mode.update(|m| *m = m.toggled());
                            message.set(None);
                        }
                    >
                        {move || if is_register() { "Sign In" } else { "Sign Up" }}
                    </button>
                </p>
            </section>
        </div>
    }
}
