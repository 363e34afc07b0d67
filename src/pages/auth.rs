use tracing::warn;

use crate::auth::{LoginRequest, RegisterRequest};
use crate::forms::{LoginForm, RegisterForm};
use crate::pages::Navigation;
use crate::state::AppState;
use crate::validation::FormValidation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Outcome of a login or registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Field errors; nothing was submitted.
    Invalid(FormValidation),
    /// Authenticated; go to the redirect target.
    Navigate(Navigation),
    /// Submitted but rejected; the message is in the session error field.
    Failed,
}

/// Login/registration container. Carries the `redirect` query parameter so a
/// visitor bounced off a protected page lands back where they started.
#[derive(Debug, Clone, Default)]
pub struct AuthPage {
    mode: AuthMode,
    redirect: Option<String>,
}

impl AuthPage {
    pub fn new(redirect: Option<String>) -> Self {
        Self {
            mode: AuthMode::Login,
            redirect,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    fn destination(&self) -> Navigation {
        Navigation::To(
            self.redirect
                .clone()
                .unwrap_or_else(|| "/profile".to_string()),
        )
    }

    pub async fn login(&self, app: &mut AppState, form: &LoginForm) -> AuthOutcome {
        let result = form.validate();
        if !result.is_valid {
            return AuthOutcome::Invalid(result);
        }

        app.session.login_start();
        let payload = LoginRequest {
            email: form.email.trim().to_lowercase(),
            password: form.password.clone(),
        };
        match app.auth_service.login(&payload).await {
            Ok(response) => {
                if let Err(e) = app.session.login_success(response.user, response.token) {
                    warn!(error = %e, "failed to persist session token");
                    app.session.login_failure("Could not save your session".into());
                    return AuthOutcome::Failed;
                }
                AuthOutcome::Navigate(self.destination())
            }
            Err(e) => {
                app.session.login_failure(e.message());
                AuthOutcome::Failed
            }
        }
    }

    pub async fn register(&self, app: &mut AppState, form: &RegisterForm) -> AuthOutcome {
        let result = form.validate();
        if !result.is_valid {
            return AuthOutcome::Invalid(result);
        }

        app.session.register_start();
        let payload = RegisterRequest {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            password: form.password.clone(),
            bio: form.bio(),
            location: form.location(),
        };
        match app.auth_service.register(&payload).await {
            Ok(response) => {
                if let Err(e) = app.session.register_success(response.user, response.token) {
                    warn!(error = %e, "failed to persist session token");
                    app.session
                        .register_failure("Could not save your session".into());
                    return AuthOutcome::Failed;
                }
                AuthOutcome::Navigate(self.destination())
            }
            Err(e) => {
                app.session.register_failure(e.message());
                AuthOutcome::Failed
            }
        }
    }

    /// Logout is available from any page; it tears the session down and goes
    /// home.
    pub fn logout(app: &mut AppState) -> anyhow::Result<Navigation> {
        app.session.logout()?;
        Ok(Navigation::To("/".into()))
    }
}
