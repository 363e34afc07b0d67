use crate::auth::{ChangePasswordRequest, UpdateProfileRequest};
use crate::forms::ProfileForm;
use crate::models::RequestStatus;
use crate::pages::Navigation;
use crate::state::AppState;
use crate::validation::{validate_password_strength, FormValidation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Skills,
    Swaps,
    Settings,
}

/// Profile-page container: tab state, the signed-in user's listings and swap
/// requests, and the profile/password update flows.
#[derive(Debug, Clone, Default)]
pub struct ProfilePage {
    active_tab: ProfileTab,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ProfileTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    /// Fetches the user's listings and swap requests. Visitors get sent to
    /// the login page and come back here afterwards.
    pub async fn load(&self, app: &mut AppState) -> Navigation {
        let Some(user_id) = app.session.user().map(|u| u.id) else {
            return Navigation::login_redirect("/profile");
        };

        app.skills.fetch_user_skills_start();
        match app.skills_service.get_user_skills(user_id).await {
            Ok(listings) => app.skills.fetch_user_skills_success(listings),
            Err(e) => app.skills.fetch_user_skills_failure(e.message()),
        }

        app.skills.fetch_requests_start();
        match app.skills_service.get_user_requests().await {
            Ok(requests) => app.skills.fetch_requests_success(requests),
            Err(e) => app.skills.fetch_requests_failure(e.message()),
        }

        Navigation::Stay
    }

    pub fn skills_count(&self, app: &AppState) -> usize {
        app.skills.user_skills().data().len()
    }

    /// Completed swaps only; pending and declined requests don't count.
    pub fn swaps_count(&self, app: &AppState) -> usize {
        app.skills
            .requests()
            .data()
            .iter()
            .filter(|request| request.status == RequestStatus::Accepted)
            .count()
    }

    /// Validates and submits a profile edit. Service failures land in the
    /// session error field like any other auth-domain failure.
    pub async fn update_profile(
        &self,
        app: &mut AppState,
        form: &ProfileForm,
    ) -> Result<(), FormValidation> {
        let result = form.validate();
        if !result.is_valid {
            return Err(result);
        }

        let payload = UpdateProfileRequest {
            name: Some(form.name.trim().to_string()),
            bio: Some(form.bio.clone()),
            location: Some(form.location.clone()),
            avatar_url: if form.avatar_url.trim().is_empty() {
                None
            } else {
                Some(form.avatar_url.trim().to_string())
            },
        };

        app.session.update_profile_start();
        match app.auth_service.update_profile(&payload).await {
            Ok(user) => app.session.update_profile_success(user),
            Err(e) => app.session.update_profile_failure(e.message()),
        }
        Ok(())
    }

    /// Settings-tab password change. The new password has to clear the same
    /// strength bar as registration.
    pub async fn change_password(
        &self,
        app: &mut AppState,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), String> {
        validate_password_strength(new_password)?;

        let payload = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        app.session.update_profile_start();
        match app.auth_service.change_password(&payload).await {
            Ok(()) => {
                if let Some(user) = app.session.user().cloned() {
                    app.session.update_profile_success(user);
                }
                Ok(())
            }
            Err(e) => {
                let message = e.message();
                app.session.update_profile_failure(message.clone());
                Err(message)
            }
        }
    }
}
