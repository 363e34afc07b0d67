use std::sync::Arc;
use tracing::instrument;

use crate::api::{decode, ApiClient, ApiError};
use crate::auth::dto::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UpdateProfileRequest,
};
use crate::models::User;

/// Translates authentication intents into API calls. All failures are already
/// normalized by the client; nothing transport-shaped escapes.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, payload))]
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        decode(self.api.post("/auth/register", body).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        decode(self.api.post("/auth/login", body).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        decode(self.api.get("/users/me", &[]).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<User, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        decode(self.api.put("/users/me", body).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        self.api.put("/users/change-password", body).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let payload = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        self.api.post("/auth/forgot-password", body).await?;
        Ok(())
    }

    #[instrument(skip(self, payload))]
    pub async fn reset_password(&self, payload: &ResetPasswordRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        self.api.post("/auth/reset-password", body).await?;
        Ok(())
    }
}
