use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::api::{decode, ApiClient, ApiError};
use crate::models::{Category, RequestStatus, SkillListing, SkillRequest};
use crate::skills::dto::{
    CreateRequestBody, CreateSkillRequest, SkillQuery, UpdateRequestStatusBody, UpdateSkillRequest,
};

/// Translates listing and swap-request intents into API calls.
#[derive(Clone)]
pub struct SkillsService {
    api: Arc<dyn ApiClient>,
}

impl SkillsService {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, query))]
    pub async fn get_all_skills(&self, query: &SkillQuery) -> Result<Vec<SkillListing>, ApiError> {
        decode(self.api.get("/skills", &query.to_query()).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_skill(&self, id: Uuid) -> Result<SkillListing, ApiError> {
        decode(self.api.get(&format!("/skills/{}", id), &[]).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_user_skills(&self, user_id: Uuid) -> Result<Vec<SkillListing>, ApiError> {
        decode(
            self.api
                .get(&format!("/users/{}/skills", user_id), &[])
                .await?,
        )
    }

    #[instrument(skip(self, payload))]
    pub async fn create_skill(&self, payload: &CreateSkillRequest) -> Result<SkillListing, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        decode(self.api.post("/skills", body).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_skill(
        &self,
        id: Uuid,
        payload: &UpdateSkillRequest,
    ) -> Result<SkillListing, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Decode)?;
        decode(self.api.put(&format!("/skills/{}", id), body).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_skill(&self, id: Uuid) -> Result<(), ApiError> {
        self.api.delete(&format!("/skills/{}", id)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        decode(self.api.get("/categories", &[]).await?)
    }

    /// Server-side search; browse-page filtering stays client-side over the
    /// already-loaded collection.
    #[instrument(skip(self, query))]
    pub async fn search_skills(&self, query: &SkillQuery) -> Result<Vec<SkillListing>, ApiError> {
        decode(self.api.get("/skills/search", &query.to_query()).await?)
    }

    #[instrument(skip(self))]
    pub async fn create_request(&self, listing_id: Uuid) -> Result<SkillRequest, ApiError> {
        let body = serde_json::to_value(CreateRequestBody { listing_id }).map_err(|_| ApiError::Decode)?;
        decode(self.api.post("/requests", body).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_user_requests(&self) -> Result<Vec<SkillRequest>, ApiError> {
        decode(self.api.get("/requests/me", &[]).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_request_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> Result<SkillRequest, ApiError> {
        let body =
            serde_json::to_value(UpdateRequestStatusBody { status }).map_err(|_| ApiError::Decode)?;
        decode(self.api.put(&format!("/requests/{}/status", id), body).await?)
    }
}
