use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Category, ExperienceLevel, RequestStatus};

/// Body for creating a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkillRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub image_url: Option<String>,
}

/// Full replacement body for updating a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSkillRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub image_url: Option<String>,
}

/// Query parameters for listing fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillQuery {
    pub search: Option<String>,
    pub category: Option<Category>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

impl Default for SkillQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl SkillQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            query.push(("category", category.label().to_lowercase()));
        }
        query.push(("limit", self.limit.to_string()));
        query.push(("offset", self.offset.to_string()));
        query
    }
}

/// Body for creating a swap request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestBody {
    pub listing_id: Uuid,
}

/// Body for updating a swap request's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequestStatusBody {
    pub status: RequestStatus,
}
