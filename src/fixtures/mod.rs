//! In-memory stand-in for the marketplace backend. Serves the same paths the
//! production client hits, against seeded sample data, so services and pages
//! round-trip without a network.

mod data;

pub use data::{demo_user, seed_listings, DEMO_EMAIL, DEMO_PASSWORD};

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::auth::{RegisterRequest, UpdateProfileRequest};
use crate::models::{Category, ListingOwner, RequestStatus, SkillListing, SkillRequest, User};
use crate::skills::{CreateSkillRequest, UpdateSkillRequest};
use crate::storage::{TokenStore, TOKEN_KEY};
use crate::validation::is_valid_email;

const MAX_BIO_LENGTH: usize = 500;

struct MockDb {
    users: Vec<User>,
    credentials: HashMap<String, String>,
    sessions: HashMap<String, Uuid>,
    reset_tokens: HashMap<String, Uuid>,
    listings: Vec<SkillListing>,
    requests: Vec<SkillRequest>,
}

/// Mock backend implementing [`ApiClient`]. Reads the bearer token from the
/// same store the production client does.
pub struct MockApi {
    db: Mutex<MockDb>,
    tokens: Arc<dyn TokenStore>,
}

fn bad_request(message: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        message: message.to_string(),
    }
}

fn unauthorized(message: &str) -> ApiError {
    ApiError::Status {
        status: 401,
        message: message.to_string(),
    }
}

fn forbidden(message: &str) -> ApiError {
    ApiError::Status {
        status: 403,
        message: message.to_string(),
    }
}

fn conflict(message: &str) -> ApiError {
    ApiError::Status {
        status: 409,
        message: message.to_string(),
    }
}

fn internal() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "Internal error".to_string(),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|_| internal())
}

fn parse_body<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| bad_request("Missing request body"))?;
    serde_json::from_value(body).map_err(|_| bad_request("Invalid request body"))
}

fn parse_id(segment: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(segment).map_err(|_| bad_request("Invalid identifier"))
}

fn mint_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

impl MockApi {
    /// Empty backend; register through the API to populate it.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            db: Mutex::new(MockDb {
                users: Vec::new(),
                credentials: HashMap::new(),
                sessions: HashMap::new(),
                reset_tokens: HashMap::new(),
                listings: Vec::new(),
                requests: Vec::new(),
            }),
            tokens,
        }
    }

    /// Backend pre-populated with the demo account and sample listings.
    pub fn seeded(tokens: Arc<dyn TokenStore>) -> Self {
        let api = Self::new(tokens);
        {
            let mut db = api.db.lock().expect("fresh mutex");
            db.users.push(data::demo_user());
            db.credentials = data::seed_credentials();
            db.listings = data::seed_listings();
        }
        api
    }

    /// Test hook: the reset token most recently issued for an email.
    pub fn reset_token_for(&self, email: &str) -> Option<String> {
        let db = self.db.lock().ok()?;
        let user_id = db.users.iter().find(|u| u.email == email)?.id;
        db.reset_tokens
            .iter()
            .find(|(_, id)| **id == user_id)
            .map(|(token, _)| token.clone())
    }

    fn authenticated_user(&self, db: &MockDb) -> Result<User, ApiError> {
        let token = self
            .tokens
            .get(TOKEN_KEY)
            .ok()
            .flatten()
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;
        let user_id = db
            .sessions
            .get(&token)
            .copied()
            .ok_or_else(|| unauthorized("Invalid or expired token"))?;
        db.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| unauthorized("Invalid or expired token"))
    }

    fn register(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        let mut payload: RegisterRequest = parse_body(body)?;
        payload.email = payload.email.trim().to_lowercase();

        if !is_valid_email(&payload.email) {
            return Err(bad_request("Invalid email"));
        }
        if payload.password.len() < 8 {
            return Err(bad_request("Password too short"));
        }
        if payload.name.trim().is_empty() {
            return Err(bad_request("Name is required"));
        }
        if let Some(bio) = &payload.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(bad_request("Bio must be less than 500 characters"));
            }
        }
        if db.users.iter().any(|u| u.email == payload.email) {
            return Err(conflict("Email already registered"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            email: payload.email.clone(),
            bio: payload.bio,
            location: payload.location,
            avatar_url: None,
            created_at: OffsetDateTime::now_utc(),
        };
        db.credentials.insert(payload.email, payload.password);
        db.users.push(user.clone());

        let token = mint_token();
        db.sessions.insert(token.clone(), user.id);
        debug!(user_id = %user.id, "mock user registered");
        to_json(&serde_json::json!({ "token": token, "user": user }))
    }

    fn login(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Credentials {
            email: String,
            password: String,
        }
        let payload: Credentials = parse_body(body)?;
        let email = payload.email.trim().to_lowercase();

        if !is_valid_email(&email) {
            return Err(bad_request("Invalid email"));
        }
        let user = db
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| unauthorized("Invalid credentials"))?;
        let stored = db
            .credentials
            .get(&email)
            .ok_or_else(|| unauthorized("Invalid credentials"))?;
        if *stored != payload.password {
            return Err(unauthorized("Invalid credentials"));
        }

        let token = mint_token();
        db.sessions.insert(token.clone(), user.id);
        debug!(user_id = %user.id, "mock user logged in");
        to_json(&serde_json::json!({ "token": token, "user": user }))
    }

    fn forgot_password(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            email: String,
        }
        let payload: Payload = parse_body(body)?;
        let email = payload.email.trim().to_lowercase();
        // Do not reveal whether the address exists.
        if let Some(user) = db.users.iter().find(|u| u.email == email) {
            let token = mint_token();
            debug!(user_id = %user.id, "mock reset token issued");
            let user_id = user.id;
            db.reset_tokens.insert(token, user_id);
        }
        Ok(Value::Null)
    }

    fn reset_password(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            token: String,
            new_password: String,
        }
        let payload: Payload = parse_body(body)?;
        if payload.new_password.len() < 8 {
            return Err(bad_request("Password too short"));
        }
        let user_id = db
            .reset_tokens
            .remove(&payload.token)
            .ok_or_else(|| bad_request("Invalid or expired reset token"))?;
        let email = db
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.email.clone())
            .ok_or_else(|| bad_request("Invalid or expired reset token"))?;
        db.credentials.insert(email, payload.new_password);
        Ok(Value::Null)
    }

    fn get_me(&self, db: &MockDb) -> Result<Value, ApiError> {
        to_json(&self.authenticated_user(db)?)
    }

    fn update_me(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        let current = self.authenticated_user(db)?;
        let payload: UpdateProfileRequest = parse_body(body)?;

        if let Some(bio) = &payload.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(bad_request("Bio must be less than 500 characters"));
            }
        }
        let user = db
            .users
            .iter_mut()
            .find(|u| u.id == current.id)
            .ok_or_else(|| ApiError::not_found("User not found"))?;
        if let Some(name) = payload.name {
            user.name = name;
        }
        if let Some(bio) = payload.bio {
            user.bio = Some(bio);
        }
        if let Some(location) = payload.location {
            user.location = Some(location);
        }
        if let Some(avatar_url) = payload.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        to_json(&user.clone())
    }

    fn change_password(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            current_password: String,
            new_password: String,
        }
        let user = self.authenticated_user(db)?;
        let payload: Payload = parse_body(body)?;

        let stored = db
            .credentials
            .get(&user.email)
            .ok_or_else(|| unauthorized("Invalid credentials"))?;
        if *stored != payload.current_password {
            return Err(bad_request("Current password is incorrect"));
        }
        if payload.new_password.len() < 8 {
            return Err(bad_request("Password too short"));
        }
        db.credentials.insert(user.email, payload.new_password);
        Ok(Value::Null)
    }

    fn list_skills(&self, db: &MockDb, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let lookup = |key: &str| {
            query
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        let search = lookup("search").unwrap_or("").trim().to_lowercase();
        let category = lookup("category").map(Category::parse);
        let limit = lookup("limit").and_then(|v| v.parse::<usize>().ok()).unwrap_or(20);
        let offset = lookup("offset").and_then(|v| v.parse::<usize>().ok()).unwrap_or(0);

        let matches: Vec<&SkillListing> = db
            .listings
            .iter()
            .filter(|listing| {
                let matches_search = search.is_empty()
                    || listing.title.to_lowercase().contains(&search)
                    || listing.description.to_lowercase().contains(&search);
                let matches_category = category.map_or(true, |c| c == listing.category);
                matches_search && matches_category
            })
            .skip(offset)
            .take(limit)
            .collect();
        to_json(&matches)
    }

    fn get_skill(&self, db: &MockDb, id: Uuid) -> Result<Value, ApiError> {
        let listing = db
            .listings
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| ApiError::not_found("Skill not found"))?;
        to_json(listing)
    }

    fn user_skills(&self, db: &MockDb, user_id: Uuid) -> Result<Value, ApiError> {
        let listings: Vec<&SkillListing> = db
            .listings
            .iter()
            .filter(|l| l.owner.id == user_id)
            .collect();
        to_json(&listings)
    }

    fn create_skill(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        let user = self.authenticated_user(db)?;
        let payload: CreateSkillRequest = parse_body(body)?;
        if payload.title.trim().is_empty() {
            return Err(bad_request("Title is required"));
        }

        let listing = SkillListing {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            category: payload.category,
            experience_level: payload.experience_level,
            location: payload.location,
            owner: ListingOwner {
                id: user.id,
                name: user.name,
                avatar_url: user.avatar_url,
            },
            image_url: payload.image_url,
            created_at: OffsetDateTime::now_utc(),
        };
        db.listings.push(listing.clone());
        debug!(listing_id = %listing.id, "mock listing created");
        to_json(&listing)
    }

    fn update_skill(&self, db: &mut MockDb, id: Uuid, body: Option<Value>) -> Result<Value, ApiError> {
        let user = self.authenticated_user(db)?;
        let payload: UpdateSkillRequest = parse_body(body)?;

        // Scoped to the owner, like every write in this backend: someone
        // else's listing looks like it does not exist.
        let listing = db
            .listings
            .iter_mut()
            .find(|l| l.id == id && l.owner.id == user.id)
            .ok_or_else(|| ApiError::not_found("Skill not found"))?;
        listing.title = payload.title;
        listing.description = payload.description;
        listing.category = payload.category;
        listing.experience_level = payload.experience_level;
        listing.location = payload.location;
        listing.image_url = payload.image_url;
        to_json(&listing.clone())
    }

    fn delete_skill(&self, db: &mut MockDb, id: Uuid) -> Result<Value, ApiError> {
        let user = self.authenticated_user(db)?;
        let before = db.listings.len();
        db.listings.retain(|l| !(l.id == id && l.owner.id == user.id));
        if db.listings.len() == before {
            return Err(ApiError::not_found("Skill not found"));
        }
        db.requests.retain(|r| r.listing_id != id);
        Ok(Value::Null)
    }

    fn categories(&self) -> Result<Value, ApiError> {
        to_json(&Category::ALL.to_vec())
    }

    fn create_request(&self, db: &mut MockDb, body: Option<Value>) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            listing_id: Uuid,
        }
        let user = self.authenticated_user(db)?;
        let payload: Payload = parse_body(body)?;

        let listing = db
            .listings
            .iter()
            .find(|l| l.id == payload.listing_id)
            .ok_or_else(|| ApiError::not_found("Skill not found"))?;
        if listing.owner.id == user.id {
            return Err(bad_request("You cannot request your own listing"));
        }

        let request = SkillRequest {
            id: Uuid::new_v4(),
            listing_id: listing.id,
            requester_id: user.id,
            status: RequestStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        };
        db.requests.push(request.clone());
        debug!(request_id = %request.id, "mock swap request created");
        to_json(&request)
    }

    fn my_requests(&self, db: &MockDb) -> Result<Value, ApiError> {
        let user = self.authenticated_user(db)?;
        let owned: Vec<Uuid> = db
            .listings
            .iter()
            .filter(|l| l.owner.id == user.id)
            .map(|l| l.id)
            .collect();
        // Both directions: requests the user sent and requests against the
        // user's own listings.
        let requests: Vec<&SkillRequest> = db
            .requests
            .iter()
            .filter(|r| r.requester_id == user.id || owned.contains(&r.listing_id))
            .collect();
        to_json(&requests)
    }

    fn update_request_status(
        &self,
        db: &mut MockDb,
        id: Uuid,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            status: RequestStatus,
        }
        let user = self.authenticated_user(db)?;
        let payload: Payload = parse_body(body)?;

        let listing_id = db
            .requests
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.listing_id)
            .ok_or_else(|| ApiError::not_found("Request not found"))?;
        let owns_listing = db
            .listings
            .iter()
            .any(|l| l.id == listing_id && l.owner.id == user.id);
        if !owns_listing {
            return Err(forbidden("Only the listing owner can respond to a request"));
        }

        let request = db
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::not_found("Request not found"))?;
        request.status = payload.status;
        to_json(&request.clone())
    }

    fn handle(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let trimmed = path.trim_start_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        let mut db = self.db.lock().map_err(|_| internal())?;

        match (method, segments.as_slice()) {
            ("POST", ["auth", "register"]) => self.register(&mut db, body),
            ("POST", ["auth", "login"]) => self.login(&mut db, body),
            ("POST", ["auth", "forgot-password"]) => self.forgot_password(&mut db, body),
            ("POST", ["auth", "reset-password"]) => self.reset_password(&mut db, body),
            ("GET", ["users", "me"]) => self.get_me(&db),
            ("PUT", ["users", "me"]) => self.update_me(&mut db, body),
            ("PUT", ["users", "change-password"]) => self.change_password(&mut db, body),
            ("GET", ["users", id, "skills"]) => {
                let id = parse_id(id)?;
                self.user_skills(&db, id)
            }
            ("GET", ["skills"]) | ("GET", ["skills", "search"]) => self.list_skills(&db, query),
            ("GET", ["skills", id]) => {
                let id = parse_id(id)?;
                self.get_skill(&db, id)
            }
            ("POST", ["skills"]) => self.create_skill(&mut db, body),
            ("PUT", ["skills", id]) => {
                let id = parse_id(id)?;
                self.update_skill(&mut db, id, body)
            }
            ("DELETE", ["skills", id]) => {
                let id = parse_id(id)?;
                self.delete_skill(&mut db, id)
            }
            ("GET", ["categories"]) => self.categories(),
            ("POST", ["requests"]) => self.create_request(&mut db, body),
            ("GET", ["requests", "me"]) => self.my_requests(&db),
            ("PUT", ["requests", id, "status"]) => {
                let id = parse_id(id)?;
                self.update_request_status(&mut db, id, body)
            }
            _ => Err(ApiError::not_found("Not found")),
        }
    }
}

#[async_trait]
impl ApiClient for MockApi {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.handle("GET", path, query, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.handle("POST", path, &[], Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.handle("PUT", path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.handle("DELETE", path, &[], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthService, LoginRequest};
    use crate::models::ExperienceLevel;
    use crate::skills::SkillsService;
    use crate::storage::MemoryTokenStore;

    fn demo_login() -> LoginRequest {
        LoginRequest {
            email: DEMO_EMAIL.into(),
            password: DEMO_PASSWORD.into(),
        }
    }

    fn register_request(name: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: "Abcdef1!".into(),
            bio: None,
            location: None,
        }
    }

    fn fake_stack() -> (Arc<MemoryTokenStore>, Arc<MockApi>, AuthService, SkillsService) {
        let store = Arc::new(MemoryTokenStore::new());
        let api = Arc::new(MockApi::seeded(store.clone()));
        let auth = AuthService::new(api.clone());
        let skills = SkillsService::new(api.clone());
        (store, api, auth, skills)
    }

    #[tokio::test]
    async fn login_round_trips_the_demo_account() {
        let (store, _api, auth, _skills) = fake_stack();
        let response = auth.login(&demo_login()).await.expect("login");
        assert_eq!(response.user.email, DEMO_EMAIL);

        store.set(TOKEN_KEY, &response.token).unwrap();
        let profile = auth.get_profile().await.expect("profile");
        assert_eq!(profile.id, response.user.id);
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let (_store, _api, auth, _skills) = fake_stack();
        let err = auth
            .login(&LoginRequest {
                email: DEMO_EMAIL.into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (_store, _api, auth, _skills) = fake_stack();
        let err = auth
            .register(&register_request("Second Jane", DEMO_EMAIL))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Email already registered");
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let (_store, _api, auth, _skills) = fake_stack();
        let mut payload = register_request("Shorty", "short@example.com");
        payload.password = "Ab1!".into();
        let err = auth.register(&payload).await.unwrap_err();
        assert_eq!(err.message(), "Password too short");
    }

    #[tokio::test]
    async fn listing_crud_round_trips() {
        let (store, _api, auth, skills) = fake_stack();
        let session = auth.login(&demo_login()).await.expect("login");
        store.set(TOKEN_KEY, &session.token).unwrap();

        let created = skills
            .create_skill(&CreateSkillRequest {
                title: "Rust Mentoring".into(),
                description: "Ownership, borrowing, and async from first principles.".into(),
                category: Category::Technology,
                experience_level: ExperienceLevel::Advanced,
                location: "Remote".into(),
                image_url: None,
            })
            .await
            .expect("create");
        assert_eq!(created.owner.id, session.user.id);

        let updated = skills
            .update_skill(
                created.id,
                &UpdateSkillRequest {
                    title: "Rust Mentoring".into(),
                    description: "Now covering embedded targets too.".into(),
                    category: Category::Technology,
                    experience_level: ExperienceLevel::Advanced,
                    location: "Remote".into(),
                    image_url: None,
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.description, "Now covering embedded targets too.");

        let fetched = skills.get_skill(created.id).await.expect("get");
        assert_eq!(fetched, updated);

        skills.delete_skill(created.id).await.expect("delete");
        let err = skills.get_skill(created.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn listing_search_and_category_filter() {
        let (_store, _api, _auth, skills) = fake_stack();

        let yoga = skills
            .get_all_skills(&crate::skills::SkillQuery {
                search: Some("yoga".into()),
                ..Default::default()
            })
            .await
            .expect("search");
        assert_eq!(yoga.len(), 1);
        assert_eq!(yoga[0].title, "Yoga Instruction");

        let tech = skills
            .get_all_skills(&crate::skills::SkillQuery {
                category: Some(Category::Technology),
                ..Default::default()
            })
            .await
            .expect("filter");
        assert_eq!(tech.len(), 2);

        let page = skills
            .get_all_skills(&crate::skills::SkillQuery {
                limit: 2,
                offset: 2,
                ..Default::default()
            })
            .await
            .expect("page");
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn swap_request_flow_with_owner_response() {
        let (store, _api, auth, skills) = fake_stack();

        // Owner lists a skill.
        let owner = auth
            .register(&register_request("Owner", "owner@example.com"))
            .await
            .expect("register owner");
        store.set(TOKEN_KEY, &owner.token).unwrap();
        let listing = skills
            .create_skill(&CreateSkillRequest {
                title: "Bread Baking".into(),
                description: "Sourdough starters and shaping.".into(),
                category: Category::Lifestyle,
                experience_level: ExperienceLevel::Beginner,
                location: "Remote".into(),
                image_url: None,
            })
            .await
            .expect("create listing");

        // Requester asks for a swap.
        let requester = auth
            .register(&register_request("Requester", "requester@example.com"))
            .await
            .expect("register requester");
        store.set(TOKEN_KEY, &requester.token).unwrap();
        let request = skills.create_request(listing.id).await.expect("request");
        assert_eq!(request.status, RequestStatus::Pending);

        // Requester cannot respond to their own outgoing request.
        let err = skills
            .update_request_status(request.id, RequestStatus::Accepted)
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Only the listing owner can respond to a request"
        );

        // Owner accepts; both sides see the request.
        store.set(TOKEN_KEY, &owner.token).unwrap();
        let accepted = skills
            .update_request_status(request.id, RequestStatus::Accepted)
            .await
            .expect("accept");
        assert_eq!(accepted.status, RequestStatus::Accepted);

        let owner_view = skills.get_user_requests().await.expect("owner requests");
        assert_eq!(owner_view.len(), 1);
        store.set(TOKEN_KEY, &requester.token).unwrap();
        let requester_view = skills.get_user_requests().await.expect("requester requests");
        assert_eq!(requester_view.len(), 1);
    }

    #[tokio::test]
    async fn cannot_request_own_listing() {
        let (store, _api, auth, skills) = fake_stack();
        let owner = auth
            .register(&register_request("Owner", "solo@example.com"))
            .await
            .expect("register");
        store.set(TOKEN_KEY, &owner.token).unwrap();
        let listing = skills
            .create_skill(&CreateSkillRequest {
                title: "Knife Sharpening".into(),
                description: "Whetstone basics.".into(),
                category: Category::Other,
                experience_level: ExperienceLevel::Intermediate,
                location: "Remote".into(),
                image_url: None,
            })
            .await
            .expect("create");

        let err = skills.create_request(listing.id).await.unwrap_err();
        assert_eq!(err.message(), "You cannot request your own listing");
    }

    #[tokio::test]
    async fn password_reset_flow() {
        let (_store, api, auth, _skills) = fake_stack();
        auth.request_password_reset(DEMO_EMAIL).await.expect("forgot");
        let token = api.reset_token_for(DEMO_EMAIL).expect("token issued");

        auth.reset_password(&crate::auth::ResetPasswordRequest {
            token,
            new_password: "N3wSecret!".into(),
        })
        .await
        .expect("reset");

        let err = auth.login(&demo_login()).await.unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
        auth.login(&LoginRequest {
            email: DEMO_EMAIL.into(),
            password: "N3wSecret!".into(),
        })
        .await
        .expect("login with new password");
    }

    #[tokio::test]
    async fn profile_update_validates_bio_length() {
        let (store, _api, auth, _skills) = fake_stack();
        let session = auth.login(&demo_login()).await.expect("login");
        store.set(TOKEN_KEY, &session.token).unwrap();

        let err = auth
            .update_profile(&UpdateProfileRequest {
                bio: Some("x".repeat(501)),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Bio must be less than 500 characters");

        let updated = auth
            .update_profile(&UpdateProfileRequest {
                bio: Some("x".repeat(500)),
                ..Default::default()
            })
            .await
            .expect("update");
        assert_eq!(updated.bio.as_deref().map(str::len), Some(500));
    }
}
