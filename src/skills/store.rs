use tracing::debug;
use uuid::Uuid;

use crate::models::{Category, SkillListing, SkillRequest};

/// A loading/error-tracked collection following the start/success/failure
/// triple. A failure records the message but keeps whatever data was already
/// loaded, so the UI can keep showing stale results instead of blanking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracked<T> {
    data: T,
    loading: bool,
    error: Option<String>,
}

impl<T> Tracked<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn succeed(&mut self, data: T) {
        self.loading = false;
        self.data = data;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Marketplace state: all listings, the current user's listings, the selected
/// listing, the category list, and the user's swap requests, each tracked
/// independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsState {
    skills: Tracked<Vec<SkillListing>>,
    user_skills: Tracked<Vec<SkillListing>>,
    selected: Tracked<Option<SkillListing>>,
    categories: Tracked<Vec<Category>>,
    requests: Tracked<Vec<SkillRequest>>,
}

impl SkillsState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- selectors ---

    pub fn skills(&self) -> &Tracked<Vec<SkillListing>> {
        &self.skills
    }

    pub fn user_skills(&self) -> &Tracked<Vec<SkillListing>> {
        &self.user_skills
    }

    pub fn selected(&self) -> &Tracked<Option<SkillListing>> {
        &self.selected
    }

    pub fn categories(&self) -> &Tracked<Vec<Category>> {
        &self.categories
    }

    pub fn requests(&self) -> &Tracked<Vec<SkillRequest>> {
        &self.requests
    }

    /// True while any collection has a fetch in flight.
    pub fn loading(&self) -> bool {
        self.skills.loading
            || self.user_skills.loading
            || self.selected.loading
            || self.categories.loading
            || self.requests.loading
    }

    /// Most recent error across the collections, if any.
    pub fn error(&self) -> Option<&str> {
        self.skills
            .error()
            .or_else(|| self.user_skills.error())
            .or_else(|| self.selected.error())
            .or_else(|| self.categories.error())
            .or_else(|| self.requests.error())
    }

    // --- all listings ---

    pub fn fetch_skills_start(&mut self) {
        self.skills.start();
    }

    pub fn fetch_skills_success(&mut self, listings: Vec<SkillListing>) {
        debug!(count = listings.len(), "skills loaded");
        self.skills.succeed(listings);
    }

    pub fn fetch_skills_failure(&mut self, message: String) {
        self.skills.fail(message);
    }

    // --- current user's listings ---

    pub fn fetch_user_skills_start(&mut self) {
        self.user_skills.start();
    }

    pub fn fetch_user_skills_success(&mut self, listings: Vec<SkillListing>) {
        self.user_skills.succeed(listings);
    }

    pub fn fetch_user_skills_failure(&mut self, message: String) {
        self.user_skills.fail(message);
    }

    // --- selected listing ---

    pub fn get_skill_start(&mut self) {
        self.selected.start();
    }

    pub fn get_skill_success(&mut self, listing: SkillListing) {
        self.selected.succeed(Some(listing));
    }

    pub fn get_skill_failure(&mut self, message: String) {
        self.selected.fail(message);
    }

    // --- listing mutations ---

    pub fn add_skill_start(&mut self) {
        self.user_skills.start();
    }

    pub fn add_skill_success(&mut self, listing: SkillListing) {
        debug!(listing_id = %listing.id, "listing added");
        self.user_skills.loading = false;
        self.user_skills.data.push(listing);
    }

    pub fn add_skill_failure(&mut self, message: String) {
        self.user_skills.fail(message);
    }

    pub fn update_skill_start(&mut self) {
        self.user_skills.start();
    }

    /// Replaces the matching entry; the selected listing follows when it has
    /// the same identifier.
    pub fn update_skill_success(&mut self, listing: SkillListing) {
        debug!(listing_id = %listing.id, "listing updated");
        self.user_skills.loading = false;
        for entry in &mut self.user_skills.data {
            if entry.id == listing.id {
                *entry = listing.clone();
            }
        }
        if let Some(selected) = &mut self.selected.data {
            if selected.id == listing.id {
                *selected = listing;
            }
        }
    }

    pub fn update_skill_failure(&mut self, message: String) {
        self.user_skills.fail(message);
    }

    pub fn delete_skill_start(&mut self) {
        self.user_skills.start();
    }

    pub fn delete_skill_success(&mut self, listing_id: Uuid) {
        debug!(%listing_id, "listing deleted");
        self.user_skills.loading = false;
        self.user_skills.data.retain(|entry| entry.id != listing_id);
    }

    pub fn delete_skill_failure(&mut self, message: String) {
        self.user_skills.fail(message);
    }

    // --- categories ---

    pub fn fetch_categories_start(&mut self) {
        self.categories.start();
    }

    pub fn fetch_categories_success(&mut self, categories: Vec<Category>) {
        self.categories.succeed(categories);
    }

    pub fn fetch_categories_failure(&mut self, message: String) {
        self.categories.fail(message);
    }

    // --- swap requests ---

    pub fn fetch_requests_start(&mut self) {
        self.requests.start();
    }

    pub fn fetch_requests_success(&mut self, requests: Vec<SkillRequest>) {
        self.requests.succeed(requests);
    }

    pub fn fetch_requests_failure(&mut self, message: String) {
        self.requests.fail(message);
    }

    pub fn add_request_start(&mut self) {
        self.requests.start();
    }

    pub fn add_request_success(&mut self, request: SkillRequest) {
        debug!(request_id = %request.id, "swap request created");
        self.requests.loading = false;
        self.requests.data.push(request);
    }

    pub fn add_request_failure(&mut self, message: String) {
        self.requests.fail(message);
    }

    pub fn update_request_start(&mut self) {
        self.requests.start();
    }

    pub fn update_request_success(&mut self, request: SkillRequest) {
        debug!(request_id = %request.id, status = ?request.status, "swap request updated");
        self.requests.loading = false;
        for entry in &mut self.requests.data {
            if entry.id == request.id {
                *entry = request.clone();
            }
        }
    }

    pub fn update_request_failure(&mut self, message: String) {
        self.requests.fail(message);
    }

    pub fn clear_error(&mut self) {
        self.skills.error = None;
        self.user_skills.error = None;
        self.selected.error = None;
        self.categories.error = None;
        self.requests.error = None;
    }
}
