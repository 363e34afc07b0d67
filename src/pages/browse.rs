use tracing::warn;
use uuid::Uuid;

use crate::models::{Category, SkillListing};
use crate::pages::Navigation;
use crate::skills::{SkillQuery, SkillsState};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

/// Browse-page container: transient search/filter/sort state plus the fetch
/// and swap-request flows.
#[derive(Debug, Clone, Default)]
pub struct BrowsePage {
    search_term: String,
    selected_category: Option<Category>,
    sort_option: SortOption,
}

impl BrowsePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort_option = sort;
    }

    /// Fetches the listing collection and category list into the slice.
    pub async fn load(&self, app: &mut AppState) {
        app.skills.fetch_skills_start();
        match app.skills_service.get_all_skills(&SkillQuery::default()).await {
            Ok(listings) => app.skills.fetch_skills_success(listings),
            Err(e) => app.skills.fetch_skills_failure(e.message()),
        }

        app.skills.fetch_categories_start();
        match app.skills_service.get_categories().await {
            Ok(categories) => app.skills.fetch_categories_success(categories),
            Err(e) => app.skills.fetch_categories_failure(e.message()),
        }
    }

    /// The loaded collection, filtered and sorted for display.
    pub fn visible_listings(&self, skills: &SkillsState) -> Vec<SkillListing> {
        self.filter_and_sort(skills.skills().data())
    }

    /// Pure recomputation over the full collection; runs on every input
    /// change, no caching.
    pub fn filter_and_sort(&self, listings: &[SkillListing]) -> Vec<SkillListing> {
        let term = self.search_term.trim().to_lowercase();

        let mut matches: Vec<SkillListing> = listings
            .iter()
            .filter(|listing| {
                let matches_search = term.is_empty()
                    || listing.title.to_lowercase().contains(&term)
                    || listing.description.to_lowercase().contains(&term);
                let matches_category = self
                    .selected_category
                    .map_or(true, |category| category == listing.category);
                matches_search && matches_category
            })
            .cloned()
            .collect();

        match self.sort_option {
            SortOption::Newest => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOption::Oldest => matches.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOption::Alphabetical => matches.sort_by(|a, b| {
                a.title
                    .to_lowercase()
                    .cmp(&b.title.to_lowercase())
                    .then_with(|| a.title.cmp(&b.title))
            }),
        }
        matches
    }

    /// Submits a swap request for a listing. Visitors are sent to the login
    /// page with a redirect back to the listing.
    pub async fn request_swap(&self, app: &mut AppState, listing_id: Uuid) -> Navigation {
        if !app.session.is_authenticated() {
            return Navigation::login_redirect(&format!("/skills/{}", listing_id));
        }

        app.skills.add_request_start();
        match app.skills_service.create_request(listing_id).await {
            Ok(request) => app.skills.add_request_success(request),
            Err(e) => {
                warn!(%listing_id, error = %e, "swap request failed");
                app.skills.add_request_failure(e.message());
            }
        }
        Navigation::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LoginRequest;
    use crate::fixtures::{seed_listings, DEMO_EMAIL, DEMO_PASSWORD};

    fn page() -> BrowsePage {
        BrowsePage::new()
    }

    #[test]
    fn search_matches_title_and_description_case_insensitively() {
        let listings = seed_listings();
        let mut browse = page();

        browse.set_search("yoga");
        let matches = browse.filter_and_sort(&listings);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Yoga Instruction");

        // "camera" only appears in the photography description.
        browse.set_search("CAMERA");
        let matches = browse.filter_and_sort(&listings);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Digital Photography");
    }

    #[test]
    fn category_filter_is_case_insensitive_via_parse() {
        let listings = seed_listings();
        let mut browse = page();
        browse.set_category(Some(Category::parse("LIFESTYLE")));
        let matches = browse.filter_and_sort(&listings);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Yoga Instruction");
    }

    #[test]
    fn newest_sort_puts_recent_listings_first() {
        let listings = seed_listings();
        let mut browse = page();
        browse.set_sort(SortOption::Newest);
        let sorted = browse.filter_and_sort(&listings);
        assert_eq!(sorted[0].title, "Web Development");
        let yoga_pos = sorted
            .iter()
            .position(|l| l.title == "Yoga Instruction")
            .unwrap();
        let web_pos = sorted
            .iter()
            .position(|l| l.title == "Web Development")
            .unwrap();
        assert!(web_pos < yoga_pos);

        browse.set_sort(SortOption::Oldest);
        let oldest = browse.filter_and_sort(&listings);
        assert!(oldest
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at));
    }

    #[test]
    fn newest_places_yoga_before_web_development_when_yoga_is_newer() {
        let mut yoga = seed_listings()[3].clone();
        let web = seed_listings()[0].clone();
        yoga.created_at = web.created_at + time::Duration::days(1);

        let mut browse = page();
        browse.set_sort(SortOption::Newest);
        let sorted = browse.filter_and_sort(&[web.clone(), yoga.clone()]);
        assert_eq!(sorted[0].title, "Yoga Instruction");

        browse.set_sort(SortOption::Alphabetical);
        let sorted = browse.filter_and_sort(&[yoga, web]);
        assert_eq!(sorted[0].title, "Web Development");
        assert_eq!(sorted[1].title, "Yoga Instruction");
    }

    #[tokio::test]
    async fn load_populates_listings_and_categories() {
        let mut app = AppState::fake();
        let browse = page();
        browse.load(&mut app).await;

        assert_eq!(app.skills.skills().data().len(), 6);
        assert_eq!(app.skills.categories().data().len(), 6);
        assert!(!app.skills.loading());
        assert!(app.skills.error().is_none());
    }

    #[tokio::test]
    async fn request_swap_redirects_visitors_to_login() {
        let mut app = AppState::fake();
        let browse = page();
        browse.load(&mut app).await;
        let listing_id = app.skills.skills().data()[0].id;

        let nav = browse.request_swap(&mut app, listing_id).await;
        let path = nav.path().expect("redirect");
        assert!(path.starts_with("/login?redirect="));
        assert!(app.skills.requests().data().is_empty());
    }

    #[tokio::test]
    async fn request_swap_appends_for_authenticated_members() {
        let mut app = AppState::fake();
        let browse = page();
        browse.load(&mut app).await;

        let response = app
            .auth_service
            .login(&LoginRequest {
                email: DEMO_EMAIL.into(),
                password: DEMO_PASSWORD.into(),
            })
            .await
            .expect("login");
        app.session
            .login_success(response.user, response.token)
            .expect("session");

        let listing_id = app.skills.skills().data()[0].id;
        let nav = browse.request_swap(&mut app, listing_id).await;
        assert_eq!(nav, Navigation::Stay);
        assert_eq!(app.skills.requests().data().len(), 1);
        assert_eq!(app.skills.requests().data()[0].listing_id, listing_id);
    }
}
