use tracing::info;

use skillswap::fixtures::{DEMO_EMAIL, DEMO_PASSWORD};
use skillswap::forms::LoginForm;
use skillswap::pages::{AuthPage, BrowsePage, ProfilePage, SortOption};
use skillswap::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "skillswap=debug".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // No real backend exists yet, so the demo shell drives the flows against
    // the seeded mock. Swap `AppState::fake()` for `AppState::init()?` once a
    // backend is reachable.
    let mut app = AppState::fake();
    app.bootstrap_session().await?;

    let auth_page = AuthPage::new(None);
    let login = LoginForm {
        email: DEMO_EMAIL.into(),
        password: DEMO_PASSWORD.into(),
    };
    let outcome = auth_page.login(&mut app, &login).await;
    info!(?outcome, "demo login");

    let mut browse = BrowsePage::new();
    browse.load(&mut app).await;
    info!(
        listings = app.skills.skills().data().len(),
        categories = app.skills.categories().data().len(),
        "browse page loaded"
    );

    browse.set_search("yoga");
    for listing in browse.visible_listings(&app.skills) {
        info!(title = %listing.title, category = %listing.category, "search hit");
    }

    browse.set_search("");
    browse.set_sort(SortOption::Newest);
    if let Some(listing) = browse.visible_listings(&app.skills).first() {
        let nav = browse.request_swap(&mut app, listing.id).await;
        info!(title = %listing.title, ?nav, "requested a swap");
    }

    let profile = ProfilePage::new();
    profile.load(&mut app).await;
    info!(
        skills = profile.skills_count(&app),
        swaps = profile.swaps_count(&app),
        "profile page loaded"
    );

    AuthPage::logout(&mut app)?;
    info!("demo walkthrough finished");
    Ok(())
}
