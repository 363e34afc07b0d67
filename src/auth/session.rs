use std::sync::Arc;
use tracing::{debug, info};

use crate::models::User;
use crate::storage::{TokenStore, TOKEN_KEY};

/// The session context: current user, opaque token, and the injected durable
/// store. Transitions here are the only writers of the persisted token, so
/// in-memory state and durable storage cannot drift apart.
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
    error: Option<String>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
            error: None,
            store,
        }
    }

    /// Startup initialization: pick up a token persisted by a previous run.
    /// The session does not count as authenticated until the owning user has
    /// been re-fetched and attached via [`Session::restore_success`].
    pub fn restore(store: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        let token = store.get(TOKEN_KEY)?;
        if token.is_some() {
            debug!("restored persisted session token");
        }
        Ok(Self {
            user: None,
            token,
            loading: false,
            error: None,
            store,
        })
    }

    // --- selectors ---

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Authenticated iff both user and token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- transitions ---

    pub fn login_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_success(&mut self, user: User, token: String) -> anyhow::Result<()> {
        let user_id = user.id;
        self.authenticate(user, token)?;
        info!(user_id = %user_id, "user logged in");
        Ok(())
    }

    pub fn login_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn register_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn register_success(&mut self, user: User, token: String) -> anyhow::Result<()> {
        let user_id = user.id;
        self.authenticate(user, token)?;
        info!(user_id = %user_id, "user registered");
        Ok(())
    }

    pub fn register_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Attaches the re-fetched user to a restored token, completing startup
    /// authentication.
    pub fn restore_success(&mut self, user: User) {
        debug!(user_id = %user.id, "session restored");
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self) -> anyhow::Result<()> {
        // Remove the durable copy first; if that fails the in-memory session
        // stays intact rather than diverging from storage.
        self.store.remove(TOKEN_KEY)?;
        let user_id = self.user.as_ref().map(|u| u.id);
        self.user = None;
        self.token = None;
        self.error = None;
        info!(?user_id, "user logged out");
        Ok(())
    }

    pub fn update_profile_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn update_profile_success(&mut self, user: User) {
        debug!(user_id = %user.id, "profile updated");
        self.loading = false;
        self.user = Some(user);
    }

    pub fn update_profile_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn authenticate(&mut self, user: User, token: String) -> anyhow::Result<()> {
        self.store.set(TOKEN_KEY, &token)?;
        self.loading = false;
        self.user = Some(user);
        self.token = Some(token);
        self.error = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;
    use time::macros::datetime;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            bio: None,
            location: Some("San Francisco, CA".into()),
            avatar_url: None,
            created_at: datetime!(2023-01-15 00:00:00 UTC),
        }
    }

    #[test]
    fn login_round_trip_persists_and_clears_the_token() {
        let store = Arc::new(MemoryTokenStore::new());
        let mut session = Session::new(store.clone());
        let user = test_user();

        session.login_start();
        assert!(session.loading());

        session
            .login_success(user.clone(), "tok-1".into())
            .expect("login success");
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(session.token(), Some("tok-1"));
        assert!(!session.loading());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), Some("tok-1".to_string()));

        session.logout().expect("logout");
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn failure_records_error_without_authenticating() {
        let mut session = Session::new(Arc::new(MemoryTokenStore::new()));
        session.login_start();
        session.login_failure("Invalid credentials".into());

        assert!(!session.is_authenticated());
        assert!(!session.loading());
        assert_eq!(session.error(), Some("Invalid credentials"));

        session.clear_error();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn start_clears_a_previous_error() {
        let mut session = Session::new(Arc::new(MemoryTokenStore::new()));
        session.login_failure("boom".into());
        session.login_start();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn restore_picks_up_a_persisted_token_but_stays_unauthenticated() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(TOKEN_KEY, "persisted").unwrap();

        let mut session = Session::restore(store).expect("restore");
        assert_eq!(session.token(), Some("persisted"));
        assert!(!session.is_authenticated());

        session.restore_success(test_user());
        assert!(session.is_authenticated());
    }

    #[test]
    fn update_profile_success_replaces_the_stored_user() {
        let mut session = Session::new(Arc::new(MemoryTokenStore::new()));
        let user = test_user();
        session
            .login_success(user.clone(), "tok".into())
            .expect("login");

        let mut updated = user;
        updated.bio = Some("New bio".into());
        session.update_profile_start();
        session.update_profile_success(updated.clone());

        assert_eq!(session.user(), Some(&updated));
        assert!(!session.loading());
    }
}
