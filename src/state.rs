use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::api::{ApiClient, HttpApi};
use crate::auth::{AuthService, Session};
use crate::config::AppConfig;
use crate::fixtures::MockApi;
use crate::skills::{SkillsService, SkillsState};
use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Everything a page container needs: configuration, the collaborator
/// boundaries, the services, and the two state slices.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<dyn TokenStore>,
    pub auth_service: AuthService,
    pub skills_service: SkillsService,
    pub session: Session,
    pub skills: SkillsState,
}

impl AppState {
    /// Production wiring: env config, file-backed token store, HTTP client.
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let tokens: Arc<dyn TokenStore> =
            Arc::new(FileTokenStore::new(config.token_file.clone()));
        let api: Arc<dyn ApiClient> = Arc::new(HttpApi::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
            tokens.clone(),
        )?);
        let session = Session::restore(tokens.clone())?;

        Ok(Self {
            config,
            tokens,
            auth_service: AuthService::new(api.clone()),
            skills_service: SkillsService::new(api),
            session,
            skills: SkillsState::new(),
        })
    }

    /// Mock-backed wiring for tests and the demo shell.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            api_base_url: "http://mock.invalid/api/v1".into(),
            token_file: std::path::PathBuf::from("unused"),
            request_timeout_secs: 5,
        });
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let api: Arc<dyn ApiClient> = Arc::new(MockApi::seeded(tokens.clone()));

        Self {
            config,
            tokens: tokens.clone(),
            auth_service: AuthService::new(api.clone()),
            skills_service: SkillsService::new(api),
            session: Session::new(tokens),
            skills: SkillsState::new(),
        }
    }

    /// Completes startup authentication: re-fetches the user behind a
    /// restored token, or drops the token when the backend rejects it.
    pub async fn bootstrap_session(&mut self) -> anyhow::Result<()> {
        if self.session.token().is_none() || self.session.is_authenticated() {
            return Ok(());
        }
        match self.auth_service.get_profile().await {
            Ok(user) => self.session.restore_success(user),
            Err(e) => {
                warn!(error = %e, "persisted session rejected, logging out");
                self.session.logout()?;
            }
        }
        Ok(())
    }
}
