use crate::auth::Session;
use crate::pages::Navigation;

/// Landing page. Static copy aside, the only logic is where the calls to
/// action point, which depends on whether a session is active.
pub struct HomePage;

impl HomePage {
    /// Hero button: members browse, visitors are asked to join.
    pub fn primary_action(session: &Session) -> Navigation {
        if session.is_authenticated() {
            Navigation::To("/skills".into())
        } else {
            Navigation::To("/register".into())
        }
    }

    pub fn browse_action() -> Navigation {
        Navigation::To("/skills".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn primary_action_depends_on_authentication() {
        let mut app = AppState::fake();
        assert_eq!(
            HomePage::primary_action(&app.session),
            Navigation::To("/register".into())
        );

        let response = app
            .auth_service
            .login(&crate::auth::LoginRequest {
                email: crate::fixtures::DEMO_EMAIL.into(),
                password: crate::fixtures::DEMO_PASSWORD.into(),
            })
            .await
            .expect("login");
        app.session
            .login_success(response.user, response.token)
            .expect("session");

        assert_eq!(
            HomePage::primary_action(&app.session),
            Navigation::To("/skills".into())
        );
    }
}
