//! Sign-in
//!
//! Form validation that only speaks up about fields the user has already
//! left, and the login call that turns credentials into a [`Session`].

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::session::{Session, SessionUser};
use crate::transport::Transport;

pub const LOGIN_PATH: &str = "Auth/login";
/// Where a successful login lands when no protected route was requested
pub const HOME_ROUTE: &str = "/";
pub const SIGN_IN_ROUTE: &str = "/signin";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Messages to show next to each field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: SessionUser,
}

/// Sign-in form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub email_touched: bool,
    pub password_touched: bool,
    pub show_password: bool,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for touched fields only; recomputed on every keystroke.
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.email_touched {
            if self.email.is_empty() {
                errors.email = Some(EMAIL_REQUIRED);
            } else if !is_valid_email(&self.email) {
                errors.email = Some(EMAIL_INVALID);
            }
        }
        if self.password_touched && self.password.is_empty() {
            errors.password = Some(PASSWORD_REQUIRED);
        }
        errors
    }

    /// Submit button state
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && self.errors().is_empty()
    }

    /// Touch every field, then validate.
    pub fn submit(&mut self) -> Result<LoginPayload, FieldErrors> {
        self.email_touched = true;
        self.password_touched = true;
        let errors = self.errors();
        if errors.is_empty() {
            Ok(LoginPayload {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Post credentials and persist the returned token and user.
pub async fn login(transport: &dyn Transport, session: &Session, payload: &LoginPayload) -> ApiResult<SessionUser> {
    let body = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response: Value = transport.post(LOGIN_PATH, &body).await?;
    let response: LoginResponse = serde_json::from_value(response)?;
    if response.access_token.is_empty() {
        return Err(ApiError::Malformed("login answered an empty token".into()));
    }
    session.establish(&response.access_token, &response.user);
    info!("Signed in as {}", payload.email);
    Ok(response.user)
}

/// Route to land on after login: the protected route that bounced the user
/// here, or home. The sign-in route itself is never a target.
pub fn redirect_target(requested: Option<&str>) -> String {
    match requested {
        Some(path) if path.starts_with('/') && path != SIGN_IN_ROUTE => path.to_string(),
        _ => HOME_ROUTE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use crate::transport::Method;
    use serde_json::json;

    #[test]
    fn test_untouched_fields_stay_quiet() {
        let form = SignInForm::new();
        assert!(form.errors().is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_touched_email_validates_live() {
        let mut form = SignInForm { email_touched: true, ..SignInForm::new() };
        assert_eq!(form.errors().email, Some(EMAIL_REQUIRED));
        form.email = "admin@".into();
        assert_eq!(form.errors().email, Some(EMAIL_INVALID));
        form.email = "admin@shop.vn".into();
        assert_eq!(form.errors().email, None);
        assert_eq!(form.errors().password, None);
    }

    #[test]
    fn test_submit_touches_everything() {
        let mut form = SignInForm { email: "a b@c.d".into(), ..SignInForm::new() };
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.email, Some(EMAIL_INVALID));
        assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
        assert!(form.email_touched && form.password_touched);

        form.email = "admin@shop.vn".into();
        form.password = "secret".into();
        assert!(form.can_submit());
        assert_eq!(
            form.submit(),
            Ok(LoginPayload { email: "admin@shop.vn".into(), password: "secret".into() })
        );
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("/order")), "/order");
        assert_eq!(redirect_target(Some("/signin")), "/");
        assert_eq!(redirect_target(Some("https://evil.test")), "/");
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let transport = FakeTransport::new();
        transport.push(Ok(json!({
            "accessToken": "jwt",
            "user": { "userId": 1, "name": "Admin", "email": "admin@shop.vn" }
        })));
        let session = Session::in_memory();
        let payload = LoginPayload { email: "admin@shop.vn".into(), password: "secret".into() };

        let user = login(&transport, &session, &payload).await.unwrap();

        assert_eq!(user.name, "Admin");
        assert_eq!(session.access_token().as_deref(), Some("jwt"));
        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, LOGIN_PATH);
        assert_eq!(call.body, Some(json!({ "email": "admin@shop.vn", "password": "secret" })));
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let transport = FakeTransport::new();
        transport.push(Ok(json!({ "accessToken": "" })));
        let session = Session::in_memory();
        let payload = LoginPayload { email: "a@b.c".into(), password: "x".into() };
        assert!(login(&transport, &session, &payload).await.is_err());
        assert!(!session.is_authenticated());
    }
}
