//! Transport
//!
//! One seam for every backend call. Screens only see [`Transport`]; the
//! browser build plugs in [`HttpTransport`], tests plug in a scripted fake.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// HTTP verbs the dashboard uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Backend call returning the parsed JSON body.
///
/// `?Send` because browser fetch futures are tied to the UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value>;

    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::Get, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send(Method::Post, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send(Method::Put, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(Method::Delete, path, None).await
    }
}

/// Hook run after a 401 has cleared the session (navigates to sign-in).
pub type UnauthorizedHook = Rc<dyn Fn()>;

/// `reqwest`-backed transport with bearer injection and 401 interception.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
    session: Session,
    on_unauthorized: UnauthorizedHook,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, session: Session, on_unauthorized: UnauthorizedHook) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            session,
            on_unauthorized,
        }
    }

    /// Classify a response status. A 401 resets the session and fires the hook.
    fn intercept(&self, status: u16, body: &str) -> ApiResult<()> {
        match status {
            200..=299 => Ok(()),
            401 => {
                warn!("401 from backend, resetting session");
                self.session.clear();
                (self.on_unauthorized)();
                Err(ApiError::Unauthorized)
            }
            _ => Err(ApiError::Status {
                status,
                body: body.to_string(),
            }),
        }
    }

    /// Absolute URL, bearer header from the session, JSON body.
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> reqwest::RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.into(), &url);
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }
}

/// Parse a 2xx body. Empty means `null`.
fn parse_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let response = self
            .request(method, path, body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.intercept(status, &text)?;
        parse_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionUser;
    use std::cell::Cell;

    fn transport_with_counter() -> (HttpTransport, Session, Rc<Cell<u32>>) {
        let session = Session::in_memory();
        session.establish("tok", &SessionUser::default());
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let transport = HttpTransport::new(
            ClientConfig::default(),
            session.clone(),
            Rc::new(move || counter.set(counter.get() + 1)),
        );
        (transport, session, hits)
    }

    #[test]
    fn test_success_passes_through() {
        let (transport, session, hits) = transport_with_counter();
        assert_eq!(transport.intercept(204, ""), Ok(()));
        assert!(session.is_authenticated());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_unauthorized_clears_session_and_redirects() {
        let (transport, session, hits) = transport_with_counter();
        assert_eq!(transport.intercept(401, ""), Err(ApiError::Unauthorized));
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let (transport, session, hits) = transport_with_counter();
        let err = transport.intercept(500, "oops").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, body: "oops".into() });
        assert!(session.is_authenticated());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_request_carries_token_and_json() {
        let (transport, _session, _) = transport_with_counter();
        let body = serde_json::json!({ "Name": "Sách" });
        let request = transport
            .request(Method::Put, "Category/update", Some(&body))
            .build()
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::PUT);
        assert_eq!(request.url().as_str(), "https://localhost:7061/api/Category/update");
        assert_eq!(request.headers()[reqwest::header::AUTHORIZATION], "Bearer tok");
        assert_eq!(request.headers()[reqwest::header::CONTENT_TYPE], "application/json");
        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(serde_json::from_slice::<Value>(sent).unwrap(), body);
    }

    #[test]
    fn test_request_without_session_has_no_token() {
        let (transport, session, _) = transport_with_counter();
        session.clear();
        let request = transport.request(Method::Get, "Book/getall", None).build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("  "), Ok(Value::Null));
        assert_eq!(parse_body("[0]"), Ok(serde_json::json!([0])));
        assert!(parse_body("<html>").unwrap_err().is_malformed());
    }
}
