use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

/// Cookie carrying the hosted auth provider's session access token.
pub const SESSION_COOKIE: &str = "sb-access-token";

/// Paths under this prefix serve the interactive demo. They never carry a
/// session and never reach the auth provider.
pub const CLIENT_PORTAL_PREFIX: &str = "/client-portal";

/// Session information attached to every request outside the client portal.
///
/// The token is whatever the session cookie held; it has not been verified
/// yet. Verification happens in the handlers that actually need an account.
#[derive(Debug, Clone, Default)]
pub struct SessionScope {
    pub access_token: Option<String>,
}

/// Attach the session cookie value to requests outside the client portal.
///
/// Portal paths pass through untouched so the demo stays usable, and
/// deliberately broken sessions there cannot trip up account endpoints.
pub async fn session_scope(mut request: Request, next: Next) -> Response {
    if request.uri().path().starts_with(CLIENT_PORTAL_PREFIX) {
        return next.run(request).await;
    }

    let access_token = cookie_value(request.headers(), SESSION_COOKIE);
    request.extensions_mut().insert(SessionScope { access_token });

    next.run(request).await
}

/// Session access token, required by account endpoints.
///
/// Reads the scope attached by [`session_scope`], falling back to the cookie
/// itself for routes mounted without the middleware. A missing token rejects
/// with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_scope = parts
            .extensions
            .get::<SessionScope>()
            .and_then(|scope| scope.access_token.clone());

        from_scope
            .or_else(|| cookie_value(&parts.headers, SESSION_COOKIE))
            .map(SessionToken)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}

/// Pull one cookie's value out of the Cookie header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Extract the token from a `Bearer` Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    /// Reports whether the middleware attached a scope, and the token in it.
    async fn report_scope(request: Request) -> String {
        match request.extensions().get::<SessionScope>() {
            Some(scope) => format!("scope:{}", scope.access_token.as_deref().unwrap_or("-")),
            None => "no-scope".to_string(),
        }
    }

    fn scoped_app() -> Router {
        Router::new()
            .route("/client-portal/reports", get(report_scope))
            .route("/auth/profile", get(report_scope))
            .layer(middleware::from_fn(session_scope))
    }

    async fn response_body(app: Router, path: &str, cookie: Option<&str>) -> String {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_portal_paths_carry_no_session_scope() {
        let seen = response_body(
            scoped_app(),
            "/client-portal/reports",
            Some("sb-access-token=tok-1"),
        )
        .await;
        assert_eq!(seen, "no-scope");
    }

    #[tokio::test]
    async fn test_other_paths_get_scope_with_cookie_token() {
        let seen = response_body(
            scoped_app(),
            "/auth/profile",
            Some("sb-access-token=tok-1"),
        )
        .await;
        assert_eq!(seen, "scope:tok-1");
    }

    #[tokio::test]
    async fn test_other_paths_get_empty_scope_without_cookie() {
        let seen = response_body(scoped_app(), "/auth/profile", None).await;
        assert_eq!(seen, "scope:-");
    }

    #[test]
    fn test_cookie_value_finds_session_cookie() {
        let headers = headers_with(
            header::COOKIE,
            "theme=dark; sb-access-token=tok-123; lang=en",
        );
        assert_eq!(
            cookie_value(&headers, SESSION_COOKIE).as_deref(),
            Some("tok-123")
        );
    }

    #[test]
    fn test_cookie_value_missing_cookie() {
        let headers = headers_with(header::COOKIE, "theme=dark");
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), None);
        assert_eq!(cookie_value(&HeaderMap::new(), SESSION_COOKIE), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_prefixes() {
        let headers = headers_with(header::COOKIE, "sb-access-token-old=stale");
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_bearer_token_requires_bearer_scheme() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer abc123");
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc123"));

        let headers = headers_with(header::AUTHORIZATION, "Basic abc123");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer   ");
        assert_eq!(bearer_token(&headers), None);
    }
}
