//! Cross-origin policy.
//!
//! Two pieces share one allow-list:
//! - [`enforce_origin`] rejects requests whose `Origin` is not listed
//!   (`403`); requests without an `Origin` header are not cross-origin
//!   and pass through.
//! - [`OriginPolicy::cors_layer`] answers preflights and adds the CORS
//!   response headers for listed origins.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::http::error::ApiError;

/// Methods cross-origin callers may use.
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// The configured origin allow-list.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Arc<[HeaderValue]>,
}

impl OriginPolicy {
    pub fn from_config(config: &CorsConfig) -> Self {
        let allowed = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring unusable CORS origin");
                    None
                }
            })
            .collect();
        Self { allowed }
    }

    pub fn allows(&self, origin: &HeaderValue) -> bool {
        self.allowed.iter().any(|allowed| allowed == origin)
    }

    /// tower-http layer emitting CORS headers for the allow-list.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed.iter().cloned()))
            .allow_methods(ALLOWED_METHODS.to_vec())
            .allow_headers(AllowHeaders::mirror_request())
    }
}

/// Middleware rejecting cross-origin requests from unlisted origins.
pub async fn enforce_origin(
    State(policy): State<OriginPolicy>,
    request: Request,
    next: Next,
) -> Response {
    match request.headers().get(ORIGIN) {
        Some(origin) if !policy.allows(origin) => {
            tracing::warn!(
                origin = ?origin,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request from unlisted origin"
            );
            ApiError::OriginNotAllowed.into_response()
        }
        _ => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let policy = OriginPolicy::from_config(&CorsConfig::default());
        assert!(policy.allows(&HeaderValue::from_static("https://ofetechlogistics.com")));
        assert!(policy.allows(&HeaderValue::from_static("http://localhost:3000")));
        assert!(!policy.allows(&HeaderValue::from_static("http://localhost:3001")));
        assert!(!policy.allows(&HeaderValue::from_static("https://evil.example")));
    }

    #[test]
    fn test_origin_match_is_exact() {
        let policy = OriginPolicy::from_config(&CorsConfig {
            allowed_origins: vec!["https://ro-roladapo.github.io".to_string()],
        });
        assert!(!policy.allows(&HeaderValue::from_static("https://ro-roladapo.github.io/")));
        assert!(!policy.allows(&HeaderValue::from_static("http://ro-roladapo.github.io")));
    }
}
