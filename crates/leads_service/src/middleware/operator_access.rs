//! Operator access gate: a static shared secret carried in a request header.
//! Deliberately not a real auth boundary (per product scope), but the
//! secret lives server-side and never ships to the browser bundle.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};

/// The header key for the operator access key
static OPERATOR_ACCESS_KEY_HEADER: &str = "x-operator-access-key";

/// The expected secret, shared through router state.
#[derive(Clone)]
pub struct OperatorAccessKey(Arc<String>);

impl OperatorAccessKey {
    pub fn new(key: String) -> Self {
        Self(Arc::new(key))
    }

    fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }
}

/// Sentinel value proving the request carried a valid operator key.
#[derive(Debug)]
pub struct ValidOperatorKey(());

#[async_trait]
impl<S> FromRequestParts<S> for ValidOperatorKey
where
    OperatorAccessKey: FromRef<S>,
    S: Send + Sync + 'static,
{
    type Rejection = (StatusCode, Cow<'static, str>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(candidate) = parts
            .headers
            .get(OPERATOR_ACCESS_KEY_HEADER)
            .and_then(|header| header.to_str().ok())
        else {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("missing {} header", OPERATOR_ACCESS_KEY_HEADER).into(),
            ));
        };

        let expected = OperatorAccessKey::from_ref(state);

        expected
            .matches(candidate)
            .then_some(ValidOperatorKey(()))
            .ok_or((StatusCode::UNAUTHORIZED, Cow::Borrowed("Unauthorized")))
    }
}

/// Validates that the operator access key header is provided and valid
pub async fn handler(_valid_operator_key: ValidOperatorKey, req: Request, next: Next) -> Response {
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_comparison() {
        let key = OperatorAccessKey::new("swordfish".to_string());
        assert!(key.matches("swordfish"));
        assert!(!key.matches("Swordfish"));
        assert!(!key.matches(""));
    }
}
