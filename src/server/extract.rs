use axum::extract::FromRequestParts;
use http::{StatusCode, request::Parts};

use super::AppState;
use crate::session::Id;
use crate::wire::SESSION_ID_HEADER;

/// The customer resolved from the request's `SessionId` header.
///
/// Listing handlers take this as an argument; extraction rejects with
/// `401 Unauthorized` when the header is missing, does not parse as a
/// session identifier, or does not match an issued session.
#[derive(Debug, Clone)]
pub struct SessionCustomer(String);

impl SessionCustomer {
    /// The customer name the presented session was issued for.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionCustomer {
    type Rejection = StatusCode;

    #[tracing::instrument(name = "session", skip(parts, state))]
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let session_id = raw.parse::<Id>().map_err(|err| {
            tracing::warn!(
                err = %err,
                "possibly suspicious activity: malformed session id"
            );
            StatusCode::UNAUTHORIZED
        })?;

        state
            .sessions
            .resolve(&session_id)
            .map(Self)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
