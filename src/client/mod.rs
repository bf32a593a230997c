//! Client-side adapter over the fleet service HTTP contract.
//!
//! The adapter's consumer is a function-calling planner that can only
//! interpret plain text, so every operation returns a `String`: response
//! data re-serialized as pretty-printed JSON on success, a one-line failure
//! description otherwise. Failures never cross this boundary as `Err` —
//! internally they are typed [`AdapterError`] values, rendered to text at
//! the public surface.

pub mod dispatch;

use parking_lot::Mutex;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::wire::{Driver, LoginRequest, LoginResponse, SESSION_ID_HEADER, Trip, Vehicle};

/// Failure modes the adapter recovers into strings.
///
/// The display text of each variant is the `<cause>` part of the rendered
/// `"<Operation> failed: <cause>"` message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// No session is cached, or the service rejected the one presented.
    #[error("Session is unauthorized or invalid.")]
    Unauthorized,
    /// Any non-success status other than 401, body surfaced verbatim.
    #[error("API returned status code {status} - {body}")]
    Status { status: u16, body: String },
    #[error("HTTP request error - {0}")]
    Transport(String),
    #[error("JSON deserialization error - {0}")]
    Decode(String),
}

/// Login state of one adapter instance.
///
/// Set only by a successful login; there is no logout transition. A second
/// login overwrites the cached identifier with the newest session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdapterState {
    #[default]
    LoggedOut,
    LoggedIn { session_id: String },
}

/// The fleet service exposed as four plain-text operations.
///
/// One instance holds one cached session. Callers needing several
/// concurrent sessions should construct several adapters rather than share
/// one.
#[derive(Debug)]
pub struct FleetApi {
    http: Client,
    base_url: String,
    state: Mutex<AdapterState>,
}

impl FleetApi {
    /// An adapter for the service at `base_url`, initially logged out.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            state: Mutex::new(AdapterState::LoggedOut),
        }
    }

    /// The adapter's current login state.
    pub fn state(&self) -> AdapterState {
        self.state.lock().clone()
    }

    /// Logs in with `user_name` and caches the issued session identifier.
    ///
    /// Returns the identifier on success, or a message starting with
    /// `"Login failed: "` on any failure. A failed login leaves the cached
    /// state untouched.
    pub async fn login(&self, user_name: &str) -> String {
        match self.try_login(user_name).await {
            Ok(session_id) => session_id,
            Err(err) => render_failure("Login", &err),
        }
    }

    /// Lists the logged-in customer's trips as pretty-printed JSON.
    pub async fn get_trips(&self) -> String {
        self.list::<Trip>("GetTrips", "trips").await
    }

    /// Lists the logged-in customer's vehicles as pretty-printed JSON.
    pub async fn get_vehicles(&self) -> String {
        self.list::<Vehicle>("GetVehicles", "vehicles").await
    }

    /// Lists the logged-in customer's drivers as pretty-printed JSON.
    pub async fn get_drivers(&self) -> String {
        self.list::<Driver>("GetDrivers", "drivers").await
    }

    async fn try_login(&self, user_name: &str) -> Result<String, AdapterError> {
        let request = LoginRequest {
            user_name: Some(user_name.to_owned()),
        };
        let response = self
            .http
            .post(format!("{}/simple_login", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::Status {
                status: status.as_u16(),
                body: read_body(response).await,
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|err| AdapterError::Decode(err.to_string()))?;

        *self.state.lock() = AdapterState::LoggedIn {
            session_id: login.session_id.clone(),
        };

        Ok(login.session_id)
    }

    async fn list<T>(&self, operation: &str, path: &str) -> String
    where
        T: DeserializeOwned + Serialize,
    {
        match self.try_list::<T>(path).await {
            Ok(rendered) => rendered,
            Err(err) => render_failure(operation, &err),
        }
    }

    async fn try_list<T>(&self, path: &str) -> Result<String, AdapterError>
    where
        T: DeserializeOwned + Serialize,
    {
        // Checked before any network I/O; a logged-out adapter never
        // issues a request.
        let session_id = {
            match &*self.state.lock() {
                AdapterState::LoggedIn { session_id } => session_id.clone(),
                AdapterState::LoggedOut => return Err(AdapterError::Unauthorized),
            }
        };

        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .header(SESSION_ID_HEADER, session_id)
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AdapterError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AdapterError::Status {
                status: status.as_u16(),
                body: read_body(response).await,
            });
        }

        let records: Vec<T> = response
            .json()
            .await
            .map_err(|err| AdapterError::Decode(err.to_string()))?;

        serde_json::to_string_pretty(&records).map_err(|err| AdapterError::Decode(err.to_string()))
    }
}

fn render_failure(operation: &str, err: &AdapterError) -> String {
    tracing::debug!(operation, err = %err, "reporting failure as text");
    format!("{operation} failed: {err}")
}

async fn read_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_owned())
}

#[cfg(test)]
mod tests {
    use super::{AdapterState, FleetApi};
    use serde_json::json;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn listing_before_login_reports_unauthorized_without_network_io() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());

        assert_eq!(
            api.get_trips().await,
            "GetTrips failed: Session is unauthorized or invalid."
        );
        assert_eq!(
            api.get_vehicles().await,
            "GetVehicles failed: Session is unauthorized or invalid."
        );
        assert_eq!(
            api.get_drivers().await,
            "GetDrivers failed: Session is unauthorized or invalid."
        );
    }

    #[tokio::test]
    async fn login_success_caches_session_and_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .and(body_json(json!({"userName": "user_pepsi"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "sess-1"})),
            )
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());

        assert_eq!(api.login("user_pepsi").await, "sess-1");
        assert_eq!(
            api.state(),
            AdapterState::LoggedIn {
                session_id: "sess-1".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn login_failure_surfaces_status_and_body_and_caches_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());

        assert_eq!(
            api.login("unknown_user").await,
            "Login failed: API returned status code 403 - "
        );
        assert_eq!(api.state(), AdapterState::LoggedOut);
    }

    #[tokio::test]
    async fn login_transport_failure_is_reported_as_text() {
        // Nothing listens on the reserved discard port.
        let api = FleetApi::new("http://127.0.0.1:9");

        let result = api.login("user_pepsi").await;
        assert!(
            result.starts_with("Login failed: HTTP request error - "),
            "unexpected message: {result}"
        );
        assert_eq!(api.state(), AdapterState::LoggedOut);
    }

    #[tokio::test]
    async fn login_rejects_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());

        let result = api.login("user_pepsi").await;
        assert!(
            result.starts_with("Login failed: JSON deserialization error - "),
            "unexpected message: {result}"
        );
    }

    #[tokio::test]
    async fn listing_attaches_cached_session_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "sess-2"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips"))
            .and(header("SessionId", "sess-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());
        api.login("user_pepsi").await;

        assert_eq!(api.get_trips().await, "[]");
    }

    #[tokio::test]
    async fn second_login_overwrites_cached_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .and(body_json(json!({"userName": "user_pepsi"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "first"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .and(body_json(json!({"userName": "user_fanta"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "second"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/drivers"))
            .and(header("SessionId", "second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());
        api.login("user_pepsi").await;
        api.login("user_fanta").await;

        assert_eq!(api.get_drivers().await, "[]");
    }

    #[tokio::test]
    async fn listing_rejected_by_service_reports_unauthorized_sentence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "stale"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vehicles"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());
        api.login("user_pepsi").await;

        assert_eq!(
            api.get_vehicles().await,
            "GetVehicles failed: Session is unauthorized or invalid."
        );
    }

    #[tokio::test]
    async fn listing_surfaces_other_statuses_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "sess-3"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/trips"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());
        api.login("user_pepsi").await;

        assert_eq!(
            api.get_trips().await,
            "GetTrips failed: API returned status code 503 - maintenance"
        );
    }

    #[tokio::test]
    async fn listing_rejects_records_of_the_wrong_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/simple_login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sessionId": "sess-4"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/drivers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
            .mount(&server)
            .await;

        let api = FleetApi::new(server.uri());
        api.login("user_pepsi").await;

        let result = api.get_drivers().await;
        assert!(
            result.starts_with("GetDrivers failed: JSON deserialization error - "),
            "unexpected message: {result}"
        );
    }
}
