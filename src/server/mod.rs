//! HTTP surface of the fleet service.
//!
//! One login endpoint issuing bearer session identifiers, and three
//! read-only listing endpoints serving the caller's customer partition.
//! There is no record-level authorization beyond that partition: any two
//! sessions resolving to the same customer see identical data.

mod extract;
pub use extract::SessionCustomer;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dataset::Dataset;
use crate::directory::UserDirectory;
use crate::session::SessionStore;
use crate::wire::{Driver, LoginRequest, LoginResponse, Trip, Vehicle};

/// Shared per-process state handed to every request handler.
///
/// The session store is the only mutable piece; directory and dataset are
/// frozen at startup.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub directory: Arc<UserDirectory>,
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// State backed by the demo seed directory and dataset, with an empty
    /// session store.
    pub fn seeded() -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            directory: Arc::new(UserDirectory::seed()),
            dataset: Arc::new(Dataset::seed()),
        }
    }
}

/// Builds the service router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/simple_login", post(login))
        .route("/trips", get(trips))
        .route("/vehicles", get(vehicles))
        .route("/drivers", get(drivers))
        .with_state(state)
}

#[tracing::instrument(name = "login", skip(state, request))]
async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    let user_name = request.user_name.unwrap_or_default();
    if user_name.is_empty() {
        return (StatusCode::BAD_REQUEST, "UserName is required.").into_response();
    }

    let Some(customer_name) = state.directory.customer_for(&user_name) else {
        tracing::warn!(user_name = %user_name, "login rejected: unknown username");
        return StatusCode::FORBIDDEN.into_response();
    };

    let session_id = state.sessions.issue(customer_name);
    tracing::info!(customer_name = %customer_name, "session issued");

    Json(LoginResponse {
        session_id: session_id.to_string(),
    })
    .into_response()
}

async fn trips(customer: SessionCustomer, State(state): State<AppState>) -> Json<Vec<Trip>> {
    Json(state.dataset.trips_for(customer.name()))
}

async fn vehicles(customer: SessionCustomer, State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    Json(state.dataset.vehicles_for(customer.name()))
}

async fn drivers(customer: SessionCustomer, State(state): State<AppState>) -> Json<Vec<Driver>> {
    Json(state.dataset.drivers_for(customer.name()))
}
