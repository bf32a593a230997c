//! # Fleetline
//!
//! A small client/server demonstration of a session-gated data-access
//! boundary: an HTTP service exposing fleet data (trips, vehicles, drivers)
//! partitioned per customer, and a client adapter that presents the service
//! to an LLM function-calling planner as four operations with plain-text
//! results.
//!
//! # Quick Start
//!
//! Serving the API:
//!
//! ```rust,no_run
//! use fleetline::server::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = server::router(AppState::seeded());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5271")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! Driving it from the adapter:
//!
//! ```rust,no_run
//! use fleetline::client::FleetApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = FleetApi::new("http://localhost:5271");
//!
//!     // Every result is a string the planner can relay verbatim: a
//!     // session id, pretty-printed JSON rows, or a failure sentence.
//!     let session = api.login("user_pepsi").await;
//!     let trips = api.get_trips().await;
//!     println!("{session}\n{trips}");
//! }
//! ```
//!
//! # Sessions
//!
//! Login validates a username against a fixed directory and issues a fresh
//! 128-bit identifier per call; listing endpoints resolve the `SessionId`
//! request header back to a customer and serve only that customer's rows.
//! Sessions live for the process lifetime — no expiry, no revocation, no
//! logout. That unbounded lifetime is the demo service's documented
//! contract, not an oversight to patch here.

mod dataset;
mod directory;
mod session;
mod wire;

pub mod client;
pub mod server;

pub use dataset::Dataset;
pub use directory::UserDirectory;
pub use session::{Id, SessionStore};
pub use wire::{Driver, LoginRequest, LoginResponse, SESSION_ID_HEADER, Trip, Vehicle};
