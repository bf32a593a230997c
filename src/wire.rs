//! Wire types shared by the service and its client adapter.
//!
//! All bodies are JSON with camelCase field names. The record field sets
//! are fixed; the customer partition key is always `customerName`.

use serde::{Deserialize, Serialize};

/// Request header carrying the bearer session identifier on listing calls.
///
/// Matching is case-insensitive on the server side, as for any HTTP header.
pub const SESSION_ID_HEADER: &str = "SessionId";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session_id: String,
}

/// A freight trip between two cities, owned by one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: u32,
    pub origin: String,
    pub destination: String,
    pub driver_id: u32,
    pub vehicle_id: u32,
    pub informed_cargo_value: f64,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub rating: f64,
    pub customer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub customer_name: String,
}
