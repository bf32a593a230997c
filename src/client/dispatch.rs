//! Name-based dispatch of adapter operations for a function-calling planner.
//!
//! The planner sees the adapter as a set of named functions with
//! natural-language descriptions; it picks one by name and reads the string
//! result. Dispatch never panics: an unknown name or missing argument comes
//! back as a descriptive string like every other failure.

use serde_json::Value;

use super::FleetApi;

/// A callable operation advertised to the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: &'static str,
    pub description: &'static str,
}

/// The operations the adapter advertises.
///
/// Only `simple_login` takes an argument: the `userName` to log in with.
pub fn declarations() -> Vec<FunctionDeclaration> {
    vec![
        FunctionDeclaration {
            name: "simple_login",
            description: "Performs a simple login with a username to get a session ID.",
        },
        FunctionDeclaration {
            name: "get_trips",
            description: "Gets the list of trips for the current session.",
        },
        FunctionDeclaration {
            name: "get_vehicles",
            description: "Gets the list of vehicles for the current session.",
        },
        FunctionDeclaration {
            name: "get_drivers",
            description: "Gets the list of drivers for the current session.",
        },
    ]
}

/// Invokes the named operation on `api`, relaying its string result.
pub async fn call(api: &FleetApi, name: &str, args: &Value) -> String {
    match name {
        "simple_login" => match args.get("userName").and_then(Value::as_str) {
            Some(user_name) => api.login(user_name).await,
            None => "Login failed: userName argument is required.".to_owned(),
        },
        "get_trips" => api.get_trips().await,
        "get_vehicles" => api.get_vehicles().await,
        "get_drivers" => api.get_drivers().await,
        _ => format!("unknown function: {name}"),
    }
}
