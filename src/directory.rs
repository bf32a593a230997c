//! The fixed username directory consulted by login.

use std::collections::HashMap;

/// Maps usernames to the customer they belong to.
///
/// Static for the process lifetime. Lookups are exact string matches: no
/// trimming, no case folding.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    entries: HashMap<String, String>,
}

impl UserDirectory {
    /// The demo directory: one username per customer.
    pub fn seed() -> Self {
        let entries = [
            ("user_pepsi", "Pepsi"),
            ("user_cocacola", "Coca Cola"),
            ("user_fanta", "Fanta"),
        ]
        .into_iter()
        .map(|(user_name, customer_name)| (user_name.to_owned(), customer_name.to_owned()))
        .collect();

        Self { entries }
    }

    /// The customer `user_name` belongs to, if the username is known.
    pub fn customer_for(&self, user_name: &str) -> Option<&str> {
        self.entries.get(user_name).map(String::as_str)
    }
}
