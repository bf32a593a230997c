//! Session issuance and resolution.
//!
//! One login equals one session: the store only ever grows, entries are
//! never mutated, and there is no expiry. That is the contract of the demo
//! service this crate reimplements, so it is kept rather than "fixed".

mod id;
pub use id::Id;

use dashmap::DashMap;

/// The single source of truth for "who is logged in".
///
/// Maps issued session identifiers to the customer name they were issued
/// for. Constructed once at service startup and shared by handle; reads and
/// inserts are safe under concurrent workers, guarded by the map's shards.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Id, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Issues a fresh identifier bound to `customer_name` and records it.
    ///
    /// Every call produces an independent new session; repeated logins are
    /// deliberately not de-duplicated.
    pub fn issue(&self, customer_name: &str) -> Id {
        let id = Id::default();
        self.sessions.insert(id, customer_name.to_owned());
        id
    }

    /// Looks up the customer a session was issued for.
    ///
    /// Pure lookup; an unknown identifier is the only failure mode.
    pub fn resolve(&self, id: &Id) -> Option<String> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
