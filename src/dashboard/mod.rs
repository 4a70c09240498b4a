//! Dashboard - gated entry points
//!
//! This module wires the authorization gate in front of the event store,
//! the query engine and the statistics engine. Each public method is one
//! API operation and takes the caller as `Option<&Principal>`, so a missing
//! principal surfaces as `Unauthenticated` from the gate itself.

mod accounts;
mod events;

use chrono::{DateTime, Utc};

use crate::auth::{JwtAuth, PasswordHasher, UserDirectory};
use crate::error::{DashboardError, DashboardResult};
use crate::store::{seed, EventStore};
use crate::types::Principal;

pub use accounts::Session;

/// Event store, user directory and credential primitives behind one gate
pub struct Dashboard {
    pub(crate) events: EventStore,
    pub(crate) users: UserDirectory,
    pub(crate) tokens: JwtAuth,
    pub(crate) hasher: Box<dyn PasswordHasher>,
}

impl Dashboard {
    /// Create an empty dashboard
    pub fn new(tokens: JwtAuth, hasher: impl PasswordHasher + 'static) -> Self {
        Self {
            events: EventStore::new(),
            users: UserDirectory::new(),
            tokens,
            hasher: Box::new(hasher),
        }
    }

    /// Load the demo users and the demo events (ages relative to `now`)
    pub fn seed_demo_data(&self, now: DateTime<Utc>) -> DashboardResult<()> {
        self.users.seed_demo_users(self.hasher.as_ref())?;
        seed::load_demo_events(&self.events, now)?;
        Ok(())
    }

    /// Resolve a session token to the user's current principal
    ///
    /// The role comes from the directory, not the token, so role changes
    /// apply from the next request on.
    pub fn resolve_token(&self, token: &str) -> DashboardResult<Principal> {
        let claims = self.tokens.validate_authorization(token)?;
        self.users
            .principal_by_id(&claims.sub)
            .ok_or(DashboardError::Unauthenticated)
    }

    /// Session lifetime in seconds
    pub fn token_ttl(&self) -> i64 {
        self.tokens.token_ttl
    }

    pub fn event_store(&self) -> &EventStore {
        &self.events
    }

    pub fn user_directory(&self) -> &UserDirectory {
        &self.users
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }
}
