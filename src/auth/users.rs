//! In-memory user directory
//!
//! Users are seeded at start-up and afterwards only change role.

use parking_lot::RwLock;

use crate::error::{DashboardError, DashboardResult};
use crate::types::{Principal, Role, User, UserSummary};

use super::password::PasswordHasher;

/// Demo accounts created when seeding is enabled: (email, role, name)
pub const DEMO_USERS: &[(&str, Role, &str)] = &[
    ("admin@test.com", Role::Admin, "Admin User"),
    ("analyst@test.com", Role::Analyst, "Analyst User"),
    ("viewer@test.com", Role::Viewer, "Viewer User"),
];

/// Password shared by the demo accounts
pub const DEMO_PASSWORD: &str = "password";

/// Thread-safe user store keyed by email (login) and id (role changes)
#[derive(Default)]
pub struct UserDirectory {
    users: RwLock<Vec<User>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, hashing `password` with `hasher`
    ///
    /// Ids are assigned sequentially from 1. Emails must be unique.
    pub fn insert(
        &self,
        hasher: &dyn PasswordHasher,
        email: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> DashboardResult<UserSummary> {
        // Hash outside the lock; bcrypt is deliberately slow
        let password_hash = hasher.hash(password)?;

        let mut users = self.users.write();
        if users.iter().any(|u| u.email == email) {
            return Err(DashboardError::InvalidArgument(format!(
                "a user with email '{}' already exists",
                email
            )));
        }

        let user = User {
            id: (users.len() + 1).to_string(),
            email: email.to_string(),
            password_hash,
            role,
            name: name.to_string(),
        };
        let summary = user.summary();
        users.push(user);
        Ok(summary)
    }

    /// Insert the three demo accounts
    pub fn seed_demo_users(&self, hasher: &dyn PasswordHasher) -> DashboardResult<()> {
        for (email, role, name) in DEMO_USERS {
            self.insert(hasher, email, DEMO_PASSWORD, *role, name)?;
        }
        tracing::info!(count = DEMO_USERS.len(), "seeded demo users");
        Ok(())
    }

    /// Resolve an email/password pair to a principal
    ///
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    pub fn resolve_login(
        &self,
        hasher: &dyn PasswordHasher,
        email: &str,
        password: &str,
    ) -> DashboardResult<Principal> {
        let user = self.users.read().iter().find(|u| u.email == email).cloned();

        let verified = match &user {
            Some(user) => hasher.verify(password, &user.password_hash)?,
            None => false,
        };

        match user {
            Some(user) if verified => {
                tracing::info!(user = %user.email, role = %user.role, "login succeeded");
                Ok(user.principal())
            }
            _ => {
                tracing::warn!("login failed");
                Err(DashboardError::InvalidCredentials)
            }
        }
    }

    /// Current principal for a user id, if the user still exists
    pub fn principal_by_id(&self, id: &str) -> Option<Principal> {
        self.users
            .read()
            .iter()
            .find(|u| u.id == id)
            .map(User::principal)
    }

    pub fn list(&self) -> Vec<UserSummary> {
        self.users.read().iter().map(User::summary).collect()
    }

    pub fn update_role(&self, id: &str, role: Role) -> DashboardResult<UserSummary> {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DashboardError::user_not_found(id))?;
        user.role = role;
        tracing::info!(user = %user.email, role = %role, "role changed");
        Ok(user.summary())
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
