//! Login and user administration

use serde::Serialize;

use crate::auth::gate::{Requirement, ADMINS_ONLY};
use crate::auth::guarded;
use crate::error::DashboardResult;
use crate::types::{Action, Principal, Role, UserSummary};

use super::Dashboard;

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: Principal,
    #[serde(skip)]
    pub token: String,
}

impl Dashboard {
    /// Check credentials and issue a session token
    pub fn login(&self, email: &str, password: &str) -> DashboardResult<Session> {
        let user = self
            .users
            .resolve_login(self.hasher.as_ref(), email, password)?;
        let token = self.tokens.issue(&user)?;
        Ok(Session { user, token })
    }

    /// The caller itself, for any authenticated principal
    pub fn current_user(&self, principal: Option<&Principal>) -> DashboardResult<Principal> {
        guarded(principal, Requirement::Authenticated, |p| Ok(p.clone()))
    }

    /// All users without credentials (`manage_users`)
    pub fn list_users(&self, principal: Option<&Principal>) -> DashboardResult<Vec<UserSummary>> {
        guarded(
            principal,
            Requirement::Permission(Action::ManageUsers),
            |_| Ok(self.users.list()),
        )
    }

    /// Change another user's role (admins only)
    ///
    /// The gate runs before `role` is parsed, so a viewer sending garbage
    /// gets `Forbidden`, not `InvalidArgument`.
    pub fn change_role(
        &self,
        principal: Option<&Principal>,
        user_id: &str,
        role: &str,
    ) -> DashboardResult<UserSummary> {
        guarded(principal, Requirement::AnyRole(ADMINS_ONLY), |admin| {
            let role: Role = role.parse()?;
            tracing::info!(by = %admin.email, user_id = %user_id, role = %role, "changing role");
            self.users.update_role(user_id, role)
        })
    }
}
