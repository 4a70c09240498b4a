//! Authorization gate
//!
//! The gate only checks; it never touches the repository. Read and write
//! paths wrap the same underlying operation with different [`Requirement`]s
//! through [`guarded`].

use crate::error::{DashboardError, DashboardResult};
use crate::types::{Action, Principal, Role};

use super::rbac::has_permission;

/// Roles allowed to create events through the role-list gate
pub const EVENT_AUTHORS: &[Role] = &[Role::Admin, Role::Analyst];

/// Roles allowed to change other users' roles
pub const ADMINS_ONLY: &[Role] = &[Role::Admin];

/// What a caller must satisfy before an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any resolved principal
    Authenticated,
    /// Principal's role is in the list
    AnyRole(&'static [Role]),
    /// Principal's role grants the action in the permission matrix
    Permission(Action),
}

impl Requirement {
    /// Resolve `principal` against this requirement
    pub fn check<'a>(&self, principal: Option<&'a Principal>) -> DashboardResult<&'a Principal> {
        let principal = authenticate(principal)?;
        match self {
            Requirement::Authenticated => Ok(principal),
            Requirement::AnyRole(roles) => authorize(principal, roles),
            Requirement::Permission(action) => authorize_action(principal, *action),
        }
    }
}

/// Fail with `Unauthenticated` when no principal was resolved
pub fn authenticate(principal: Option<&Principal>) -> DashboardResult<&Principal> {
    principal.ok_or(DashboardError::Unauthenticated)
}

/// Fail with `Forbidden` unless the principal's role is in `allowed`
pub fn authorize<'a>(principal: &'a Principal, allowed: &[Role]) -> DashboardResult<&'a Principal> {
    if allowed.contains(&principal.role) {
        Ok(principal)
    } else {
        tracing::warn!(
            user = %principal.email,
            role = %principal.role,
            "role not in allowed set"
        );
        Err(DashboardError::Forbidden(format!(
            "role '{}' is not permitted for this operation",
            principal.role
        )))
    }
}

/// Fail with `Forbidden` unless the matrix grants `action` to the principal's role
pub fn authorize_action(principal: &Principal, action: Action) -> DashboardResult<&Principal> {
    if has_permission(principal.role, action) {
        Ok(principal)
    } else {
        tracing::warn!(
            user = %principal.email,
            role = %principal.role,
            action = %action,
            "permission denied"
        );
        Err(DashboardError::Forbidden(format!(
            "role '{}' may not {}",
            principal.role, action
        )))
    }
}

/// Run `op` only if `principal` satisfies `requirement`
pub fn guarded<T, F>(
    principal: Option<&Principal>,
    requirement: Requirement,
    op: F,
) -> DashboardResult<T>
where
    F: FnOnce(&Principal) -> DashboardResult<T>,
{
    let principal = requirement.check(principal)?;
    op(principal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> Principal {
        Principal {
            id: "1".to_string(),
            email: format!("{}@test.com", role),
            name: "Test".to_string(),
            role,
        }
    }

    /// Every subset of the three roles
    fn all_role_sets() -> Vec<Vec<Role>> {
        (0u8..8)
            .map(|mask| {
                Role::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, r)| *r)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_authorize_forbidden_iff_role_not_allowed() {
        for role in Role::ALL {
            let p = principal(role);
            for allowed in all_role_sets() {
                let result = authorize(&p, &allowed);
                if allowed.contains(&role) {
                    assert_eq!(result.unwrap(), &p);
                } else {
                    assert!(matches!(result, Err(DashboardError::Forbidden(_))));
                }
            }
        }
    }

    #[test]
    fn test_authorize_action_follows_matrix() {
        for role in Role::ALL {
            let p = principal(role);
            for action in Action::ALL {
                assert_eq!(
                    authorize_action(&p, action).is_ok(),
                    has_permission(role, action)
                );
            }
        }
    }

    #[test]
    fn test_missing_principal_is_unauthenticated_not_forbidden() {
        for requirement in [
            Requirement::Authenticated,
            Requirement::AnyRole(ADMINS_ONLY),
            Requirement::Permission(Action::Read),
        ] {
            assert_eq!(requirement.check(None), Err(DashboardError::Unauthenticated));
        }
    }

    #[test]
    fn test_guarded_skips_operation_when_denied() {
        let viewer = principal(Role::Viewer);
        let mut ran = false;
        let result: DashboardResult<()> = guarded(
            Some(&viewer),
            Requirement::Permission(Action::Delete),
            |_| {
                ran = true;
                Ok(())
            },
        );
        assert!(matches!(result, Err(DashboardError::Forbidden(_))));
        assert!(!ran);
    }

    #[test]
    fn test_same_operation_under_two_gates() {
        let analyst = principal(Role::Analyst);
        let op = |p: &Principal| -> DashboardResult<String> { Ok(p.email.clone()) };

        let read = guarded(Some(&analyst), Requirement::Permission(Action::Read), op);
        let delete = guarded(Some(&analyst), Requirement::Permission(Action::Delete), op);
        let author = guarded(Some(&analyst), Requirement::AnyRole(EVENT_AUTHORS), op);

        assert_eq!(read.unwrap(), "analyst@test.com");
        assert!(matches!(delete, Err(DashboardError::Forbidden(_))));
        assert!(author.is_ok());
    }
}
