//! Static role → permission matrix
//!
//! | Role    | read | create | edit | delete | manage_users |
//! |---------|------|--------|------|--------|--------------|
//! | admin   |  x   |   x    |  x   |   x    |      x       |
//! | analyst |  x   |   x    |  x   |        |              |
//! | viewer  |  x   |        |      |        |              |

use crate::types::{Action, Role};

/// Role to allowed actions. Pairs not listed here are denied.
pub const PERMISSION_MATRIX: &[(Role, &[Action])] = &[
    (
        Role::Admin,
        &[
            Action::Read,
            Action::Create,
            Action::Edit,
            Action::Delete,
            Action::ManageUsers,
        ],
    ),
    (Role::Analyst, &[Action::Read, Action::Create, Action::Edit]),
    (Role::Viewer, &[Action::Read]),
];

/// Actions granted to `role`
pub fn permissions_for(role: Role) -> &'static [Action] {
    PERMISSION_MATRIX
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// Pure lookup against [`PERMISSION_MATRIX`]
pub fn has_permission(role: Role, action: Action) -> bool {
    permissions_for(role).contains(&action)
}

/// Roles that are granted `action`
pub fn roles_with(action: Action) -> Vec<Role> {
    PERMISSION_MATRIX
        .iter()
        .filter(|(_, actions)| actions.contains(&action))
        .map(|(role, _)| *role)
        .collect()
}
