//! Identity and authorization
//!
//! - [`rbac`] -- the static role/permission matrix.
//! - [`gate`] -- `authenticate` / `authorize` / `authorize_action` checks.
//! - [`password`] -- bcrypt password hashing behind [`PasswordHasher`].
//! - [`token`] -- JWT session tokens.
//! - [`users`] -- the user directory and login resolution.

pub mod gate;
pub mod password;
pub mod rbac;
pub mod token;
pub mod users;

pub use gate::{authenticate, authorize, authorize_action, guarded, Requirement};
pub use password::{BcryptHasher, PasswordHasher};
pub use rbac::has_permission;
pub use token::{Claims, JwtAuth};
pub use users::UserDirectory;
