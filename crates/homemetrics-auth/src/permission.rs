//! Role-based authorization checks.
//!
//! Only role *names* are consulted. The permission strings carried by
//! each role are informational and never evaluated here.

use homemetrics_core::error::{HomeError, HomeResult};
use homemetrics_core::models::role::ADMIN_ROLE;
use homemetrics_core::models::user::User;

/// Whether `user` holds a role named `role_name` in its registration
/// snapshot.
pub fn has_role(user: &User, role_name: &str) -> bool {
    user.roles.iter().any(|role| role.name == role_name)
}

/// Fail with `AuthorizationDenied` unless `user` holds `required_role`.
pub fn check(user: &User, required_role: &str) -> HomeResult<()> {
    if has_role(user, required_role) {
        Ok(())
    } else {
        Err(HomeError::AuthorizationDenied {
            reason: format!(
                "user '{}' lacks the '{required_role}' role",
                user.username
            ),
        })
    }
}

pub fn require_admin(user: &User) -> HomeResult<()> {
    check(user, ADMIN_ROLE)
}
