//! Role domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HomeError, HomeResult};

/// Name of the seeded role that passes every administrative gate.
pub const ADMIN_ROLE: &str = "admin";
/// Name of the seeded role assigned when registration names no known role.
pub const USER_ROLE: &str = "user";

/// A named grant. The name is the catalog key.
///
/// Users store copies of roles taken when they register, so a role's
/// permission list is frozen into each holder at that moment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CreateRole {
    pub fn validate(&self) -> HomeResult<()> {
        if self.name.trim().is_empty() {
            return Err(HomeError::validation("role name is required"));
        }
        Ok(())
    }
}

impl Role {
    /// The two roles present in every fresh catalog.
    pub fn defaults() -> Vec<Role> {
        vec![
            Role {
                id: Uuid::new_v4(),
                name: ADMIN_ROLE.into(),
                description: "Administrator role with full access".into(),
                permissions: [
                    "read",
                    "write",
                    "delete",
                    "manage_users",
                    "manage_roles",
                    "manage_metrics",
                    "manage_rooms",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            },
            Role {
                id: Uuid::new_v4(),
                name: USER_ROLE.into(),
                description: "Regular user role".into(),
                permissions: vec!["read".into(), "write".into()],
            },
        ]
    }
}
