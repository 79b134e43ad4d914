//! In-memory implementation of [`RoleRepository`].

use homemetrics_core::error::HomeResult;
use homemetrics_core::models::role::{CreateRole, Role};
use homemetrics_core::repository::RoleRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;
use crate::graph::ResourceGraph;

#[derive(Clone)]
pub struct GraphRoleRepository {
    graph: ResourceGraph,
}

impl GraphRoleRepository {
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }
}

impl RoleRepository for GraphRoleRepository {
    async fn create(&self, input: CreateRole) -> HomeResult<Role> {
        let mut state = self.graph.write().await;

        if state.roles.contains_key(&input.name) {
            return Err(StoreError::Conflict {
                entity: "role",
                key: input.name,
            }
            .into());
        }

        let role = Role {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            permissions: input.permissions,
        };
        state.roles.insert(role.name.clone(), role.clone());
        drop(state);

        info!(role = %role.name, permissions = role.permissions.len(), "Role created");
        Ok(role)
    }

    async fn get_by_name(&self, name: &str) -> HomeResult<Role> {
        let state = self.graph.read().await;
        let role = state.roles.get(name).cloned().ok_or_else(|| StoreError::NotFound {
            entity: "role",
            id: name.to_string(),
        })?;
        Ok(role)
    }

    async fn list(&self) -> HomeResult<Vec<Role>> {
        let state = self.graph.read().await;
        Ok(state.roles.values().cloned().collect())
    }
}
