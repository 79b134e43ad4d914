//! In-memory implementation of [`UserRepository`].
//!
//! Username lookup is a linear scan over the user map. The uniqueness
//! check and the insert happen under one write guard, so two
//! concurrent registrations of the same name cannot both succeed.

use chrono::Utc;
use homemetrics_core::error::HomeResult;
use homemetrics_core::models::user::{CreateUser, User};
use homemetrics_core::repository::UserRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;
use crate::graph::ResourceGraph;

#[derive(Clone)]
pub struct GraphUserRepository {
    graph: ResourceGraph,
}

impl GraphUserRepository {
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }
}

impl UserRepository for GraphUserRepository {
    async fn create(&self, input: CreateUser) -> HomeResult<User> {
        let mut state = self.graph.write().await;

        if state.username_taken(&input.username) {
            return Err(StoreError::Conflict {
                entity: "user",
                key: input.username,
            }
            .into());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            roles: state.resolve_roles(&input.roles),
            username: input.username,
            password: input.password,
            email: input.email,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        drop(state);

        info!(
            user_id = %user.id,
            username = %user.username,
            roles = ?user.roles.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            "User registered"
        );
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> HomeResult<User> {
        let state = self.graph.read().await;
        let user = state.users.get(&id).cloned().ok_or_else(|| StoreError::NotFound {
            entity: "user",
            id: id.to_string(),
        })?;
        Ok(user)
    }

    async fn get_by_username(&self, username: &str) -> HomeResult<User> {
        let state = self.graph.read().await;
        let user = state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "user",
                id: username.to_string(),
            })?;
        Ok(user)
    }

    async fn list(&self) -> HomeResult<Vec<User>> {
        let state = self.graph.read().await;
        Ok(state.users.values().cloned().collect())
    }
}
