//! The in-memory resource graph.
//!
//! [`ResourceGraph`] is the single owner of every collection. All
//! five maps sit behind one `RwLock`; a mutation, cascades included,
//! holds the write guard from its first check to its last insert or
//! removal. State is volatile: nothing survives a restart.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use homemetrics_core::models::metric::Metric;
use homemetrics_core::models::reading::MetricReading;
use homemetrics_core::models::role::{Role, USER_ROLE};
use homemetrics_core::models::room::Room;
use homemetrics_core::models::user::User;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

/// Every collection of the graph. Only reachable through a lock guard.
#[derive(Debug, Default)]
pub(crate) struct GraphState {
    pub(crate) users: HashMap<Uuid, User>,
    /// Role catalog keyed by role name.
    pub(crate) roles: HashMap<String, Role>,
    pub(crate) rooms: HashMap<Uuid, Room>,
    pub(crate) metrics: HashMap<Uuid, Metric>,
    /// Readings grouped by owning metric id.
    pub(crate) readings: HashMap<Uuid, Vec<MetricReading>>,
}

/// What a cascade delete removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Removed {
    pub(crate) metrics: usize,
    pub(crate) readings: usize,
}

impl GraphState {
    fn seeded() -> Self {
        let roles = Role::defaults()
            .into_iter()
            .map(|role| (role.name.clone(), role))
            .collect();
        Self {
            roles,
            ..Default::default()
        }
    }

    pub(crate) fn username_taken(&self, username: &str) -> bool {
        self.users.values().any(|u| u.username == username)
    }

    /// Copy the catalog roles named in `names`.
    ///
    /// Unknown names are skipped and repeats collapse. When nothing
    /// resolves the `user` role is used instead.
    pub(crate) fn resolve_roles(&self, names: &[String]) -> Vec<Role> {
        let mut seen = HashSet::new();
        let mut roles: Vec<Role> = names
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .filter_map(|name| self.roles.get(name).cloned())
            .collect();

        if roles.is_empty() {
            roles.extend(self.roles.get(USER_ROLE).cloned());
        }
        roles
    }

    /// Remove a metric and its readings. `None` if the metric is absent.
    pub(crate) fn remove_metric(&mut self, id: Uuid) -> Option<Removed> {
        self.metrics.remove(&id)?;
        let readings = self.readings.remove(&id).map_or(0, |r| r.len());
        Some(Removed {
            metrics: 1,
            readings,
        })
    }

    /// Remove a room, its metrics and their readings. `None` if the
    /// room is absent.
    pub(crate) fn remove_room(&mut self, id: Uuid) -> Option<Removed> {
        self.rooms.remove(&id)?;

        let owned: Vec<Uuid> = self
            .metrics
            .values()
            .filter(|m| m.room_id == id)
            .map(|m| m.id)
            .collect();

        let mut removed = Removed::default();
        for metric_id in owned {
            if let Some(r) = self.remove_metric(metric_id) {
                removed.metrics += r.metrics;
                removed.readings += r.readings;
            }
        }
        Some(removed)
    }
}

/// Entity counts at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub users: usize,
    pub roles: usize,
    pub rooms: usize,
    pub metrics: usize,
    pub readings: usize,
}

/// Shared handle to the in-memory graph. Cloning is cheap and every
/// clone sees the same state.
#[derive(Clone)]
pub struct ResourceGraph {
    state: Arc<RwLock<GraphState>>,
}

impl ResourceGraph {
    /// Create an empty graph whose role catalog holds `admin` and `user`.
    pub fn new() -> Self {
        let state = GraphState::seeded();
        info!(roles = state.roles.len(), "Resource graph initialised");
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, GraphState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, GraphState> {
        self.state.write().await
    }

    pub async fn stats(&self) -> GraphStats {
        let state = self.read().await;
        GraphStats {
            users: state.users.len(),
            roles: state.roles.len(),
            rooms: state.rooms.len(),
            metrics: state.metrics.len(),
            readings: state.readings.values().map(Vec::len).sum(),
        }
    }
}

impl Default for ResourceGraph {
    fn default() -> Self {
        Self::new()
    }
}
