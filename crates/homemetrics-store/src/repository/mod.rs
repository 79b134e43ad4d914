//! In-memory implementations of the `homemetrics-core` repository
//! traits. Every repository is a thin handle onto the same
//! [`ResourceGraph`].

mod metric;
mod reading;
mod role;
mod room;
mod user;

pub use metric::GraphMetricRepository;
pub use reading::GraphReadingRepository;
pub use role::GraphRoleRepository;
pub use room::GraphRoomRepository;
pub use user::GraphUserRepository;

use homemetrics_core::repository::RepositoryProvider;

use crate::graph::ResourceGraph;

/// All five repositories over one shared graph.
#[derive(Clone)]
pub struct GraphRepositories {
    users: GraphUserRepository,
    roles: GraphRoleRepository,
    rooms: GraphRoomRepository,
    metrics: GraphMetricRepository,
    readings: GraphReadingRepository,
}

impl GraphRepositories {
    pub fn new(graph: ResourceGraph) -> Self {
        Self {
            users: GraphUserRepository::new(graph.clone()),
            roles: GraphRoleRepository::new(graph.clone()),
            rooms: GraphRoomRepository::new(graph.clone()),
            metrics: GraphMetricRepository::new(graph.clone()),
            readings: GraphReadingRepository::new(graph),
        }
    }
}

impl RepositoryProvider for GraphRepositories {
    type Users = GraphUserRepository;
    type Roles = GraphRoleRepository;
    type Rooms = GraphRoomRepository;
    type Metrics = GraphMetricRepository;
    type Readings = GraphReadingRepository;

    fn users(&self) -> &Self::Users {
        &self.users
    }

    fn roles(&self) -> &Self::Roles {
        &self.roles
    }

    fn rooms(&self) -> &Self::Rooms {
        &self.rooms
    }

    fn metrics(&self) -> &Self::Metrics {
        &self.metrics
    }

    fn readings(&self) -> &Self::Readings {
        &self.readings
    }
}
