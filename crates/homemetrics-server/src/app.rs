//! Wiring of the core components over one shared graph.

use homemetrics_auth::{AuthService, RequestGate};
use homemetrics_store::repository::GraphUserRepository;
use homemetrics_store::{GraphRepositories, ResourceGraph};

use crate::config::ServerConfig;

/// Everything a transport boundary needs to serve requests.
pub struct App {
    pub graph: ResourceGraph,
    /// Public operations: register and login.
    pub auth: AuthService<GraphUserRepository>,
    /// Protected operations.
    pub gate: RequestGate<GraphRepositories>,
}

impl App {
    pub fn new(config: ServerConfig) -> Self {
        let graph = ResourceGraph::new();
        Self {
            auth: AuthService::new(GraphUserRepository::new(graph.clone()), config.auth.clone()),
            gate: RequestGate::new(GraphRepositories::new(graph.clone()), config.auth),
            graph,
        }
    }
}
