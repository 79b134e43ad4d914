//! Request gate: authentication, user resolution and authorization in
//! front of every protected repository operation.
//!
//! Each operation runs the same pipeline: validate the bearer token,
//! load the caller by the token's username, check the required role,
//! parse ids and payloads, then touch the store. A failure at any step
//! returns before the store is mutated.

use homemetrics_core::error::HomeResult;
use homemetrics_core::id::parse_id;
use homemetrics_core::models::metric::{CreateMetric, Metric, MetricWithReadings};
use homemetrics_core::models::reading::{AddReading, MetricReading};
use homemetrics_core::models::role::{CreateRole, Role};
use homemetrics_core::models::room::{CreateRoom, Room};
use homemetrics_core::models::user::User;
use homemetrics_core::repository::{
    MetricRepository, ReadingRepository, RepositoryProvider, RoleRepository, RoomRepository,
    UserRepository,
};
use tracing::debug;

use crate::config::AuthConfig;
use crate::permission;
use crate::token;

pub struct RequestGate<P: RepositoryProvider> {
    repos: P,
    config: AuthConfig,
}

impl<P: RepositoryProvider> RequestGate<P> {
    pub fn new(repos: P, config: AuthConfig) -> Self {
        Self { repos, config }
    }

    /// Resolve the caller behind an `Authorization` header value.
    ///
    /// A bad or expired token yields `AuthenticationFailed`. A valid
    /// token whose user is no longer in the store yields `NotFound`.
    pub async fn authenticate(&self, authorization: Option<&str>) -> HomeResult<User> {
        let claims = token::validate(authorization, &self.config)?;
        let user = self.repos.users().get_by_username(&claims.username).await?;
        debug!(user_id = %user.id, username = %user.username, "Caller authenticated");
        Ok(user)
    }

    /// [`authenticate`](Self::authenticate), then require `role`.
    pub async fn authorize(&self, authorization: Option<&str>, role: &str) -> HomeResult<User> {
        let user = self.authenticate(authorization).await?;
        permission::check(&user, role)?;
        Ok(user)
    }

    async fn admin(&self, authorization: Option<&str>) -> HomeResult<User> {
        let user = self.authenticate(authorization).await?;
        permission::require_admin(&user)?;
        Ok(user)
    }

    // -- Users & roles ------------------------------------------------------

    pub async fn list_users(&self, authorization: Option<&str>) -> HomeResult<Vec<User>> {
        self.admin(authorization).await?;
        self.repos.users().list().await
    }

    pub async fn create_role(
        &self,
        authorization: Option<&str>,
        input: CreateRole,
    ) -> HomeResult<Role> {
        self.admin(authorization).await?;
        input.validate()?;
        self.repos.roles().create(input).await
    }

    // -- Rooms --------------------------------------------------------------

    pub async fn create_room(
        &self,
        authorization: Option<&str>,
        input: CreateRoom,
    ) -> HomeResult<Room> {
        self.admin(authorization).await?;
        self.repos.rooms().create(input).await
    }

    pub async fn list_rooms(&self, authorization: Option<&str>) -> HomeResult<Vec<Room>> {
        self.authenticate(authorization).await?;
        self.repos.rooms().list().await
    }

    pub async fn get_room(&self, authorization: Option<&str>, room_id: &str) -> HomeResult<Room> {
        self.authenticate(authorization).await?;
        let id = parse_id("room", room_id)?;
        self.repos.rooms().get_by_id(id).await
    }

    /// Delete a room and, transitively, its metrics and readings.
    pub async fn delete_room(&self, authorization: Option<&str>, room_id: &str) -> HomeResult<()> {
        self.admin(authorization).await?;
        let id = parse_id("room", room_id)?;
        self.repos.rooms().delete(id).await
    }

    // -- Metrics ------------------------------------------------------------

    pub async fn create_metric(
        &self,
        authorization: Option<&str>,
        input: CreateMetric,
    ) -> HomeResult<Metric> {
        self.admin(authorization).await?;
        input.validate()?;
        self.repos.metrics().create(input).await
    }

    pub async fn list_metrics(&self, authorization: Option<&str>) -> HomeResult<Vec<Metric>> {
        self.authenticate(authorization).await?;
        self.repos.metrics().list().await
    }

    pub async fn get_metric(
        &self,
        authorization: Option<&str>,
        metric_id: &str,
    ) -> HomeResult<MetricWithReadings> {
        self.authenticate(authorization).await?;
        let id = parse_id("metric", metric_id)?;
        self.repos.metrics().get_by_id(id).await
    }

    pub async fn delete_metric(
        &self,
        authorization: Option<&str>,
        metric_id: &str,
    ) -> HomeResult<()> {
        self.admin(authorization).await?;
        let id = parse_id("metric", metric_id)?;
        self.repos.metrics().delete(id).await
    }

    // -- Readings -----------------------------------------------------------

    pub async fn add_reading(
        &self,
        authorization: Option<&str>,
        metric_id: &str,
        input: AddReading,
    ) -> HomeResult<MetricReading> {
        self.authenticate(authorization).await?;
        let id = parse_id("metric", metric_id)?;
        input.validate()?;
        self.repos.readings().add(id, input).await
    }

    pub async fn list_readings(
        &self,
        authorization: Option<&str>,
        metric_id: &str,
    ) -> HomeResult<Vec<MetricReading>> {
        self.authenticate(authorization).await?;
        let id = parse_id("metric", metric_id)?;
        self.repos.readings().list(id).await
    }
}
