//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations own their
//! synchronization; callers never see a partially applied mutation.
//! Listing operations make no ordering guarantee.

use uuid::Uuid;

use crate::error::HomeResult;
use crate::models::{
    metric::{CreateMetric, Metric, MetricWithReadings},
    reading::{AddReading, MetricReading},
    role::{CreateRole, Role},
    room::{CreateRoom, Room},
    user::{CreateUser, User},
};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    /// Register a user.
    ///
    /// Fails with `AlreadyExists` when the username is taken. Requested
    /// role names missing from the catalog are dropped; if none resolve
    /// the user receives the `user` role.
    fn create(&self, input: CreateUser) -> impl Future<Output = HomeResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HomeResult<User>> + Send;
    fn get_by_username(&self, username: &str) -> impl Future<Output = HomeResult<User>> + Send;
    fn list(&self) -> impl Future<Output = HomeResult<Vec<User>>> + Send;
}

pub trait RoleRepository: Send + Sync {
    /// Add a role to the catalog. Fails with `AlreadyExists` on a
    /// duplicate name.
    fn create(&self, input: CreateRole) -> impl Future<Output = HomeResult<Role>> + Send;
    fn get_by_name(&self, name: &str) -> impl Future<Output = HomeResult<Role>> + Send;
    fn list(&self) -> impl Future<Output = HomeResult<Vec<Role>>> + Send;
}

// ---------------------------------------------------------------------------
// Household graph: Room -> Metric -> Reading
// ---------------------------------------------------------------------------

pub trait RoomRepository: Send + Sync {
    fn create(&self, input: CreateRoom) -> impl Future<Output = HomeResult<Room>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HomeResult<Room>> + Send;
    fn list(&self) -> impl Future<Output = HomeResult<Vec<Room>>> + Send;
    /// Delete a room together with its metrics and their readings.
    fn delete(&self, id: Uuid) -> impl Future<Output = HomeResult<()>> + Send;
}

pub trait MetricRepository: Send + Sync {
    /// Fails with `NotFound` when `input.room_id` does not resolve.
    fn create(&self, input: CreateMetric) -> impl Future<Output = HomeResult<Metric>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HomeResult<MetricWithReadings>> + Send;
    fn list(&self) -> impl Future<Output = HomeResult<Vec<Metric>>> + Send;
    /// Delete a metric together with its readings.
    fn delete(&self, id: Uuid) -> impl Future<Output = HomeResult<()>> + Send;
}

pub trait ReadingRepository: Send + Sync {
    /// Record a reading. A missing timestamp defaults to the current time.
    fn add(
        &self,
        metric_id: Uuid,
        input: AddReading,
    ) -> impl Future<Output = HomeResult<MetricReading>> + Send;
    /// Fails with `NotFound` when the metric does not exist, even if it
    /// used to.
    fn list(&self, metric_id: Uuid) -> impl Future<Output = HomeResult<Vec<MetricReading>>> + Send;
}

/// Access to one coherent set of repositories sharing the same state.
pub trait RepositoryProvider: Send + Sync {
    type Users: UserRepository;
    type Roles: RoleRepository;
    type Rooms: RoomRepository;
    type Metrics: MetricRepository;
    type Readings: ReadingRepository;

    fn users(&self) -> &Self::Users;
    fn roles(&self) -> &Self::Roles;
    fn rooms(&self) -> &Self::Rooms;
    fn metrics(&self) -> &Self::Metrics;
    fn readings(&self) -> &Self::Readings;
}
