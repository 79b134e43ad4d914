//! In-memory implementation of [`RoomRepository`].

use chrono::Utc;
use homemetrics_core::error::HomeResult;
use homemetrics_core::models::room::{CreateRoom, Room};
use homemetrics_core::repository::RoomRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;
use crate::graph::ResourceGraph;

#[derive(Clone)]
pub struct GraphRoomRepository {
    graph: ResourceGraph,
}

impl GraphRoomRepository {
    pub fn new(graph: ResourceGraph) -> Self {
        Self { graph }
    }
}

impl RoomRepository for GraphRoomRepository {
    async fn create(&self, input: CreateRoom) -> HomeResult<Room> {
        let now = Utc::now();
        let room = Room {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };

        self.graph.write().await.rooms.insert(room.id, room.clone());

        info!(room_id = %room.id, name = %room.name, "Room created");
        Ok(room)
    }

    async fn get_by_id(&self, id: Uuid) -> HomeResult<Room> {
        let state = self.graph.read().await;
        let room = state.rooms.get(&id).cloned().ok_or_else(|| StoreError::NotFound {
            entity: "room",
            id: id.to_string(),
        })?;
        Ok(room)
    }

    async fn list(&self) -> HomeResult<Vec<Room>> {
        let state = self.graph.read().await;
        Ok(state.rooms.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> HomeResult<()> {
        let removed = self
            .graph
            .write()
            .await
            .remove_room(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "room",
                id: id.to_string(),
            })?;

        info!(
            room_id = %id,
            metrics = removed.metrics,
            readings = removed.readings,
            "Room deleted"
        );
        Ok(())
    }
}
