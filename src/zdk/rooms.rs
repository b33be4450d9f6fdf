use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

use super::{Query, ZdkClient, ZdkError};

const DEFAULT_ROOM_KIND: u32 = 2;

/// Arguments for room creation. Optional fields are omitted from the wire
/// body so upstream applies its own defaults: capacity 32 (max 256), id a
/// fresh UUID, retention "keep forever".
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,
    pub kind: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// How long upstream keeps the room after it goes inactive. Sent as
    /// whole nanoseconds.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "retention_nanos")]
    pub retention: Option<Duration>,
}

impl Default for CreateRoom {
    fn default() -> CreateRoom {
        CreateRoom {
            id: None,
            kind: DEFAULT_ROOM_KIND,
            capacity: None,
            metadata: None,
            retention: None,
        }
    }
}

fn retention_nanos<S>(retention: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match retention {
        Some(d) => serializer.serialize_u64(d.as_nanos() as u64),
        None => serializer.serialize_none(),
    }
}

/// Partial room update; only set fields are touched upstream, each wrapped
/// in the `{"value": ...}` form the update endpoint expects.
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub capacity: Option<u32>,
    pub metadata: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
struct Patch<T> {
    value: T,
}

#[derive(Serialize)]
struct UpdateRoom {
    query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<Patch<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Patch<HashMap<String, String>>>,
}

#[derive(Serialize)]
struct RoomQuery {
    query: Query,
}

/// A room as upstream reports it. Fields this crate does not model are
/// kept in `extra` and relayed to the caller untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RoomsReply {
    #[serde(default)]
    rooms: Vec<Room>,
}

impl ZdkClient {
    pub async fn create_room(&self, room: CreateRoom) -> Result<Room, ZdkError> {
        let reply: RoomsReply = self.call(self.room_url("rooms", "Create"), room).await?;
        reply
            .rooms
            .into_iter()
            .next()
            .ok_or(ZdkError::Malformed("no room in create reply"))
    }

    pub async fn select_rooms(&self, ids: &[String]) -> Result<Vec<Room>, ZdkError> {
        let body = RoomQuery {
            query: Query::by_ids(ids),
        };
        let reply: RoomsReply = self.call(self.room_url("rooms", "Select"), body).await?;
        Ok(reply.rooms)
    }

    pub async fn update_room(&self, id: &str, patch: RoomPatch) -> Result<Vec<Room>, ZdkError> {
        let body = UpdateRoom {
            query: Query::by_ids(&[id.to_owned()]),
            capacity: patch.capacity.map(|value| Patch { value }),
            metadata: patch.metadata.map(|value| Patch { value }),
        };
        let reply: RoomsReply = self.call(self.room_url("rooms", "Update"), body).await?;
        Ok(reply.rooms)
    }

    pub async fn delete_rooms(&self, ids: &[String]) -> Result<Vec<Room>, ZdkError> {
        let body = RoomQuery {
            query: Query::by_ids(ids),
        };
        let reply: RoomsReply = self.call(self.room_url("rooms", "Delete"), body).await?;
        Ok(reply.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_room_wire_shape() {
        let room = CreateRoom {
            capacity: Some(32),
            metadata: Some(HashMap::from([("name".to_owned(), "test room".to_owned())])),
            retention: Some(Duration::from_secs(24 * 60 * 60)),
            ..CreateRoom::default()
        };

        assert_eq!(
            serde_json::to_value(&room).unwrap(),
            json!({
                "kind": 2,
                "capacity": 32,
                "metadata": {"name": "test room"},
                "retention": 86_400_000_000_000u64,
            }),
        );
    }

    #[test]
    fn create_room_omits_unset_fields() {
        assert_eq!(
            serde_json::to_value(CreateRoom::default()).unwrap(),
            json!({"kind": 2}),
        );
    }

    #[test]
    fn update_room_wraps_only_set_fields() {
        let body = UpdateRoom {
            query: Query::by_ids(&["r1".to_owned()]),
            capacity: Some(Patch { value: 64 }),
            metadata: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "query": {"conditions": [{"ids": ["r1"]}]},
                "capacity": {"value": 64},
            }),
        );
    }

    #[test]
    fn room_reply_relays_unmodeled_fields() {
        let room: Room =
            serde_json::from_value(json!({"id": "r1", "capacity": 32, "topology": "mesh"}))
                .unwrap();
        assert_eq!(room.id, "r1");
        assert_eq!(room.capacity, Some(32));

        assert_eq!(
            serde_json::to_value(&room).unwrap(),
            json!({"id": "r1", "capacity": 32, "topology": "mesh"}),
        );
    }
}
