//! Room inventory.
//!
//! Rooms are immutable reference data: they are seeded into the store once
//! and only ever read by the booking core.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier of a room in the catalog.
pub type RoomId = i64;

/// A bookable room.
///
/// # Examples
///
/// ```
/// use bookings::Room;
///
/// let room = Room::new(1, "General's Quarters");
/// assert_eq!(room.id(), 1);
/// assert_eq!(room.name(), "General's Quarters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
}

impl Room {
    /// Creates a new room.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The rooms seeded into a fresh store when no others are configured.
#[must_use]
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(1, "General's Quarters"),
        Room::new(2, "Major's Suite"),
    ]
}

/// Read-only lookup of rooms.
///
/// Implementations must list rooms in catalog insertion order, which is the
/// order availability search reports them in.
pub trait RoomCatalog {
    /// Lists every room in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list(&self) -> Result<Vec<Room>>;

    /// Looks up a room by id, returning `None` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, room_id: RoomId) -> Result<Option<Room>>;
}

impl RoomCatalog for [Room] {
    fn list(&self) -> Result<Vec<Room>> {
        Ok(self.to_vec())
    }

    fn get(&self, room_id: RoomId) -> Result<Option<Room>> {
        Ok(self.iter().find(|room| room.id == room_id).cloned())
    }
}

impl RoomCatalog for Vec<Room> {
    fn list(&self) -> Result<Vec<Room>> {
        RoomCatalog::list(self.as_slice())
    }

    fn get(&self, room_id: RoomId) -> Result<Option<Room>> {
        RoomCatalog::get(self.as_slice(), room_id)
    }
}
