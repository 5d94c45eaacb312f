//! Scene description
//!
//! The static world the viewer draws every frame: the wireframe room and the
//! camera looking into it. Nothing here mutates after startup.

pub mod camera;
pub mod room;

pub use camera::RoomCamera;
pub use room::{Room, Segment};

/// The viewer's read-only scene
pub struct Scene {
    pub room: Room,
    pub camera: RoomCamera,
}

impl Scene {
    pub fn new(room: Room, camera: RoomCamera) -> Self {
        Self { room, camera }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Room::default(), RoomCamera::default())
    }
}
