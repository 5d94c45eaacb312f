//! Room wireframe geometry
//!
//! Generates the line segments for an axis-aligned cubic room: full grids on
//! the floor and ceiling, partial grids on the left, right, and back walls.
//! The front plane stays open so the camera can look into the room.

use glam::Vec3;

/// A single line segment in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec3,
    pub to: Vec3,
}

impl Segment {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }
}

/// Axis-aligned cubic room centered at the origin
///
/// The half-extent is the distance from the room's center to any face along
/// an axis. Grid lines run at every integer coordinate from `-half_extent`
/// to `half_extent` inclusive.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    half_extent: i32,
}

impl Room {
    pub const DEFAULT_HALF_EXTENT: i32 = 5;

    pub fn new(half_extent: i32) -> Self {
        Self { half_extent }
    }

    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Number of grid coordinates per axis (`2 * half_extent + 1`)
    pub fn grid_lines(&self) -> usize {
        (2 * self.half_extent + 1) as usize
    }

    /// Full grid on the floor plane `y = -half_extent`
    pub fn floor_grid(&self) -> Vec<Segment> {
        let s = self.half_extent as f32;
        let mut segments = Vec::with_capacity(2 * self.grid_lines());
        for i in -self.half_extent..=self.half_extent {
            let t = i as f32;
            segments.push(Segment::new(Vec3::new(t, -s, -s), Vec3::new(t, -s, s)));
            segments.push(Segment::new(Vec3::new(-s, -s, t), Vec3::new(s, -s, t)));
        }
        segments
    }

    /// Full grid on the ceiling plane `y = half_extent`, symmetric to the floor
    pub fn ceiling_grid(&self) -> Vec<Segment> {
        let s = self.half_extent as f32;
        let mut segments = Vec::with_capacity(2 * self.grid_lines());
        for i in -self.half_extent..=self.half_extent {
            let t = i as f32;
            segments.push(Segment::new(Vec3::new(t, s, -s), Vec3::new(t, s, s)));
            segments.push(Segment::new(Vec3::new(-s, s, t), Vec3::new(s, s, t)));
        }
        segments
    }

    /// Partial grids on the left (`x = -half_extent`), right
    /// (`x = half_extent`), and back (`z = -half_extent`) walls
    ///
    /// The front plane `z = half_extent` is never drawn; the room is viewed
    /// through the open side.
    pub fn wall_grids(&self) -> Vec<Segment> {
        let s = self.half_extent as f32;
        let mut segments = Vec::with_capacity(6 * self.grid_lines());
        for i in -self.half_extent..=self.half_extent {
            let t = i as f32;

            // Left wall
            segments.push(Segment::new(Vec3::new(-s, -s, t), Vec3::new(-s, s, t)));
            segments.push(Segment::new(Vec3::new(-s, t, -s), Vec3::new(-s, t, s)));

            // Right wall
            segments.push(Segment::new(Vec3::new(s, -s, t), Vec3::new(s, s, t)));
            segments.push(Segment::new(Vec3::new(s, t, -s), Vec3::new(s, t, s)));

            // Back wall
            segments.push(Segment::new(Vec3::new(-s, t, -s), Vec3::new(s, t, -s)));
            segments.push(Segment::new(Vec3::new(t, -s, -s), Vec3::new(t, s, -s)));
        }
        segments
    }

    /// All room segments: floor, ceiling, then walls
    ///
    /// Pure function of the half-extent; every call produces the identical
    /// segment list.
    pub fn wireframe(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(10 * self.grid_lines());
        segments.extend(self.floor_grid());
        segments.extend(self.ceiling_grid());
        segments.extend(self.wall_grids());
        segments
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of coordinate axes in which the endpoints differ
    fn differing_axes(segment: &Segment) -> usize {
        let from = segment.from.to_array();
        let to = segment.to.to_array();
        from.iter().zip(to.iter()).filter(|(a, b)| a != b).count()
    }

    #[test]
    fn face_segment_counts() {
        let room = Room::new(5);
        assert_eq!(room.floor_grid().len(), 22);
        assert_eq!(room.ceiling_grid().len(), 22);
        assert_eq!(room.wall_grids().len(), 66);
        assert_eq!(room.wireframe().len(), 110);
    }

    #[test]
    fn segments_are_axis_aligned() {
        let room = Room::new(5);
        for segment in room.wireframe() {
            assert_eq!(
                differing_axes(&segment),
                1,
                "segment {:?} is not axis-aligned",
                segment
            );
        }
    }

    #[test]
    fn endpoints_stay_inside_the_room() {
        let room = Room::new(5);
        let s = room.half_extent() as f32;
        for segment in room.wireframe() {
            for coord in segment.from.to_array().iter().chain(segment.to.to_array().iter()) {
                assert!(
                    (-s..=s).contains(coord),
                    "coordinate {} outside [-{}, {}]",
                    coord,
                    s,
                    s
                );
            }
        }
    }

    #[test]
    fn wireframe_is_idempotent() {
        let room = Room::new(5);
        assert_eq!(room.wireframe(), room.wireframe());
    }

    #[test]
    fn front_plane_is_open() {
        let room = Room::new(5);
        let s = room.half_extent() as f32;
        for segment in room.wireframe() {
            assert!(
                !(segment.from.z == s && segment.to.z == s),
                "segment {:?} lies in the front plane",
                segment
            );
        }
    }

    #[test]
    fn counts_scale_with_half_extent() {
        for half_extent in [1, 2, 5, 8] {
            let room = Room::new(half_extent);
            let n = room.grid_lines();
            assert_eq!(room.wireframe().len(), 10 * n);
        }
    }

    #[test]
    fn default_room_matches_spec_size() {
        assert_eq!(Room::default().half_extent(), 5);
    }
}
