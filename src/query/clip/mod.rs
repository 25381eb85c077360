//! Various polygon clipping algorithms.

pub use self::clip_halfspace_polygon::clip_halfspace_polygon;

mod clip_halfspace_polygon;
