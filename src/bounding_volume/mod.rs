//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;

#[doc(hidden)]
pub mod aabb;
mod aabb_polygon;
#[doc(hidden)]
pub mod bounding_volume;
#[doc(hidden)]
pub mod obb;
