//! Segment casting related definitions and implementations.

#[doc(inline)]
pub use self::segment_cast::{SegmentCast, SegmentIntersection};

#[doc(hidden)]
pub mod segment_cast;
mod segment_polygon;
