//! Non-persistent geometric queries.
//!
//! Every query takes the shape pose as an argument: shapes never store their
//! own world transform.

pub use self::point::PointQuery;
pub use self::segment::{SegmentCast, SegmentIntersection};
pub use self::submerged_area::SubmergedArea;

pub mod clip;
pub mod point;
pub mod segment;
mod submerged_area;
