//! Shapes supported by polyshape.

pub use self::polygon::PolygonShape;
pub use self::polygon_def::PolygonDef;
pub use self::polygon_error::PolygonShapeError;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod polygon;
mod polygon_def;
mod polygon_error;
mod segment;
#[doc(hidden)]
pub mod support_map;
