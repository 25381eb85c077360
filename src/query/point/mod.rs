//! Point inclusion tests.

#[doc(inline)]
pub use self::point_query::PointQuery;

#[doc(hidden)]
pub mod point_query;
mod point_polygon;
