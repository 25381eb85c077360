//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::cross::perp;
pub(crate) use self::inv::inv;
pub use self::isometry_ops::IsometryOps;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod ccw_face_normal;
mod cross;
mod inv;
mod isometry_ops;
mod point_cloud_support_point;
