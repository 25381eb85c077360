/*!
polyshape2d
===========

**polyshape2d** implements the validated convex polygon collision shape of a
2D rigid-body pipeline: construction and validation from a vertex list, the
derived structures used by collision code (edge normals, an oriented bounding
box, an inward-shrunk core polygon for time-of-impact queries), and the
queries the rest of the pipeline runs every step (point containment, segment
casting, bounding boxes, mass properties and support points).

```
# #[cfg(feature = "f32")] {
use polyshape2d::math::{Isometry, Point, Vector};
use polyshape2d::query::PointQuery;
use polyshape2d::shape::{PolygonDef, PolygonShape};

let def = PolygonDef::new().set_as_box(1.0, 1.0).density(1.0);
let shape = PolygonShape::new(&def).unwrap();
let pos = Isometry::new(Vector::new(3.0, 0.0), 0.0);

assert!(shape.contains_point(&pos, &Point::new(3.5, 0.5)));
assert_eq!(shape.compute_mass().mass, 4.0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod query;
pub mod settings;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Matrix2, Point2, Translation2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The matrix type.
    pub use Matrix2 as Matrix;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;

    /// The angular inertia of a rigid body.
    pub type AngularInertia<N> = N;
}
