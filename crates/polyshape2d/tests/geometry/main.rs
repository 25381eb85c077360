#[macro_use]
extern crate approx;

mod polygon_construction;
mod polygon_properties;
mod support_point;

use polyshape2d::math::{Isometry, Point, Real, Vector};
use polyshape2d::shape::{PolygonDef, PolygonShape};

pub(crate) fn unit_square(density: Real) -> PolygonShape {
    let def = PolygonDef::from_vertices(&[
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ])
    .unwrap()
    .density(density);
    PolygonShape::new(&def).unwrap()
}

pub(crate) fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

/// A strictly convex polygon with 3 to 8 vertices on a jittered circle.
pub(crate) fn random_polygon(rng: &mut oorandom::Rand32) -> PolygonShape {
    let count = 3 + rng.rand_range(0..6) as usize;
    let radius = rand_range(rng, 1.0, 3.0);
    let center = Vector::new(rand_range(rng, -2.0, 2.0), rand_range(rng, -2.0, 2.0));
    let spacing = core::f64::consts::TAU as Real / count as Real;
    let start = rand_range(rng, 0.0, spacing);

    let mut def = PolygonDef::new().density(rand_range(rng, 0.1, 5.0));
    for i in 0..count {
        let angle = start + spacing * i as Real + rand_range(rng, -0.25, 0.25) * spacing;
        let pt = Point::new(angle.cos(), angle.sin()) * radius + center;
        def.push_vertex(pt).unwrap();
    }

    PolygonShape::new(&def).unwrap()
}

pub(crate) fn random_isometry(rng: &mut oorandom::Rand32) -> Isometry<Real> {
    Isometry::new(
        Vector::new(rand_range(rng, -50.0, 50.0), rand_range(rng, -50.0, 50.0)),
        rand_range(rng, -3.2, 3.2),
    )
}
