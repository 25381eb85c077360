use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use crate::settings::AREA_EPSILON;
use crate::utils;

impl MassProperties {
    /// Computes the mass properties of a counter-clockwise convex polygon.
    ///
    /// The inertia is expressed about the local origin.
    ///
    /// # Panics
    ///
    /// Panics if the area of the polygon is not above [`AREA_EPSILON`]: a
    /// degenerate polygon has no meaningful mass and must be rejected before
    /// reaching this point.
    pub fn from_polygon(density: Real, vertices: &[Point<Real>]) -> MassProperties {
        let (area, com, unit_inertia) = polygon_area_centroid_and_inertia(vertices);

        assert!(
            area > AREA_EPSILON,
            "Mass properties of a degenerate polygon (area = {area})."
        );

        Self::new(com, area * density, unit_inertia * density)
    }
}

/// Computes the signed area, the centroid, and the unit-density second moment
/// about the origin of a closed polygon.
///
/// The polygon is triangulated as a fan around the local origin. For each
/// triangle `(0, p1, p2)` the signed area is `cross(p1, p2) / 2`, the centroid
/// contribution is `area * (p1 + p2) / 3`, and the integral of `x² + y²` is
/// `cross(p1, p2) * (|p1|² + p1·p2 + |p2|²) / 12`. The result does not depend
/// on the fan apex beyond rounding.
///
/// Counter-clockwise polygons have a positive area. If the area is exactly
/// zero the returned centroid is the origin.
pub fn polygon_area_centroid_and_inertia(vertices: &[Point<Real>]) -> (Real, Point<Real>, Real) {
    const INV3: Real = 1.0 / 3.0;

    let mut area = 0.0;
    let mut center = Point::origin();
    let mut inertia = 0.0;

    for (i, p1) in vertices.iter().enumerate() {
        let p2 = &vertices[(i + 1) % vertices.len()];
        let e1 = p1.coords;
        let e2 = p2.coords;

        let d = utils::perp(&e1, &e2);
        let triangle_area = 0.5 * d;
        area += triangle_area;
        center += (e1 + e2) * (triangle_area * INV3);

        let intx2 = e1.x * e1.x + e2.x * e1.x + e2.x * e2.x;
        let inty2 = e1.y * e1.y + e2.y * e1.y + e2.y * e2.y;
        inertia += (0.25 * INV3 * d) * (intx2 + inty2);
    }

    if area != 0.0 {
        center /= area;
    }

    (area, center, inertia)
}

/// Computes the signed area and the centroid of a closed polygon.
///
/// See [`polygon_area_centroid_and_inertia`].
pub fn polygon_area_and_centroid(vertices: &[Point<Real>]) -> (Real, Point<Real>) {
    let (area, center, _) = polygon_area_centroid_and_inertia(vertices);
    (area, center)
}
