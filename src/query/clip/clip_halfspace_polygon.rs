use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// Cuts a polygon with the given half-space.
///
/// A point `pt` is kept if `normal.dot(&pt.coords) <= offset`. Edges crossing
/// the boundary line are cut at the crossing point, interpolated from the
/// signed depths of their endpoints. The input must be convex for the output to
/// fit: a convex polygon loses at least one vertex for every one it gains,
/// plus one.
///
/// Returns `None` if the clipped polygon does not fit in `CAP` vertices.
pub fn clip_halfspace_polygon<const CAP: usize>(
    normal: &Vector<Real>,
    offset: Real,
    polygon: &[Point<Real>],
) -> Option<ArrayVec<Point<Real>, CAP>> {
    let mut result = ArrayVec::new();

    let Some(last_pt) = polygon.last() else {
        return Some(result);
    };

    let depth = |pt: &Point<Real>| normal.dot(&pt.coords) - offset;
    let mut prev_pt = last_pt;
    let mut prev_depth = depth(prev_pt);

    for pt in polygon {
        let pt_depth = depth(pt);

        if (prev_depth <= 0.0) != (pt_depth <= 0.0) {
            // We crossed the line, so we need to cut the edge. An endpoint
            // lying on the line is already pushed as a kept vertex.
            let t = prev_depth / (prev_depth - pt_depth);
            if t > 0.0 && t < 1.0 {
                result.try_push(prev_pt + (pt - prev_pt) * t).ok()?;
            }
        }

        if pt_depth <= 0.0 {
            result.try_push(*pt).ok()?;
        }

        prev_pt = pt;
        prev_depth = pt_depth;
    }

    Some(result)
}
