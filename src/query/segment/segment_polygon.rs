use crate::math::Real;
use crate::query::{SegmentCast, SegmentIntersection};
use crate::shape::{PolygonShape, Segment};

impl SegmentCast for PolygonShape {
    /// Clips the segment against every edge half-plane, keeping `[lower, upper] ⊆ [0, max_lambda]`.
    ///
    /// Only edges whose normal opposes the segment direction can raise `lower`;
    /// the last one that does is the entry edge. Edges facing along the
    /// direction can only lower `upper`.
    fn cast_local_segment(
        &self,
        segment: &Segment,
        max_lambda: Real,
    ) -> Option<SegmentIntersection> {
        let d = segment.scaled_direction();
        let mut lower = 0.0;
        let mut upper = max_lambda;
        let mut entry = None;

        for (i, (normal, vertex)) in self.normals().iter().zip(self.vertices()).enumerate() {
            // The segment point at `lambda` is on the edge line when
            // `denominator * lambda == numerator`.
            let numerator = normal.dot(&(vertex - segment.a));
            let denominator = normal.dot(&d);

            if denominator == 0.0 {
                // Parallel to the edge, and fully outside of its half-plane.
                if numerator < 0.0 {
                    return None;
                }
            } else if denominator < 0.0 && numerator < lower * denominator {
                lower = numerator / denominator;
                entry = Some(i);
            } else if denominator > 0.0 && numerator < upper * denominator {
                upper = numerator / denominator;
            }

            if upper < lower {
                return None;
            }
        }

        entry.map(|i| SegmentIntersection::new(lower, *self.normals()[i], i))
    }
}
