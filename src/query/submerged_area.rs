use crate::mass_properties::details;
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::clip;
use crate::settings::MAX_POLYGON_VERTICES;
use crate::shape::PolygonShape;

/// The part of a shape lying below a plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubmergedArea {
    /// The submerged area.
    pub area: Real,
    /// The world-space centroid of the submerged part.
    pub centroid: Point<Real>,
}

impl PolygonShape {
    /// Computes the area and centroid of the part of this polygon, placed at
    /// `pos`, that lies below the world-space plane `normal · x = offset`.
    ///
    /// `normal` must be a unit vector pointing out of the fluid. Returns `None`
    /// if nothing is submerged.
    pub fn compute_submerged_area(
        &self,
        normal: &Vector<Real>,
        offset: Real,
        pos: &Isometry<Real>,
    ) -> Option<SubmergedArea> {
        let local_normal = pos.inverse_transform_vector(normal);
        let local_offset = offset - normal.dot(&pos.translation.vector);

        if self
            .vertices()
            .iter()
            .all(|pt| local_normal.dot(&pt.coords) <= local_offset)
        {
            return Some(SubmergedArea {
                area: self.area(),
                centroid: self.world_centroid(pos),
            });
        }

        let clipped = clip::clip_halfspace_polygon::<{ MAX_POLYGON_VERTICES + 1 }>(
            &local_normal,
            local_offset,
            self.vertices(),
        )?;
        let (area, centroid) = details::polygon_area_and_centroid(&clipped);

        if area > 0.0 {
            Some(SubmergedArea {
                area,
                centroid: pos * centroid,
            })
        } else {
            None
        }
    }
}
