//! Tolerances and validation mode shared by polygon construction and queries.

use crate::math::{Real, DEFAULT_EPSILON};

/// The maximum number of vertices of a polygon shape.
///
/// This bound is shared with contact-manifold and broad-phase code and fixes
/// the inline capacity of every vertex, normal and core-vertex array.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// The collision tolerance used by the constraint solver, in world units.
pub const LINEAR_SLOP: Real = 0.005;

/// The angular collision tolerance, in radians (two degrees).
pub const ANGULAR_SLOP: Real = 2.0 / 180.0 * core::f64::consts::PI as Real;

/// The distance by which the core polygon is inset from the polygon.
pub const TOI_SLOP: Real = 8.0 * LINEAR_SLOP;

/// Edges with a squared length below this value are degenerate.
pub const EDGE_EPSILON: Real = DEFAULT_EPSILON * DEFAULT_EPSILON;

/// Polygons with an area below this value are degenerate.
pub const AREA_EPSILON: Real = DEFAULT_EPSILON;

/// Tolerances and validation mode used when building a polygon shape.
///
/// The defaults are the process-wide constants of this module. The convexity
/// and winding checks only run when [`PolygonSettings::strict`] is `true`,
/// which is the default in builds with debug assertions. Vertex-count,
/// edge-length, area and core-vertex checks always run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonSettings {
    /// Minimum distance every vertex must keep from the lines of non-adjacent edges.
    pub linear_slop: Real,
    /// Minimum turning angle between two consecutive edges, in radians.
    pub angular_slop: Real,
    /// Distance by which each edge is moved inward to build the core polygon.
    pub toi_slop: Real,
    /// Whether the O(n²) convexity and O(n) winding checks run.
    pub strict: bool,
}

impl Default for PolygonSettings {
    fn default() -> Self {
        Self {
            linear_slop: LINEAR_SLOP,
            angular_slop: ANGULAR_SLOP,
            toi_slop: TOI_SLOP,
            strict: cfg!(debug_assertions),
        }
    }
}

impl PolygonSettings {
    /// Default tolerances with the convexity and winding checks enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Default tolerances with the convexity and winding checks disabled.
    pub fn relaxed() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Sets the linear slop.
    #[must_use]
    pub fn with_linear_slop(mut self, linear_slop: Real) -> Self {
        self.linear_slop = linear_slop;
        self
    }

    /// Sets the angular slop, in radians.
    #[must_use]
    pub fn with_angular_slop(mut self, angular_slop: Real) -> Self {
        self.angular_slop = angular_slop;
        self
    }

    /// Sets the core polygon inset distance.
    #[must_use]
    pub fn with_toi_slop(mut self, toi_slop: Real) -> Self {
        self.toi_slop = toi_slop;
        self
    }

    /// Enables or disables the convexity and winding checks.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
