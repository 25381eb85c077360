use crate::math::Real;

/// Indicates a polygon definition that violates the requirements of a [`PolygonShape`].
///
/// No shape is produced when construction fails: these describe contract
/// violations of the input, not runtime conditions to recover from.
///
/// [`PolygonShape`]: crate::shape::PolygonShape
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PolygonShapeError {
    /// The vertex count is outside of `3..=max`.
    #[error("a polygon must have between 3 and {max} vertices, found {count}.")]
    VertexCount {
        /// The number of vertices provided.
        count: usize,
        /// The maximum number of vertices.
        max: usize,
    },
    /// The edge starting at the given vertex has a near-zero length.
    #[error("the edge starting at vertex {0} is degenerate.")]
    DegenerateEdge(usize),
    /// A vertex does not lie strictly inside the half-plane of an edge.
    #[error("the vertex {vertex} lies at signed distance {distance} from the edge {edge}, the polygon is not strictly convex.")]
    NotConvex {
        /// The edge whose half-plane is violated.
        edge: usize,
        /// The offending vertex.
        vertex: usize,
        /// The signed distance of the vertex to the edge line.
        distance: Real,
    },
    /// The turning angle at a vertex is not above the angular slop.
    #[error("the turning angle at vertex {vertex} is {angle} rad, the polygon is not strictly counter-clockwise.")]
    NotCounterClockwise {
        /// The vertex where the two adjacent edges meet.
        vertex: usize,
        /// The signed turning angle, in radians.
        angle: Real,
    },
    /// The polygon has a near-zero area.
    #[error("the polygon area {0} is degenerate.")]
    DegenerateArea(Real),
    /// No edge of the polygon gives an oriented bounding box. Only reachable if
    /// every edge passed the length check by a margin below rounding.
    #[error("no oriented bounding box fits the polygon.")]
    DegenerateBoundingBox,
    /// Moving the edges adjacent to a vertex inward would cross the centroid.
    #[error("the polygon is too thin around vertex {0} to build its core polygon.")]
    CoreCrossesCentroid(usize),
    /// The two edges adjacent to a vertex are parallel.
    #[error("the edges adjacent to vertex {0} are parallel.")]
    SingularCore(usize),
    /// A vertex was pushed onto a definition that is already full.
    #[error("a polygon cannot have more than {0} vertices.")]
    CapacityExceeded(usize),
}
