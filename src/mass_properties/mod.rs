//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_polygon;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_polygon::{
        polygon_area_and_centroid, polygon_area_centroid_and_inertia,
    };
}
