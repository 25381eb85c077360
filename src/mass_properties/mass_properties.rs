use crate::math::{AngularInertia, Isometry, Point, Real};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};
use num::Zero;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The local mass properties of a shape.
///
/// Unlike the inertia a rigid body integrates with, `inertia` is expressed
/// about the **local origin** of the shape, not about its center of mass.
/// Use [`MassProperties::inertia_about_com`] to shift it.
pub struct MassProperties {
    /// The center of mass expressed in the local-space of the shape.
    pub local_com: Point<Real>,
    /// The mass.
    pub mass: Real,
    /// The rotational inertia about the local origin.
    pub inertia: AngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass, and angular inertia
    /// about the local origin.
    pub fn new(local_com: Point<Real>, mass: Real, inertia: AngularInertia<Real>) -> Self {
        Self {
            local_com,
            mass,
            inertia,
        }
    }

    /// The inverse of the mass, or zero if the mass is zero.
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The rotational inertia about the center of mass.
    ///
    /// This removes `mass * |local_com|²` from the inertia about the origin (parallel axis theorem).
    pub fn inertia_about_com(&self) -> AngularInertia<Real> {
        self.inertia - self.mass * self.local_com.coords.norm_squared()
    }

    /// The rotational inertia about an arbitrary local point.
    pub fn inertia_about(&self, point: &Point<Real>) -> AngularInertia<Real> {
        self.inertia_about_com() + self.mass * (self.local_com - point).norm_squared()
    }

    /// The world-space center of mass of the shape placed at `pos`.
    pub fn world_com(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_com
    }

    /// Scales the mass and inertia as if the density were multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: Real) -> Self {
        Self {
            local_com: self.local_com,
            mass: self.mass * factor,
            inertia: self.inertia * factor,
        }
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            local_com: Point::origin(),
            mass: 0.0,
            inertia: 0.0,
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    /// Combines two shapes attached to one body.
    ///
    /// Inertia about a common origin is additive, so no shift is involved.
    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let mass = self.mass + other.mass;
        let local_com = if mass != 0.0 {
            Point::from(
                (self.local_com.coords * self.mass + other.local_com.coords * other.mass) / mass,
            )
        } else {
            Point::origin()
        };

        Self {
            local_com,
            mass,
            inertia: self.inertia + other.inertia,
        }
    }
}

impl AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}

impl Sum<MassProperties> for MassProperties {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, props| acc + props)
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.inertia.abs_diff_eq(&other.inertia, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .inertia
                .relative_eq(&other.inertia, epsilon, max_relative)
    }
}
