use crate::math::{Isometry, Matrix, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// The rotation part of `self` as a 2x2 matrix.
    fn rotation_matrix(&self) -> Matrix<Real>;

    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn rotation_matrix(&self) -> Matrix<Real> {
        self.rotation.to_rotation_matrix().into_inner()
    }

    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation_matrix().abs() * *v
    }
}
