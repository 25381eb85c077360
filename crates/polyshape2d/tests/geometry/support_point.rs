use polyshape2d::math::{Isometry, Point, Real, UnitVector, Vector};
use polyshape2d::shape::SupportMap;

use crate::{rand_range, random_isometry, random_polygon, unit_square};

#[test]
fn support_point_maximizes_the_projection() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..200 {
        let shape = random_polygon(&mut rng);
        let pos = random_isometry(&mut rng);

        for _ in 0..10 {
            let angle = rand_range(&mut rng, -3.2, 3.2);
            let dir = Vector::new(angle.cos(), angle.sin()) * rand_range(&mut rng, 0.1, 10.0);
            let support = shape.support_point(&pos, &dir);

            assert!(shape
                .core_vertices()
                .iter()
                .any(|pt| relative_eq!(pos * pt, support, epsilon = 1.0e-4)));

            let best = dir.dot(&support.coords);
            for pt in shape.core_vertices() {
                assert!(dir.dot(&(pos * pt).coords) <= best + 1.0e-3);
            }
        }
    }
}

#[test]
fn support_point_uses_the_core_polygon() {
    let shape = unit_square(1.0);
    let support = shape.support_point(&Isometry::identity(), &Vector::new(1.0, 1.0));
    assert_eq!(support, shape.core_vertices()[2]);
    assert!(support.x < 1.0);

    let support = shape.local_support_point(&Vector::new(1.0, 0.0));
    assert!(support == shape.core_vertices()[1] || support == shape.core_vertices()[2]);
    assert!(relative_eq!(support.x, shape.core_vertices()[2].x, epsilon = 1.0e-6));
}

#[test]
fn first_vertex_follows_the_transform() {
    let shape = unit_square(1.0);
    let pos = Isometry::translation(3.0, -2.0);
    let expected: Point<Real> = shape.core_vertices()[0] + Vector::new(3.0, -2.0);
    assert!(relative_eq!(shape.first_vertex(&pos), expected, epsilon = 1.0e-6));
}

#[test]
fn unit_direction_variants_agree() {
    let mut rng = oorandom::Rand32::new(13);

    for _ in 0..50 {
        let shape = random_polygon(&mut rng);
        let pos = random_isometry(&mut rng);
        let angle = rand_range(&mut rng, -3.2, 3.2);
        let dir = UnitVector::new_normalize(Vector::new(angle.cos(), angle.sin()));

        assert_eq!(
            shape.support_point_toward(&pos, &dir),
            shape.support_point(&pos, &dir)
        );
        assert_eq!(
            shape.local_support_point_toward(&dir),
            shape.local_support_point(&dir)
        );
    }
}
