use polyshape2d::bounding_volume::BoundingVolume;
use polyshape2d::na;
use polyshape2d::math::{Isometry, Point, Real, Vector};
use polyshape2d::query::PointQuery;
use polyshape2d::settings::TOI_SLOP;
use polyshape2d::shape::{PolygonDef, PolygonShape};

use crate::{rand_range, random_isometry, random_polygon};

const NUM_SHAPES: usize = 200;

#[test]
fn vertices_lie_on_the_boundary() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);

        for pt in shape.vertices() {
            assert!(shape.max_edge_separation(pt) <= 1.0e-4);
            assert!(shape.max_edge_separation(pt) >= -1.0e-4);
        }
    }
}

#[test]
fn core_vertices_are_inset_by_the_toi_slop() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);

        for pt in shape.core_vertices() {
            assert!(shape.contains_local_point(pt));
            assert!(relative_eq!(
                shape.max_edge_separation(pt),
                -TOI_SLOP,
                epsilon = 1.0e-3
            ));
        }
    }
}

#[test]
fn containment_is_transform_invariant() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);
        let pos = random_isometry(&mut rng);
        let aabb = shape.local_aabb().loosened(1.0);

        for _ in 0..20 {
            let pt = Point::new(
                rand_range(&mut rng, aabb.mins.x, aabb.maxs.x),
                rand_range(&mut rng, aabb.mins.y, aabb.maxs.y),
            );

            // Rounding may flip points sitting right on an edge.
            if shape.max_edge_separation(&pt).abs() < 1.0e-3 {
                continue;
            }

            assert_eq!(
                shape.contains_point(&pos, &(pos * pt)),
                shape.contains_local_point(&pt)
            );
        }
    }
}

#[test]
fn aabb_contains_transformed_vertices() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);
        let pos = random_isometry(&mut rng);
        let aabb = shape.aabb(&pos).loosened(1.0e-4);

        for pt in shape.vertices() {
            assert!(aabb.contains_local_point(&(pos * pt)));
        }

        assert!(aabb.contains_local_point(&shape.world_centroid(&pos)));
    }
}

#[test]
fn swept_aabb_at_rest_is_the_aabb() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);
        let pos = random_isometry(&mut rng);
        assert_eq!(shape.swept_aabb(&pos, &pos), shape.aabb(&pos));

        let end = random_isometry(&mut rng);
        let swept = shape.swept_aabb(&pos, &end);
        assert!(swept.contains(&shape.aabb(&pos)));
        assert!(swept.contains(&shape.aabb(&end)));
    }
}

#[test]
fn identity_aabb_of_axis_aligned_boxes_is_tight() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..NUM_SHAPES {
        let hx = rand_range(&mut rng, 0.1, 10.0);
        let hy = rand_range(&mut rng, 0.1, 10.0);
        let center = Point::new(rand_range(&mut rng, -5.0, 5.0), rand_range(&mut rng, -5.0, 5.0));
        let def = PolygonDef::new().set_as_oriented_box(hx, hy, center, 0.0);
        let shape = PolygonShape::new(&def).unwrap();

        let mut mins = def.vertices[0];
        let mut maxs = def.vertices[0];
        for pt in &def.vertices {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        let aabb = shape.aabb(&Isometry::identity());
        assert!(relative_eq!(aabb.mins, mins, epsilon = 1.0e-4));
        assert!(relative_eq!(aabb.maxs, maxs, epsilon = 1.0e-4));
    }
}

#[test]
fn obb_contains_every_vertex() {
    let mut rng = oorandom::Rand32::new(31);

    for _ in 0..NUM_SHAPES {
        let shape = random_polygon(&mut rng);
        let obb = shape.obb();

        for pt in shape.vertices() {
            // Tolerance for the rounding of the fitted frame.
            let nudged = pt + (obb.center - pt) * 1.0e-4;
            assert!(obb.contains_local_point(&nudged));
        }
    }
}

#[test]
fn obb_has_the_smallest_edge_aligned_area() {
    let mut rng = oorandom::Rand32::new(2000);

    for _ in 0..2000 {
        let shape = random_polygon(&mut rng);
        let pts = shape.vertices();
        let obb = shape.obb();
        let fitted = 4.0 * obb.extents.x * obb.extents.y;

        let smallest = (0..pts.len())
            .map(|i| {
                let root = pts[(i + pts.len() - 1) % pts.len()];
                let ux = (pts[i] - root).normalize();
                let uy = Vector::new(-ux.y, ux.x);
                let (lo, hi) = pts.iter().fold(
                    (Vector::repeat(Real::MAX), Vector::repeat(-Real::MAX)),
                    |(lo, hi), pt| {
                        let r = Vector::new(ux.dot(&(pt - root)), uy.dot(&(pt - root)));
                        (lo.inf(&r), hi.sup(&r))
                    },
                );
                (hi.x - lo.x) * (hi.y - lo.y)
            })
            .fold(Real::MAX, Real::min);

        assert!(relative_eq!(fitted, smallest, max_relative = 1.0e-4));
    }
}

#[test]
fn sweep_radius_bounds_the_core() {
    let mut rng = oorandom::Rand32::new(77);

    for _ in 0..NUM_SHAPES {
        let mut shape = random_polygon(&mut rng);
        let center = shape.centroid() + Vector::new(rand_range(&mut rng, -0.5, 0.5), 0.0);
        shape.update_sweep_radius(&center);

        let radius: Real = shape
            .core_vertices()
            .iter()
            .map(|pt| na::distance(pt, &center))
            .fold(0.0, Real::max);
        assert_eq!(shape.sweep_radius(), radius);
        assert!(shape
            .core_vertices()
            .iter()
            .all(|pt| na::distance(pt, &center) <= shape.sweep_radius()));
    }
}
