use polyshape2d::math::{Point, Real};
use polyshape2d::settings::{PolygonSettings, MAX_POLYGON_VERTICES};
use polyshape2d::shape::{PolygonDef, PolygonShape, PolygonShapeError};

fn build(pts: &[Point<Real>], settings: PolygonSettings) -> Result<PolygonShape, PolygonShapeError> {
    PolygonShape::with_settings(&PolygonDef::from_vertices(pts).unwrap(), settings)
}

#[test]
fn injected_reflex_vertex_fails_construction() {
    let triangle = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 2.0),
    ];
    assert!(build(&triangle, PolygonSettings::strict()).is_ok());

    // A fourth point pulled inside the hypotenuse makes the outline concave.
    let concave = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.5, 0.5),
        Point::new(0.0, 2.0),
    ];
    assert!(matches!(
        build(&concave, PolygonSettings::strict()),
        Err(PolygonShapeError::NotConvex { .. })
    ));
}

#[test]
fn relaxed_mode_skips_debug_checks_only() {
    // Slightly concave, but thick enough for its core polygon.
    let concave = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(1.9, 1.9),
        Point::new(0.0, 4.0),
    ];
    assert!(build(&concave, PolygonSettings::strict()).is_err());
    assert!(build(&concave, PolygonSettings::relaxed()).is_ok());

    let too_few = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    assert!(matches!(
        build(&too_few, PolygonSettings::relaxed()),
        Err(PolygonShapeError::VertexCount { count: 2, .. })
    ));
}

#[test]
fn maximal_vertex_count_is_accepted() {
    let pts: Vec<_> = (0..MAX_POLYGON_VERTICES)
        .map(|i| {
            let angle = i as Real / MAX_POLYGON_VERTICES as Real * core::f64::consts::TAU as Real;
            Point::new(angle.cos(), angle.sin())
        })
        .collect();
    let shape = build(&pts, PolygonSettings::strict()).unwrap();

    assert_eq!(shape.vertex_count(), MAX_POLYGON_VERTICES);
    assert_eq!(shape.core_vertices().len(), MAX_POLYGON_VERTICES);
    assert_eq!(shape.normals().len(), MAX_POLYGON_VERTICES);
}

#[test]
fn custom_toi_slop_moves_the_core() {
    let def = PolygonDef::new().set_as_box(1.0, 1.0);
    let shape =
        PolygonShape::with_settings(&def, PolygonSettings::strict().with_toi_slop(0.5)).unwrap();

    assert!(relative_eq!(
        shape.core_vertices()[2],
        Point::new(0.5, 0.5),
        epsilon = 1.0e-5
    ));
    assert!(PolygonShape::with_settings(&def, PolygonSettings::strict().with_toi_slop(1.5)).is_err());
}

#[test]
fn material_is_carried_over() {
    let def = PolygonDef::new()
        .set_as_box(1.0, 2.0)
        .density(3.0)
        .friction(0.7)
        .restitution(0.25);
    let shape = PolygonShape::new(&def).unwrap();

    assert_eq!(shape.density(), 3.0);
    assert_eq!(shape.friction(), 0.7);
    assert_eq!(shape.restitution(), 0.25);
}
