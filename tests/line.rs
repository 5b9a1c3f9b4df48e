use geo::point;
use legacy_roi::{
    convert::{ConverterRegistry, RegionInterface},
    region::{line::LineRegion, AccessRealRegion, AccessVertices, RegionError},
    roi::Roi,
};

mod common;

fn line() -> LineRegion {
    LineRegion::new(10.5, 20.0, 120.5, 150.0)
}

#[test]
fn test_line_getters() {
    let line = line();

    assert_eq!(line.num_vertices(), 2);
    assert_eq!(line.endpoint_one().point().unwrap(), point! {x: 10.5, y: 20.0});
    assert_eq!(line.endpoint_two().point().unwrap(), point! {x: 120.5, y: 150.0});
    assert_eq!(
        line.vertex(1).unwrap().point().unwrap(),
        line.endpoint_two().point().unwrap()
    );
}

#[test]
fn test_line_endpoints_are_read_only() {
    let line = line();

    assert!(matches!(
        line.endpoint_one().move_by(point! {x: 1.0, y: 1.0}),
        Err(RegionError::Unsupported(..))
    ));
    assert!(matches!(
        line.endpoint_two().set_position(point! {x: 1.0, y: 1.0}),
        Err(RegionError::Unsupported(..))
    ));
}

#[test]
fn test_line_test() {
    let line = line();

    assert!(line.test(point! {x: 10.5, y: 20.0}));
    assert!(line.test(point! {x: 120.5, y: 150.0}));
    assert!(line.test(point! {x: 65.5, y: 85.0}));
    // On the supporting line, beyond an endpoint.
    assert!(!line.test(point! {x: 131.5, y: 163.0}));
    assert!(!line.test(point! {x: -0.5, y: 7.0}));
    assert!(!line.test(point! {x: 4.0, y: 115.0}));
    assert!(!line.test(point! {x: 20.25, y: 40.125}));
}

#[test]
fn test_line_bounds() {
    common::assert_bounds(&line(), [10.5, 20.0, 120.5, 150.0]);
    common::assert_bounds(
        &LineRegion::new(5.0, 8.0, -2.0, 3.0),
        [-2.0, 3.0, 5.0, 8.0],
    );
}

#[test]
fn test_line_follows_roi() {
    let line = line();
    line.roi().borrow_mut().translate(-10.5, -20.0);

    assert!(line.test(point! {x: 0.0, y: 0.0}));
    common::assert_bounds(&line, [0.0, 0.0, 110.0, 130.0]);
}

#[test]
fn test_line_wrap_arrow() {
    let arrow = Roi::arrow(10.0, 10.0, 100.0, 100.0).into_shared();

    assert!(matches!(
        LineRegion::wrap(arrow),
        Err(RegionError::InvalidRegion(..))
    ));
}

#[test]
fn test_line_wrap_polygon() {
    assert!(matches!(
        LineRegion::wrap(common::ring_roi(legacy_roi::roi::RoiKind::Polygon)),
        Err(RegionError::InvalidRegion(..))
    ));
}

#[test]
fn test_line_wrap_ignores_stroke_width() {
    let roi = Roi::line(0.0, 0.0, 10.0, 0.0).into_shared();
    roi.borrow_mut().set_stroke_width(4.0);

    let line = LineRegion::wrap(roi.clone()).unwrap();
    assert!(line.test(point! {x: 5.0, y: 0.0}));
    assert!(!ConverterRegistry::new().can_convert(&roi, RegionInterface::Line));
}
