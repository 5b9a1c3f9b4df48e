use geo::point;
use legacy_roi::{
    region::{
        poly::{Capabilities, VertexRegion},
        AccessRealRegion, AccessVertices, RegionError,
    },
    roi::{Roi, RoiKind},
};

mod common;

#[test]
fn test_polygon_getters() {
    let roi = common::ring_roi(RoiKind::Polygon);
    let polygon = VertexRegion::polygon(roi.clone()).unwrap();

    assert_eq!(polygon.num_vertices(), 5);

    for i in 0..5 {
        let vertex = polygon.vertex(i).unwrap();
        assert_eq!(vertex.position(0).unwrap(), f64::from(roi.borrow().x_points()[i]));
        assert_eq!(vertex.position(1).unwrap(), f64::from(common::RING_YS[i]));
    }
}

#[test]
fn test_polygon_vertex_is_read_only() {
    let polygon = VertexRegion::polygon(common::ring_roi(RoiKind::Polygon)).unwrap();
    let vertex = polygon.vertex(2).unwrap();

    assert_eq!(vertex.index(), 2);
    assert!(matches!(
        vertex.set_position(point! {x: 1.0, y: -3.0}),
        Err(RegionError::Unsupported(..))
    ));
    assert!(matches!(
        vertex.move_by(point! {x: 1.0, y: 1.0}),
        Err(RegionError::Unsupported(..))
    ));
    assert_eq!(vertex.point().unwrap(), point! {x: 150.0, y: 250.25});
}

#[test]
fn test_polygon_add_vertex() {
    let roi = common::ring_roi(RoiKind::Polygon);
    let mut polygon = VertexRegion::polygon(roi.clone()).unwrap();

    assert!(matches!(
        polygon.add_vertex(3, point! {x: 0.0, y: 0.0}),
        Err(RegionError::Unsupported(..))
    ));

    common::attached(&roi);
    assert!(matches!(
        polygon.add_vertex(3, point! {x: 0.0, y: 0.0}),
        Err(RegionError::Unsupported(..))
    ));
    assert_eq!(polygon.num_vertices(), 5);
}

#[test]
fn test_polygon_remove_vertex_without_display() {
    let mut polygon = VertexRegion::polygon(common::ring_roi(RoiKind::Polygon)).unwrap();

    assert!(matches!(
        polygon.remove_vertex(0),
        Err(RegionError::Unsupported(..))
    ));
    assert_eq!(polygon.num_vertices(), 5);
}

#[test]
fn test_polygon_remove_vertex_with_display() {
    common::init_logging();
    let roi = common::ring_roi(RoiKind::Polygon);
    let mut polygon = VertexRegion::polygon(common::attached(&roi).clone()).unwrap();

    polygon.remove_vertex(2).unwrap();

    assert_eq!(polygon.num_vertices(), 4);
    assert_eq!(roi.borrow().n_coordinates(), 4);
    // Later vertices shift down by one.
    assert_eq!(
        polygon.vertex(2).unwrap().point().unwrap(),
        point! {x: 199.0, y: 200.0}
    );
}

#[test]
fn test_polygon_remove_vertex_out_of_range() {
    let roi = common::ring_roi(RoiKind::Polygon);
    let mut polygon = VertexRegion::polygon(common::attached(&roi).clone()).unwrap();

    assert!(matches!(
        polygon.remove_vertex(5),
        Err(RegionError::InvalidArgument(..))
    ));
    assert_eq!(polygon.num_vertices(), 5);
}

#[test]
fn test_polygon_test() {
    let polygon = VertexRegion::polygon(common::ring_roi(RoiKind::Polygon)).unwrap();

    assert!(polygon.test(point! {x: 151.0, y: 225.0}));
    assert!(!polygon.test(point! {x: 100.0, y: 100.0}));
}

#[test]
fn test_polygon_bounds() {
    let polygon = VertexRegion::polygon(common::ring_roi(RoiKind::Polygon)).unwrap();

    common::assert_bounds(&polygon, [100.5, 100.0, 199.0, 250.25]);
    assert!(matches!(
        polygon.real_min(2),
        Err(RegionError::InvalidArgument(..))
    ));
    assert!(matches!(
        polygon.real_max(3),
        Err(RegionError::InvalidArgument(..))
    ));
}

#[test]
fn test_polygon_updated_after_vertex_removed() {
    let roi = common::ring_roi(RoiKind::Polygon);
    let mut polygon = VertexRegion::polygon(common::attached(&roi).clone()).unwrap();
    let inside = point! {x: 151.0, y: 225.0};
    let outside = point! {x: 100.0, y: 100.0};

    assert!(polygon.test(inside));
    assert!(!polygon.test(outside));

    polygon.remove_vertex(2).unwrap();

    assert!(!polygon.test(inside));
    assert!(!polygon.test(outside));
    common::assert_bounds(&polygon, [100.5, 100.0, 199.0, 200.0]);
}

#[test]
fn test_polygon_views_share_roi() {
    let roi = common::ring_roi(RoiKind::Polygon);
    let mut first = VertexRegion::polygon(common::attached(&roi).clone()).unwrap();
    let second = VertexRegion::polygon(roi.clone()).unwrap();
    let vertex = second.vertex(4).unwrap();

    first.remove_vertex(0).unwrap();
    assert_eq!(second.num_vertices(), 4);
    assert!(matches!(
        vertex.position(0),
        Err(RegionError::InvalidArgument(..))
    ));

    roi.borrow_mut().translate(10.0, -5.0);
    common::assert_bounds(&second, [110.5, 95.0, 209.0, 245.25]);
    common::assert_bounds(&first, [110.5, 95.0, 209.0, 245.25]);
}

#[test]
fn test_polygon_vertex_out_of_range() {
    let polygon = VertexRegion::new_polygon(&common::RING_XS, &common::RING_YS).unwrap();

    assert!(polygon.vertex(4).is_ok());
    assert!(matches!(
        polygon.vertex(5),
        Err(RegionError::InvalidArgument(..))
    ));
    assert!(matches!(
        polygon.vertex(0).unwrap().position(2),
        Err(RegionError::InvalidArgument(..))
    ));
}

#[test]
fn test_polygon_new_with_mismatched_arrays() {
    assert!(matches!(
        VertexRegion::new_polygon(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(RegionError::InvalidArgument(..))
    ));
}

#[test]
fn test_roi_vertices_with_count() {
    let roi = Roi::vertices_with_count(RoiKind::Polygon, &common::RING_XS, &common::RING_YS, 3)
        .unwrap()
        .into_shared();
    let polygon = VertexRegion::polygon(roi).unwrap();

    assert_eq!(polygon.num_vertices(), 3);
    common::assert_bounds(&polygon, [100.5, 100.0, 150.0, 250.25]);

    assert!(matches!(
        Roi::vertices_with_count(RoiKind::Polygon, &common::RING_XS, &common::RING_YS, 6),
        Err(RegionError::InvalidArgument(..))
    ));
    assert!(matches!(
        Roi::vertices_with_count(RoiKind::Polygon, &common::RING_XS, &[1.0, 2.0], 3),
        Err(RegionError::InvalidArgument(..))
    ));
}

#[test]
fn test_roi_vertices_of_non_vertex_kind() {
    for kind in [RoiKind::Rectangle, RoiKind::Composite] {
        assert!(matches!(
            Roi::vertices(kind, &common::RING_XS, &common::RING_YS),
            Err(RegionError::InvalidRegion(..))
        ));
    }
}

#[test]
fn test_roi_segment_vertex_count() {
    for kind in [RoiKind::Line, RoiKind::Arrow] {
        assert!(matches!(
            Roi::vertices(kind, &common::RING_XS, &common::RING_YS),
            Err(RegionError::InvalidArgument(..))
        ));
        assert!(matches!(
            Roi::vertices(kind, &[1.0], &[2.0]),
            Err(RegionError::InvalidArgument(..))
        ));
        assert_eq!(
            Roi::vertices(kind, &[1.0, 3.0], &[2.0, 4.0])
                .unwrap()
                .n_coordinates(),
            2
        );
    }
}

#[test]
fn test_polygon_wrap_spline_fit() {
    let roi = common::ring_roi(RoiKind::Polygon);
    roi.borrow_mut().set_spline_fit(true);

    assert!(matches!(
        VertexRegion::polygon(roi.clone()),
        Err(RegionError::InvalidRegion(..))
    ));
    assert!(matches!(
        VertexRegion::unmodifiable_polygon(roi),
        Err(RegionError::InvalidRegion(..))
    ));
}

#[test]
fn test_polygon_wrap_wrong_family() {
    assert!(matches!(
        VertexRegion::polygon(common::ring_roi(RoiKind::Polyline)),
        Err(RegionError::InvalidRegion(..))
    ));
    assert!(matches!(
        VertexRegion::unmodifiable_polygon(common::ring_roi(RoiKind::Angle)),
        Err(RegionError::InvalidRegion(..))
    ));
}

#[test]
fn test_unmodifiable_polygon() {
    let roi = common::ring_roi(RoiKind::Freehand);

    assert!(matches!(
        VertexRegion::polygon(roi.clone()),
        Err(RegionError::InvalidRegion(..))
    ));

    let mut polygon = VertexRegion::unmodifiable_polygon(common::attached(&roi).clone()).unwrap();

    assert_eq!(
        polygon.capabilities(),
        Capabilities {
            editable: false,
            closed: true
        }
    );
    assert!(!polygon.is_editable());
    assert!(polygon.is_closed());
    assert!(matches!(
        polygon.remove_vertex(0),
        Err(RegionError::Unsupported(..))
    ));
    assert_eq!(polygon.num_vertices(), 5);
    assert!(polygon.test(point! {x: 151.0, y: 225.0}));
}
