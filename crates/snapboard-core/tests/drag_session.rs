//! End-to-end drag sessions through `Surface` and `DragCoordinator`.

use kurbo::Point;
use snapboard_core::{
    ArtboardConfig, DragCoordinator, GuideCategory, GuideEdge, GuideMarker, SceneObject, Shape, ShapeGeometry,
    ShapeKind, SnapConfig, SnapHost, SnapboardError, Surface, SurfaceConfig, live_guides,
};

fn rect(id: &str, left: f64, top: f64, width: f64, height: f64) -> Shape {
    Shape::with_id(id, ShapeKind::Rectangle, ShapeGeometry::new(left, top, width, height))
}

/// 2000x2000 surface with the artboard at the origin, 500x500.
fn surface_with_artboard() -> Surface {
    Surface::new(&SurfaceConfig {
        width: 2000.0,
        height: 2000.0,
        artboard: ArtboardConfig {
            left: 0.0,
            top: 0.0,
            width: 500.0,
            height: 500.0,
        },
    })
}

fn guide_ids(surface: &mut Surface) -> Vec<String> {
    live_guides(surface).iter().map(GuideMarker::object_id).collect()
}

fn position(surface: &Surface, id: &str) -> Point {
    surface.shape(id).unwrap().geometry.position()
}

#[test]
fn test_artboard_left_edge_example() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("s", 4.0, 300.0, 100.0, 60.0)).unwrap();

    let coordinator = DragCoordinator::default();
    coordinator.on_shape_moving(&mut surface, "s").unwrap();

    assert_eq!(position(&surface, "s"), Point::new(0.0, 300.0));
    let guides = live_guides(&mut surface);
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].object_id(), "vertical-canvas-left");
    assert_eq!(guides[0].line.p0, Point::new(0.0, 0.0));
    assert_eq!(guides[0].line.p1, Point::new(0.0, 500.0));
}

#[test]
fn test_peer_left_edge_example() {
    let mut surface = Surface::without_artboard(1000.0, 1000.0);
    surface.insert_shape(rect("a", 100.0, 100.0, 50.0, 50.0)).unwrap();
    surface.insert_shape(rect("b", 102.0, 300.0, 50.0, 50.0)).unwrap();

    let coordinator = DragCoordinator::default();
    let outcome = coordinator.on_shape_moving(&mut surface, "b").unwrap();

    assert!(outcome.boundary.is_none());
    assert!((position(&surface, "b").x - 100.0).abs() < f64::EPSILON);
    let ids = guide_ids(&mut surface);
    assert_eq!(ids.iter().filter(|id| *id == "vertical-elements-left").count(), 1);
    // The static shape is untouched.
    assert_eq!(position(&surface, "a"), Point::new(100.0, 100.0));
}

#[test]
fn test_repeated_ticks_are_idempotent() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("peer", 3.0, 420.0, 40.0, 40.0)).unwrap();
    surface.insert_shape(rect("s", 6.0, 200.0, 100.0, 60.0)).unwrap();

    let coordinator = DragCoordinator::default();
    let first = coordinator.on_shape_moving(&mut surface, "s").unwrap();
    let first_guides = guide_ids(&mut surface);
    let order = surface.z_order().to_vec();

    for _ in 0..5 {
        let next = coordinator.on_shape_moving(&mut surface, "s").unwrap();
        assert_eq!(next.position, first.position);
        assert_eq!(guide_ids(&mut surface), first_guides);
        assert_eq!(surface.z_order(), order.as_slice());
    }
}

#[test]
fn test_threshold_boundary() {
    let config = SnapConfig::default();
    let coordinator = DragCoordinator::new(&config);

    let mut surface = surface_with_artboard();
    surface
        .insert_shape(rect("near", config.boundary_threshold - 1e-6, 300.0, 100.0, 60.0))
        .unwrap();
    coordinator.on_shape_moving(&mut surface, "near").unwrap();
    assert!(position(&surface, "near").x.abs() < f64::EPSILON);
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-left"]);

    let mut surface = surface_with_artboard();
    surface
        .insert_shape(rect("far", config.boundary_threshold, 300.0, 100.0, 60.0))
        .unwrap();
    let outcome = coordinator.on_shape_moving(&mut surface, "far").unwrap();
    assert!(!outcome.is_snapped());
    assert!((position(&surface, "far").x - config.boundary_threshold).abs() < f64::EPSILON);
    assert!(guide_ids(&mut surface).is_empty());
}

#[test]
fn test_no_self_snap_with_markers_present() {
    // Only the dragged shape, the artboards and a pile of markers: the peer
    // engine must find nothing to align with.
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("s", 252.0, 252.0, 100.0, 60.0)).unwrap();
    // Same identifier each time: the surface keeps only the first.
    for x in [0.0, 252.0, 352.0] {
        surface.add_object(SceneObject::Guide(GuideMarker::vertical(
            GuideCategory::Peer,
            GuideEdge::Left,
            x,
            0.0,
            500.0,
        )));
    }
    assert_eq!(surface.len(), 4);

    let coordinator = DragCoordinator::default();
    let outcome = coordinator.on_shape_moving(&mut surface, "s").unwrap();
    assert!(outcome.peers.is_none());
    assert!(guide_ids(&mut surface).iter().all(|id| id.contains("-canvas-")));
}

#[test]
fn test_dedup_across_many_ticks_and_peers() {
    let mut surface = Surface::without_artboard(1000.0, 1000.0);
    surface.insert_shape(rect("a", 100.0, 0.0, 30.0, 30.0)).unwrap();
    surface.insert_shape(rect("b", 101.0, 400.0, 30.0, 30.0)).unwrap();
    surface.insert_shape(rect("c", 102.0, 800.0, 30.0, 30.0)).unwrap();
    surface.insert_shape(rect("s", 600.0, 200.0, 70.0, 30.0)).unwrap();

    let mut coordinator = DragCoordinator::default();
    coordinator.begin_drag(&mut surface, "s", Point::new(600.0, 200.0)).unwrap();
    for x in [104.0, 103.5, 103.0, 102.5] {
        coordinator.drag_to(&mut surface, Point::new(x, 200.0)).unwrap();
        let ids = guide_ids(&mut surface);
        assert_eq!(ids, vec!["vertical-elements-left"]);
        // Last matching peer decides the coordinate.
        assert!((position(&surface, "s").x - 102.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_release_clears_everything() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("peer", 200.0, 100.0, 40.0, 40.0)).unwrap();
    surface.insert_shape(rect("s", 0.0, 0.0, 40.0, 40.0)).unwrap();

    let mut coordinator = DragCoordinator::default();
    coordinator.begin_drag(&mut surface, "s", Point::ZERO).unwrap();
    coordinator.drag_to(&mut surface, Point::new(3.0, 102.0)).unwrap();
    let ids = guide_ids(&mut surface);
    assert!(ids.contains(&"vertical-canvas-left".to_string()));
    assert!(ids.contains(&"horizontal-elements-top".to_string()));

    assert_eq!(coordinator.end_drag(&mut surface), Some("s".to_string()));
    assert!(live_guides(&mut surface).is_empty());
    assert!(surface.objects_ordered().all(|o| !o.is_overlay()));
    assert!(surface.take_redraw());
}

#[test]
fn test_markers_never_hit_or_saved() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("s", 4.0, 4.0, 40.0, 40.0)).unwrap();
    DragCoordinator::default().on_shape_moving(&mut surface, "s").unwrap();
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-left", "horizontal-canvas-top"]);

    assert!(surface.selectable_at(Point::new(0.0, 250.0), 1.0).is_empty());
    let saved = Surface::from_json(&surface.to_json().unwrap()).unwrap();
    assert_eq!(saved.list_objects().len(), 3);
}

#[test]
fn test_markers_cleared_when_snap_no_longer_holds() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("peer", 200.0, 100.0, 40.0, 40.0)).unwrap();
    surface.insert_shape(rect("s", 0.0, 0.0, 40.0, 40.0)).unwrap();

    let mut coordinator = DragCoordinator::default();
    coordinator.begin_drag(&mut surface, "s", Point::ZERO).unwrap();

    // Artboard left edge plus the peer's top edge.
    coordinator.drag_to(&mut surface, Point::new(3.0, 102.0)).unwrap();
    let ids = guide_ids(&mut surface);
    assert!(ids.contains(&"vertical-canvas-left".to_string()));
    assert!(ids.contains(&"horizontal-elements-top".to_string()));

    // Clear of the artboard edges and the peer.
    let outcome = coordinator.drag_to(&mut surface, Point::new(60.0, 300.0)).unwrap();
    assert!(!outcome.is_snapped());
    assert_eq!(outcome.position, Point::new(60.0, 300.0));
    assert!(live_guides(&mut surface).is_empty());

    // Back onto a snap.
    coordinator.drag_to(&mut surface, Point::new(4.0, 300.0)).unwrap();
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-left"]);
}

#[test]
fn test_switching_edges_drops_stale_marker() {
    let mut surface = surface_with_artboard();
    surface.insert_shape(rect("s", 200.0, 300.0, 100.0, 60.0)).unwrap();

    let mut coordinator = DragCoordinator::default();
    coordinator.begin_drag(&mut surface, "s", Point::ZERO).unwrap();

    coordinator.drag_to(&mut surface, Point::new(-196.0, 0.0)).unwrap();
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-left"]);

    // Right edge at 403 + 100 = 503, within 10 of 500.
    let outcome = coordinator.drag_to(&mut surface, Point::new(203.0, 0.0)).unwrap();
    assert_eq!(outcome.position, Point::new(400.0, 300.0));
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-right"]);
}

#[test]
fn test_guide_ids_cannot_name_shapes() {
    let mut surface = surface_with_artboard();
    let result = surface.insert_shape(rect("vertical-canvas-left", 1500.0, 1500.0, 10.0, 10.0));
    assert!(matches!(result, Err(SnapboardError::ReservedId(_))));
    surface.insert_shape(rect("s", 4.0, 300.0, 100.0, 60.0)).unwrap();

    let outcome = DragCoordinator::default().on_shape_moving(&mut surface, "s").unwrap();
    assert_eq!(outcome.position, Point::new(0.0, 300.0));
    assert_eq!(guide_ids(&mut surface), vec!["vertical-canvas-left"]);
}
