use glam::Vec3;
use picket_core::constants::CUBE_HALF_EXTENT;
use picket_core::{Aabb, Cursor, InputEvent, Interaction, Ray};

/// Vertical ray aimed straight down through (x, _, z).
fn down_ray(x: f32, z: f32) -> Ray {
    Ray::new(Vec3::new(x, 5.0, z), Vec3::new(0.0, -1.0, 0.0))
}

/// Scene with both markers placed on the top face at fixed spots.
fn scene_with_two_markers() -> Interaction {
    let mut s = Interaction::new(Aabb::from_half_extent(CUBE_HALF_EXTENT));
    s.handle_event(InputEvent::Click(down_ray(0.2, 0.0)));
    s.handle_event(InputEvent::Click(down_ray(-0.2, 0.0)));
    assert_eq!(s.placed_count(), 2);
    s
}

#[test]
fn pointer_down_over_marker_starts_a_drag() {
    let mut s = scene_with_two_markers();
    let resp = s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    assert_eq!(s.drag_index(), Some(0));
    assert_eq!(resp.cursor, Some(Cursor::Grabbing));
    assert_eq!(resp.rotate_enabled, Some(false));
}

#[test]
fn pointer_down_away_from_markers_does_nothing() {
    let mut s = scene_with_two_markers();
    let resp = s.handle_event(InputEvent::PointerDown(down_ray(0.0, 0.4)));
    assert_eq!(s.drag_index(), None);
    assert!(resp.cursor.is_none());
    assert!(resp.rotate_enabled.is_none());
}

#[test]
fn pointer_down_before_both_markers_exist_does_nothing() {
    let mut s = Interaction::new(Aabb::from_half_extent(CUBE_HALF_EXTENT));
    s.handle_event(InputEvent::Click(down_ray(0.2, 0.0)));

    // Straight at the one existing marker, but dragging requires both
    let resp = s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    assert_eq!(s.drag_index(), None);
    assert!(resp.cursor.is_none());
}

#[test]
fn drag_moves_only_x_and_z() {
    let mut s = scene_with_two_markers();
    let y_before = s.markers()[0].position.y;

    s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    s.handle_event(InputEvent::PointerMove(down_ray(1.5, -2.0)));

    let p = s.markers()[0].position;
    assert!((p.x - 1.5).abs() < 1e-4);
    assert!((p.z + 2.0).abs() < 1e-4);
    assert_eq!(p.y, y_before);

    // Elevation stays pinned across several moves
    s.handle_event(InputEvent::PointerMove(down_ray(-3.0, 0.7)));
    assert_eq!(s.markers()[0].position.y, y_before);
}

#[test]
fn drag_leaves_the_other_marker_alone() {
    let mut s = scene_with_two_markers();
    let other = s.markers()[1].position;

    s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    s.handle_event(InputEvent::PointerMove(down_ray(2.0, 2.0)));
    assert_eq!(s.markers()[1].position, other);
}

#[test]
fn drag_updates_segment_endpoint() {
    let mut s = scene_with_two_markers();
    s.handle_event(InputEvent::PointerDown(down_ray(-0.2, 0.0)));
    s.handle_event(InputEvent::PointerMove(down_ray(0.9, 0.9)));

    let (a, b) = s.segment().unwrap();
    assert_eq!(a, s.markers()[0].position);
    assert!((b.x - 0.9).abs() < 1e-4);
    assert!((b.z - 0.9).abs() < 1e-4);
}

#[test]
fn pointer_move_without_drag_does_nothing() {
    let mut s = scene_with_two_markers();
    let before = [s.markers()[0].position, s.markers()[1].position];
    s.handle_event(InputEvent::PointerMove(down_ray(3.0, 3.0)));
    assert_eq!(s.markers()[0].position, before[0]);
    assert_eq!(s.markers()[1].position, before[1]);
}

#[test]
fn parallel_move_ray_keeps_last_position() {
    let mut s = scene_with_two_markers();
    s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    s.handle_event(InputEvent::PointerMove(down_ray(1.0, 1.0)));
    let before = s.markers()[0].position;

    // Horizontal ray never meets the drag plane
    let parallel = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    s.handle_event(InputEvent::PointerMove(parallel));
    assert_eq!(s.markers()[0].position, before);
    assert_eq!(s.drag_index(), Some(0)); // drag session survives
}

#[test]
fn pointer_up_ends_the_drag() {
    let mut s = scene_with_two_markers();
    s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    let resp = s.handle_event(InputEvent::PointerUp);

    assert_eq!(s.drag_index(), None);
    assert_eq!(resp.cursor, Some(Cursor::Default));
    assert_eq!(resp.rotate_enabled, Some(true));

    // Moves after release no longer affect the marker
    let before = s.markers()[0].position;
    s.handle_event(InputEvent::PointerMove(down_ray(4.0, 4.0)));
    assert_eq!(s.markers()[0].position, before);
}

#[test]
fn pointer_up_without_drag_is_a_no_op() {
    let mut s = scene_with_two_markers();
    let resp = s.handle_event(InputEvent::PointerUp);
    assert!(resp.cursor.is_none());
    assert!(resp.rotate_enabled.is_none());
}

#[test]
fn first_marker_wins_when_both_are_under_the_pointer() {
    let mut s = Interaction::new(Aabb::from_half_extent(CUBE_HALF_EXTENT));
    // Place both markers at nearly the same spot on the top face
    s.handle_event(InputEvent::Click(down_ray(0.0, 0.0)));
    s.handle_event(InputEvent::Click(down_ray(0.01, 0.0)));

    s.handle_event(InputEvent::PointerDown(down_ray(0.0, 0.0)));
    assert_eq!(s.drag_index(), Some(0));
}

#[test]
fn click_during_complete_scene_does_not_disturb_drag_state() {
    let mut s = scene_with_two_markers();
    s.handle_event(InputEvent::PointerDown(down_ray(0.2, 0.0)));
    s.handle_event(InputEvent::Click(down_ray(0.0, 0.0)));
    assert_eq!(s.placed_count(), 2);
    assert_eq!(s.drag_index(), Some(0));
}
