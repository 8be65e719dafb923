use glam::Vec3;
use picket_core::constants::{
    camera_eye_vec3, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_PITCH_LIMIT, WHEEL_LINE_PX,
    WHEEL_ZOOM_SPEED,
};
use picket_core::OrbitCamera;

fn camera() -> OrbitCamera {
    OrbitCamera::from_eye_target(camera_eye_vec3(), Vec3::ZERO, 16.0 / 9.0)
}

#[test]
fn from_eye_target_reproduces_the_eye() {
    let cam = camera();
    assert!((cam.eye() - camera_eye_vec3()).length() < 1e-3);
}

#[test]
fn from_eye_target_on_arbitrary_positions() {
    let eye = Vec3::new(-2.0, 4.0, 7.0);
    let target = Vec3::new(1.0, 1.0, -1.0);
    let cam = OrbitCamera::from_eye_target(eye, target, 1.0);
    assert!((cam.eye() - eye).length() < 1e-3);
    assert_eq!(cam.target, target);
}

#[test]
fn rotation_converges_toward_the_goal() {
    let mut cam = camera();
    let yaw0 = cam.yaw;
    cam.rotate(200.0, 0.0);

    // Goal moved, current angle is still damped behind it
    assert_eq!(cam.yaw, yaw0);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.yaw - (yaw0 - 1.0)).abs() < 1e-3); // 200 px * 0.005 rad/px
}

#[test]
fn rotation_is_ignored_while_disabled() {
    let mut cam = camera();
    cam.rotate_enabled = false;
    let (yaw0, pitch0) = (cam.yaw, cam.pitch);

    cam.rotate(500.0, 500.0);
    for _ in 0..120 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.yaw - yaw0).abs() < 1e-5);
    assert!((cam.pitch - pitch0).abs() < 1e-5);
}

#[test]
fn pitch_is_clamped() {
    let mut cam = camera();
    cam.rotate(0.0, 1e6);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!(cam.pitch <= CAMERA_PITCH_LIMIT + 1e-4);

    cam.rotate(0.0, -1e7);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!(cam.pitch >= -CAMERA_PITCH_LIMIT - 1e-4);
}

#[test]
fn zoom_is_clamped_to_the_distance_range() {
    let mut cam = camera();
    cam.zoom(1e6);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance - CAMERA_MAX_DISTANCE).abs() < 1e-2);

    cam.zoom(-1e6);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance - CAMERA_MIN_DISTANCE).abs() < 1e-2);
}

#[test]
fn one_wheel_notch_zooms_by_the_line_scale() {
    let mut cam = camera();
    let d0 = cam.distance;
    // A one-line scroll notch is worth WHEEL_LINE_PX pixels of delta
    cam.zoom(-WHEEL_LINE_PX * WHEEL_ZOOM_SPEED);
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.distance - (d0 - WHEEL_LINE_PX * WHEEL_ZOOM_SPEED)).abs() < 1e-3);
}

#[test]
fn pan_target_moves_the_eye_with_it() {
    let mut cam = camera();
    let eye0 = cam.eye();
    cam.pan_target(Vec3::new(0.5, 0.0, -0.5));
    let eye1 = cam.eye();
    assert!((eye1 - eye0 - Vec3::new(0.5, 0.0, -0.5)).length() < 1e-5);
}

#[test]
fn screen_center_ray_points_at_the_target() {
    let cam = camera();
    let ray = cam.screen_ray(400.0, 300.0, 800.0, 600.0);
    assert!((ray.origin - cam.eye()).length() < 1e-3);

    let expected = (cam.target - cam.eye()).normalize();
    assert!((ray.dir - expected).length() < 1e-3);
}

#[test]
fn corner_rays_diverge_from_the_view_axis() {
    let cam = camera();
    let center = cam.screen_ray(400.0, 300.0, 800.0, 600.0);
    let corner = cam.screen_ray(0.0, 0.0, 800.0, 600.0);
    assert!(center.dir.dot(corner.dir) < 0.999);
    // Top-left corner tilts up relative to the center ray
    assert!(corner.dir.y > center.dir.y);
}

#[test]
fn set_aspect_changes_the_projection() {
    let mut cam = camera();
    let before = cam.projection_matrix();
    cam.set_aspect(400.0, 800.0);
    assert_ne!(before, cam.projection_matrix());
}
