use glam::Vec3;

// Shared scene and interaction tuning constants used by both frontends.

// Scene layout
pub const CUBE_HALF_EXTENT: f32 = 0.5;
pub const MARKER_RADIUS: f32 = 0.1; // visual sphere radius
pub const PICK_RADIUS: f32 = MARKER_RADIUS; // grab volume matches the visual sphere
pub const AXES_LENGTH: f32 = 2.0; // target gizmo axis length

// Camera
pub const CAMERA_EYE: [f32; 3] = [5.0, 3.0, 5.0];
pub const CAMERA_FOVY: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;
pub const CAMERA_PITCH_LIMIT: f32 = 1.55; // just short of the poles
pub const ROTATE_SPEED: f32 = 0.005; // radians per pixel of pointer travel
pub const WHEEL_ZOOM_SPEED: f32 = 0.01; // distance units per scroll delta unit
pub const WHEEL_LINE_PX: f32 = 20.0; // pixel equivalent of one scroll-line notch
pub const CAMERA_DAMPING_PER_SEC: f32 = 3.0; // exponential approach rate toward goal angles

// Interaction
pub const TARGET_PAN_STEP: f32 = 0.5; // per key press
pub const CLICK_SLOP_PX: f32 = 5.0; // max press-release travel still counted as a click

// Palette (linear space)
pub const BACKGROUND_COLOR: [f32; 3] = [0.016, 0.016, 0.016]; // #202020
pub const CUBE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const MARKER_COLORS: [[f32; 4]; 2] = [
    [1.0, 0.0, 0.0, 1.0], // first marker, red
    [0.0, 0.0, 1.0, 1.0], // second marker, blue
];
pub const SEGMENT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
pub const AXIS_COLORS: [[f32; 3]; 3] = [
    [0.9, 0.2, 0.2], // x
    [0.2, 0.9, 0.2], // y
    [0.2, 0.4, 0.9], // z
];

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0]; // directional, pointing at the origin
pub const AMBIENT_LIGHT: f32 = 0.25;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn light_dir_vec3() -> Vec3 {
    Vec3::from(LIGHT_POSITION).normalize()
}
