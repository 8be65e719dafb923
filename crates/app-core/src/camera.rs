//! Orbit camera shared by the native and web frontends.
//!
//! Yaw/pitch/distance around a movable target, with damped rotation input
//! and a screen-to-world unprojection used by picking.

use crate::constants::{
    CAMERA_DAMPING_PER_SEC, CAMERA_FOVY, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE,
    CAMERA_PITCH_LIMIT, CAMERA_ZFAR, CAMERA_ZNEAR, ROTATE_SPEED,
};
use crate::picking::Ray;
use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub aspect: f32,
    /// Rotation input is ignored while false (suspended during marker drags).
    pub rotate_enabled: bool,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitCamera {
    /// Build an orbit camera looking from `eye` at `target`.
    pub fn from_eye_target(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / offset.length()).asin();
        Self {
            target,
            yaw,
            pitch,
            distance,
            aspect,
            rotate_enabled: true,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// World-space eye position derived from the orbit parameters.
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(self.distance * cp * sy, self.distance * sp, self.distance * cp * cy)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY, self.aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Feed a pointer drag delta (pixels) into the rotation goal.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !self.rotate_enabled {
            return;
        }
        self.goal_yaw -= dx * ROTATE_SPEED;
        self.goal_pitch =
            (self.goal_pitch + dy * ROTATE_SPEED).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// Adjust the zoom goal; positive moves the eye away from the target.
    pub fn zoom(&mut self, amount: f32) {
        self.goal_distance =
            (self.goal_distance + amount).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Nudge the orbit target (keyboard panning). Applied immediately.
    pub fn pan_target(&mut self, delta: Vec3) {
        self.target += delta;
    }

    /// Ease the current orbit parameters toward their goals (damping).
    pub fn update(&mut self, dt: f32) {
        let k = 1.0 - (-CAMERA_DAMPING_PER_SEC * dt.max(0.0)).exp();
        self.yaw += (self.goal_yaw - self.yaw) * k;
        self.pitch += (self.goal_pitch - self.pitch) * k;
        self.distance += (self.goal_distance - self.distance) * k;
    }

    /// Compute a world-space ray from pixel coordinates on the surface.
    ///
    /// `sx`, `sy` are in the surface's backing-store pixel space; the ray
    /// originates at the eye and passes through the unprojected far point.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> Ray {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let eye = self.eye();
        Ray::new(eye, p_far - eye)
    }
}
