use crate::constants::TARGET_PAN_STEP;
use crate::picking::Ray;
use glam::Vec3;

/// Last known pointer position in surface pixels, plus button state.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Cursor affordance requested by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grabbing,
}

/// A pointer event, already resolved to a world-space ray by the frontend.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Click(Ray),
    PointerDown(Ray),
    PointerMove(Ray),
    PointerUp,
}

/// Side effects the frontend should apply after an event is handled.
///
/// `None` fields mean "leave as is".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventResponse {
    pub cursor: Option<Cursor>,
    pub rotate_enabled: Option<bool>,
}

/// Camera-target pan keys (arrows plus w/s for vertical motion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanKey {
    Left,
    Right,
    Forward,
    Back,
    Raise,
    Lower,
}

#[inline]
pub fn pan_key_for_dom_key(key: &str) -> Option<PanKey> {
    match key {
        "ArrowUp" => Some(PanKey::Forward),
        "ArrowDown" => Some(PanKey::Back),
        "ArrowLeft" => Some(PanKey::Left),
        "ArrowRight" => Some(PanKey::Right),
        "w" | "W" => Some(PanKey::Raise),
        "s" | "S" => Some(PanKey::Lower),
        _ => None,
    }
}

/// World-space nudge applied to the camera target for one key press.
#[inline]
pub fn pan_delta(key: PanKey) -> Vec3 {
    match key {
        PanKey::Left => Vec3::new(-TARGET_PAN_STEP, 0.0, 0.0),
        PanKey::Right => Vec3::new(TARGET_PAN_STEP, 0.0, 0.0),
        PanKey::Forward => Vec3::new(0.0, 0.0, -TARGET_PAN_STEP),
        PanKey::Back => Vec3::new(0.0, 0.0, TARGET_PAN_STEP),
        PanKey::Raise => Vec3::new(0.0, TARGET_PAN_STEP, 0.0),
        PanKey::Lower => Vec3::new(0.0, -TARGET_PAN_STEP, 0.0),
    }
}
