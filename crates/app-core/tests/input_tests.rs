use glam::Vec3;
use picket_core::constants::TARGET_PAN_STEP;
use picket_core::input::{pan_delta, pan_key_for_dom_key};
use picket_core::{EventResponse, PanKey};

#[test]
fn dom_key_mapping() {
    assert_eq!(pan_key_for_dom_key("ArrowUp"), Some(PanKey::Forward));
    assert_eq!(pan_key_for_dom_key("ArrowDown"), Some(PanKey::Back));
    assert_eq!(pan_key_for_dom_key("ArrowLeft"), Some(PanKey::Left));
    assert_eq!(pan_key_for_dom_key("ArrowRight"), Some(PanKey::Right));
    assert_eq!(pan_key_for_dom_key("w"), Some(PanKey::Raise));
    assert_eq!(pan_key_for_dom_key("W"), Some(PanKey::Raise));
    assert_eq!(pan_key_for_dom_key("s"), Some(PanKey::Lower));
    assert_eq!(pan_key_for_dom_key("S"), Some(PanKey::Lower));
}

#[test]
fn unmapped_keys_are_ignored() {
    assert_eq!(pan_key_for_dom_key("a"), None);
    assert_eq!(pan_key_for_dom_key("Enter"), None);
    assert_eq!(pan_key_for_dom_key(" "), None);
    assert_eq!(pan_key_for_dom_key("Escape"), None);
}

#[test]
fn pan_deltas_are_axis_aligned_steps() {
    assert_eq!(pan_delta(PanKey::Left), Vec3::new(-TARGET_PAN_STEP, 0.0, 0.0));
    assert_eq!(pan_delta(PanKey::Right), Vec3::new(TARGET_PAN_STEP, 0.0, 0.0));
    assert_eq!(pan_delta(PanKey::Forward), Vec3::new(0.0, 0.0, -TARGET_PAN_STEP));
    assert_eq!(pan_delta(PanKey::Back), Vec3::new(0.0, 0.0, TARGET_PAN_STEP));
    assert_eq!(pan_delta(PanKey::Raise), Vec3::new(0.0, TARGET_PAN_STEP, 0.0));
    assert_eq!(pan_delta(PanKey::Lower), Vec3::new(0.0, -TARGET_PAN_STEP, 0.0));
}

#[test]
fn opposite_keys_cancel() {
    assert_eq!(pan_delta(PanKey::Left) + pan_delta(PanKey::Right), Vec3::ZERO);
    assert_eq!(pan_delta(PanKey::Forward) + pan_delta(PanKey::Back), Vec3::ZERO);
    assert_eq!(pan_delta(PanKey::Raise) + pan_delta(PanKey::Lower), Vec3::ZERO);
}

#[test]
fn default_response_requests_nothing() {
    let resp = EventResponse::default();
    assert!(resp.cursor.is_none());
    assert!(resp.rotate_enabled.is_none());
}
