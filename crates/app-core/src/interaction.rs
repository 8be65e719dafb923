//! Marker placement and drag state for the cube scene.
//!
//! Two markers are created hidden and reused for the lifetime of the scene.
//! Placement clicks fill them in order; once both are placed either one can
//! be grabbed and dragged along the horizontal plane through its own
//! elevation. All geometric misses are silent no-ops.

use crate::constants::PICK_RADIUS;
use crate::input::{Cursor, EventResponse, InputEvent};
use crate::picking::{self, Aabb, Ray};
use glam::Vec3;

/// One of the two placeable markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marker {
    pub position: Vec3,
    pub visible: bool,
}

/// Placement + drag state machine over the two markers.
pub struct Interaction {
    markers: [Marker; 2],
    placed: usize,
    drag: Option<usize>,
    cube: Aabb,
}

impl Interaction {
    pub fn new(cube: Aabb) -> Self {
        Self {
            markers: [Marker::default(); 2],
            placed: 0,
            drag: None,
            cube,
        }
    }

    pub fn markers(&self) -> &[Marker; 2] {
        &self.markers
    }

    /// Number of markers placed so far (0..=2, never decreases).
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Index of the marker currently being dragged, if any.
    pub fn drag_index(&self) -> Option<usize> {
        self.drag
    }

    /// Segment endpoints, present exactly when both markers are placed.
    pub fn segment(&self) -> Option<(Vec3, Vec3)> {
        (self.placed == 2).then(|| (self.markers[0].position, self.markers[1].position))
    }

    /// Single entry point: dispatch a pointer event to the placement or
    /// drag handler based on current state.
    pub fn handle_event(&mut self, ev: InputEvent) -> EventResponse {
        match ev {
            InputEvent::Click(ray) => {
                self.place(ray);
                EventResponse::default()
            }
            InputEvent::PointerDown(ray) => self.begin_drag(ray),
            InputEvent::PointerMove(ray) => {
                self.update_drag(ray);
                EventResponse::default()
            }
            InputEvent::PointerUp => self.end_drag(),
        }
    }

    /// Place the next marker where the click ray hits the cube.
    ///
    /// No-op once both markers are placed or when the ray misses.
    fn place(&mut self, ray: Ray) -> bool {
        if self.placed >= 2 {
            return false;
        }
        let Some(t) = picking::ray_aabb(&ray, &self.cube) else {
            return false;
        };
        let point = ray.at(t);
        let marker = &mut self.markers[self.placed];
        marker.position = point;
        marker.visible = true;
        log::info!(
            "[click] placed marker {} at ({:.2}, {:.2}, {:.2})",
            self.placed,
            point.x,
            point.y,
            point.z
        );
        self.placed += 1;
        true
    }

    /// Try to claim a marker for dragging; only eligible once both exist.
    ///
    /// Hit volumes are tested in index order, first hit wins.
    fn begin_drag(&mut self, ray: Ray) -> EventResponse {
        if self.placed < 2 {
            return EventResponse::default();
        }
        for (i, marker) in self.markers.iter().enumerate() {
            if !marker.visible {
                continue;
            }
            if picking::ray_sphere(&ray, marker.position, PICK_RADIUS).is_some() {
                self.drag = Some(i);
                log::info!("[mouse] begin drag on marker {}", i);
                return EventResponse {
                    cursor: Some(Cursor::Grabbing),
                    rotate_enabled: Some(false),
                };
            }
        }
        EventResponse::default()
    }

    /// Move the dragged marker where the ray meets the horizontal plane at
    /// its current elevation. Y never changes during a drag session; a
    /// parallel ray leaves the position untouched for this frame.
    fn update_drag(&mut self, ray: Ray) -> bool {
        let Some(i) = self.drag else {
            return false;
        };
        let marker = &mut self.markers[i];
        let Some(hit) = picking::ray_plane_y(&ray, marker.position.y) else {
            return false;
        };
        marker.position.x = hit.x;
        marker.position.z = hit.z;
        true
    }

    /// Release the active drag; a release with no drag is a no-op.
    fn end_drag(&mut self) -> EventResponse {
        if let Some(i) = self.drag.take() {
            log::info!("[mouse] end drag on marker {}", i);
            EventResponse {
                cursor: Some(Cursor::Default),
                rotate_enabled: Some(true),
            }
        } else {
            EventResponse::default()
        }
    }
}
