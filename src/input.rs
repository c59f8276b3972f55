use folio_core::{PointerRange, PointerState, Viewport};
use web_sys as web;

/// Orbit drag in progress on the snow canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, ev: &web::PointerEvent) {
        self.active = true;
        self.pointer_id = ev.pointer_id();
        self.last_x = ev.client_x() as f32;
        self.last_y = ev.client_y() as f32;
    }

    /// Movement since the previous event, or `None` if this pointer is not dragging.
    pub fn delta(&mut self, ev: &web::PointerEvent) -> Option<(f32, f32)> {
        if !self.active || ev.pointer_id() != self.pointer_id {
            return None;
        }
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        let d = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(d)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[inline]
pub fn pointer_from_mouse(ev: &web::MouseEvent, viewport: Viewport, range: PointerRange) -> PointerState {
    PointerState::from_client(ev.client_x() as f32, ev.client_y() as f32, viewport, range)
}

#[inline]
pub fn is_snow_toggle_key(key: &str) -> bool {
    crate::constants::SNOW_TOGGLE_KEYS.contains(&key)
}
