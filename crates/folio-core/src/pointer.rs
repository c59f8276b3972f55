use crate::layout::Viewport;

/// Range the cursor offset from screen centre is mapped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRange {
    /// [-1, 1] on both axes.
    Unit,
    /// [-0.5, 0.5] on both axes (the showcase scene).
    Half,
}

/// Cursor position relative to the viewport centre, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Normalize client coordinates against the viewport.
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport, range: PointerRange) -> Self {
        let u = client_x / viewport.width.max(1.0) - 0.5;
        let v = client_y / viewport.height.max(1.0) - 0.5;
        let k = match range {
            PointerRange::Unit => 2.0,
            PointerRange::Half => 1.0,
        };
        Self { x: u * k, y: v * k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_and_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(
            PointerState::from_client(400.0, 300.0, vp, PointerRange::Half),
            PointerState { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            PointerState::from_client(0.0, 600.0, vp, PointerRange::Half),
            PointerState { x: -0.5, y: 0.5 }
        );
        assert_eq!(
            PointerState::from_client(800.0, 0.0, vp, PointerRange::Unit),
            PointerState { x: 1.0, y: -1.0 }
        );
    }
}
