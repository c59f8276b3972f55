//! Viewport-dependent layout rules.
//!
//! Both scenes switch to a compact arrangement below [`COMPACT_WIDTH_PX`].
//! Nothing here forces an animation phase change; callers read the values the
//! next time they need them.

use crate::constants::*;

/// CSS-pixel size of the browser viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH_PX
    }

    /// Aspect ratio for projection; guards against a zero-height viewport.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// X position the patrolling car returns to after sliding.
#[inline]
pub fn patrol_home_offset(viewport: Viewport) -> f32 {
    if viewport.is_compact() {
        PATROL_HOME_OFFSET_COMPACT
    } else {
        PATROL_HOME_OFFSET
    }
}

#[inline]
pub fn patrol_scale(viewport: Viewport) -> f32 {
    if viewport.is_compact() {
        PATROL_SCALE_COMPACT
    } else {
        PATROL_SCALE
    }
}

/// Per-section x position and uniform scale of the showcase objects.
pub fn showcase_placement(viewport: Viewport) -> [(f32, f32); SECTION_COUNT] {
    let mut out = [(0.0, OBJECT_SCALE_COMPACT); SECTION_COUNT];
    if !viewport.is_compact() {
        for (slot, base_x) in out.iter_mut().zip(OBJECT_BASE_X) {
            *slot = (base_x, OBJECT_SCALE);
        }
    }
    out
}

/// Device pixel ratio used for the canvas backing store.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    device_pixel_ratio.min(MAX_PIXEL_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_threshold_is_exclusive() {
        assert!(Viewport::new(599.0, 800.0).is_compact());
        assert!(!Viewport::new(600.0, 800.0).is_compact());
    }

    #[test]
    fn showcase_placement_restores_defaults() {
        let compact = showcase_placement(Viewport::new(375.0, 812.0));
        assert!(compact.iter().all(|&(x, s)| x == 0.0 && s == 0.7));
        let wide = showcase_placement(Viewport::new(1440.0, 900.0));
        assert_eq!(wide, [(-2.0, 1.0), (2.0, 1.0), (-2.0, 1.0)]);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    }
}
