//! Scroll-linked rotation of the showcase objects and cursor parallax.
//!
//! Every page section owns one object. Entering a section kicks that object
//! with an eased, additive spin; independently all objects rotate slowly every
//! frame and the camera group trails the cursor.

use crate::constants::*;
use crate::easing::{Ease, Tween};
use crate::layout::{showcase_placement, Viewport};
use crate::pointer::PointerState;
use crate::transform::Transform;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// One of the decorative meshes, pinned to a page section.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub section: usize,
    pub transform: Transform,
    tweens: SmallVec<[Tween; 2]>,
}

impl SceneObject {
    fn new(section: usize) -> Self {
        Self {
            section,
            transform: Transform::from_position(Vec3::new(
                OBJECT_BASE_X[section],
                -OBJECTS_DISTANCE * section as f32,
                0.0,
            )),
            tweens: SmallVec::new(),
        }
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }
}

/// Scroll position and the section it resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub current_section: usize,
}

/// Section index for a scroll offset, clamped to the available objects.
pub fn section_for_scroll(scroll_y: f32, viewport_height: f32) -> usize {
    let span = (viewport_height * SECTION_HEIGHT_FACTOR).max(1.0);
    let raw = (scroll_y.max(0.0) / span).round() as usize;
    raw.min(SECTION_COUNT - 1)
}

/// Rotation added when `section` is entered.
pub fn section_kick(section: usize) -> Vec3 {
    if section == Y_ONLY_SECTION {
        Vec3::from(SECTION_Y_ONLY_KICK)
    } else {
        Vec3::from(SECTION_KICK)
    }
}

pub struct ScrollRotator {
    objects: [SceneObject; SECTION_COUNT],
    scroll: ScrollState,
    viewport: Viewport,
    camera_group: Vec2,
}

impl ScrollRotator {
    pub fn new(viewport: Viewport) -> Self {
        let mut rotator = Self {
            objects: [SceneObject::new(0), SceneObject::new(1), SceneObject::new(2)],
            scroll: ScrollState::default(),
            viewport,
            camera_group: Vec2::ZERO,
        };
        rotator.on_resize(viewport);
        rotator
    }

    /// Record a scroll offset. Returns the newly entered section, if the
    /// offset moved into a different one.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport: Viewport) -> Option<usize> {
        self.viewport = viewport;
        self.scroll.scroll_y = scroll_y;
        let section = section_for_scroll(scroll_y, viewport.height);
        if section == self.scroll.current_section {
            return None;
        }
        self.scroll.current_section = section;
        let obj = &mut self.objects[section];
        obj.tweens.push(Tween::new(
            section_kick(section),
            SECTION_TWEEN_SECS,
            Ease::Power2InOut,
        ));
        log::debug!("[scroll] entered section {section}");
        Some(section)
    }

    /// Reposition and rescale the objects for the viewport width.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for (obj, (x, scale)) in self.objects.iter_mut().zip(showcase_placement(viewport)) {
            obj.transform.position.x = x;
            obj.transform.scale = Vec3::splat(scale);
        }
    }

    /// Per-frame update with the frame's delta time in seconds.
    pub fn tick(&mut self, dt: f32, pointer: PointerState) {
        let target = Vec2::new(pointer.x, -pointer.y);
        self.camera_group += (target - self.camera_group) * PARALLAX_RATE * dt;

        for obj in &mut self.objects {
            let r = &mut obj.transform.rotation;
            if obj.section != Y_ONLY_SECTION {
                r.x += dt * SPIN_RATE_X;
            }
            r.y += dt * SPIN_RATE_Y;

            for tween in &mut obj.tweens {
                obj.transform.rotation += tween.step(dt);
            }
            obj.tweens.retain(|t| !t.is_finished());
        }
    }

    /// Vertical camera offset that scrolls the view past the objects.
    pub fn camera_y(&self) -> f32 {
        -self.scroll.scroll_y / self.viewport.height.max(1.0) * OBJECTS_DISTANCE
    }

    /// Smoothed parallax offset of the camera group.
    pub fn camera_group(&self) -> Vec2 {
        self.camera_group
    }

    /// World-space eye of the camera riding inside the group.
    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(
            self.camera_group.x,
            self.camera_group.y + self.camera_y(),
            SHOWCASE_CAMERA_Z,
        )
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn current_section(&self) -> usize {
        self.scroll.current_section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_rounds_and_clamps() {
        assert_eq!(section_for_scroll(0.0, 1000.0), 0);
        assert_eq!(section_for_scroll(599.0, 1000.0), 0);
        assert_eq!(section_for_scroll(600.0, 1000.0), 1);
        assert_eq!(section_for_scroll(2400.0, 1000.0), 2);
        assert_eq!(section_for_scroll(99_999.0, 1000.0), 2);
        assert_eq!(section_for_scroll(-50.0, 1000.0), 0);
    }

    #[test]
    fn same_section_scroll_starts_nothing() {
        let vp = Viewport::new(1200.0, 1000.0);
        let mut rot = ScrollRotator::new(vp);
        assert_eq!(rot.on_scroll(100.0, vp), None);
        assert!(rot.objects().iter().all(|o| o.active_tweens() == 0));
    }

    #[test]
    fn objects_stack_by_section() {
        let rot = ScrollRotator::new(Viewport::new(1200.0, 800.0));
        let ys: Vec<f32> = rot.objects().iter().map(|o| o.transform.position.y).collect();
        assert_eq!(ys, vec![0.0, -4.0, -8.0]);
    }
}
