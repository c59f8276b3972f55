//! Scripted patrol of the car model in the snow scene.
//!
//! The car drives toward the camera, is placed at a far waypoint and slides
//! back along X to its home offset, then turns in place until it faces forward
//! again. The cycle never ends.

use crate::constants::*;
use crate::layout::{patrol_home_offset, patrol_scale, Viewport};
use crate::transform::Transform;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatrolPhase {
    ApproachCamera,
    SlideX,
    RotateInPlace,
}

/// The car once its model has loaded.
#[derive(Clone, Debug)]
pub struct PatrolObject {
    pub transform: Transform,
    pub phase: PatrolPhase,
}

/// Drives the car; every operation is a no-op until [`CarPatrol::install`].
#[derive(Clone, Debug)]
pub struct CarPatrol {
    home_offset_x: f32,
    scale: f32,
    object: Option<PatrolObject>,
}

impl CarPatrol {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            home_offset_x: patrol_home_offset(viewport),
            scale: patrol_scale(viewport),
            object: None,
        }
    }

    /// Called once the model is available. Later calls are ignored.
    pub fn install(&mut self) {
        if self.object.is_some() {
            log::warn!("[patrol] car already installed; ignoring");
            return;
        }
        let transform = Transform {
            position: Vec3::new(self.home_offset_x, 0.0, 0.0),
            scale: Vec3::splat(self.scale),
            ..Transform::default()
        };
        self.object = Some(PatrolObject {
            transform,
            phase: PatrolPhase::ApproachCamera,
        });
        log::info!("[patrol] car installed at x={:.2}", self.home_offset_x);
    }

    pub fn is_ready(&self) -> bool {
        self.object.is_some()
    }

    pub fn object(&self) -> Option<&PatrolObject> {
        self.object.as_ref()
    }

    pub fn home_offset_x(&self) -> f32 {
        self.home_offset_x
    }

    /// Recompute the home offset and scale. The phase is left alone; the new
    /// offset is picked up the next time a phase reads it.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.home_offset_x = patrol_home_offset(viewport);
        self.scale = patrol_scale(viewport);
        if let Some(obj) = &mut self.object {
            obj.transform.scale = Vec3::splat(self.scale);
        }
    }

    /// One animation step relative to the current camera Z.
    pub fn tick(&mut self, camera_z: f32) {
        let home = self.home_offset_x;
        let Some(obj) = &mut self.object else {
            return;
        };
        let t = &mut obj.transform;
        match obj.phase {
            PatrolPhase::ApproachCamera => {
                t.position.z += PATROL_STEP;
                if t.position.z >= camera_z + PATROL_CAMERA_MARGIN {
                    t.rotation.y = -FRAC_PI_2;
                    t.position = Vec3::new(home * PATROL_FAR_FACTOR, 0.0, 0.0);
                    obj.phase = PatrolPhase::SlideX;
                }
            }
            PatrolPhase::SlideX => {
                t.rotation.y = -FRAC_PI_2;
                t.position.x -= PATROL_STEP;
                if t.position.x <= home {
                    obj.phase = PatrolPhase::RotateInPlace;
                }
            }
            PatrolPhase::RotateInPlace => {
                // rotation.y is not snapped back to 0; the overshoot carries
                // into the next cycle
                if t.rotation.y < 0.0 {
                    t.rotation.y += PATROL_STEP;
                }
                if t.rotation.y >= 0.0 {
                    obj.phase = PatrolPhase::ApproachCamera;
                }
            }
        }
    }
}
