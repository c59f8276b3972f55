//! Camera description and damped orbit controls.
//!
//! These types avoid any platform API; the web frontend feeds pointer deltas
//! in and reads matrices out.

use crate::constants::*;
use crate::layout::Viewport;
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Perspective camera with the shared field of view and clip planes.
    pub fn perspective(eye: Vec3, target: Vec3, viewport: Viewport) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// World-space size of a size-attenuated point of `pixel_size` at unit
    /// scale, matching `size * (height / 2) / depth` pixels at every depth.
    pub fn attenuated_point_world_size(&self, pixel_size: f32) -> f32 {
        pixel_size * (self.fovy_radians * 0.5).tan()
    }
}

/// Damped orbit around a target point.
///
/// Drag input accumulates into a pending spherical delta; [`OrbitControls::update`]
/// applies a fraction of it each frame, so motion eases out after release.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
}

impl OrbitControls {
    /// Start from the camera's current eye position.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            damping: ORBIT_DAMPING,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
        }
    }

    /// Pointer drag of (`dx`, `dy`) CSS pixels on an element `height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.delta_theta -= TAU * dx / h;
        self.delta_phi -= TAU * dy / h;
    }

    /// Positive `wheel_delta_y` moves away from the target.
    pub fn zoom_by_wheel(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y > 0.0 {
            self.zoom_scale /= ORBIT_ZOOM_STEP;
        } else if wheel_delta_y < 0.0 {
            self.zoom_scale *= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply pending motion and write the resulting eye/target into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        self.theta += self.delta_theta * self.damping;
        self.phi += self.delta_phi * self.damping;
        self.phi = self
            .phi
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.radius = (self.radius * self.zoom_scale).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.zoom_scale = 1.0;

        camera.target = self.target;
        camera.eye = self.target + self.offset();
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn offset(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snow_camera() -> Camera {
        Camera::perspective(
            Vec3::from(SNOW_CAMERA_EYE),
            Vec3::ZERO,
            Viewport::new(1280.0, 720.0),
        )
    }

    #[test]
    fn idle_update_preserves_eye() {
        let mut cam = snow_camera();
        let mut orbit = OrbitControls::new(cam.eye, cam.target);
        orbit.update(&mut cam);
        assert!((cam.eye - Vec3::new(0.0, 5.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn drag_is_damped_and_settles() {
        let mut cam = snow_camera();
        let mut orbit = OrbitControls::new(cam.eye, cam.target);
        orbit.rotate_by_pixels(120.0, 0.0, 720.0);
        orbit.update(&mut cam);
        let first = cam.eye;
        for _ in 0..400 {
            orbit.update(&mut cam);
        }
        let settled = cam.eye;
        orbit.update(&mut cam);
        // first frame moves only a fraction of the way; later frames converge
        assert!((first - Vec3::new(0.0, 5.0, 20.0)).length() > 0.0);
        assert!((cam.eye - settled).length() < 1e-3);
        // orbit keeps the distance to the target
        assert!((cam.eye.length() - orbit.radius()).abs() < 1e-3);
    }

    #[test]
    fn wheel_zoom_changes_radius() {
        let mut cam = snow_camera();
        let mut orbit = OrbitControls::new(cam.eye, cam.target);
        let r0 = orbit.radius();
        orbit.zoom_by_wheel(100.0);
        orbit.update(&mut cam);
        assert!(orbit.radius() > r0);
        orbit.zoom_by_wheel(-100.0);
        orbit.zoom_by_wheel(-100.0);
        orbit.update(&mut cam);
        assert!(orbit.radius() < r0);
    }
}
