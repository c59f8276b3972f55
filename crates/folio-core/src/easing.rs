use glam::Vec3;

/// Easing curve applied to a normalized time parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic S-curve (GSAP's `power2.inOut`).
    Power2InOut,
}

impl Ease {
    /// Map `t` in [0, 1] to eased progress in [0, 1]; `t` is clamped.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A relative ("+=") tween over a 3-component value.
///
/// The tween never owns the value it animates. Each [`Tween::step`] returns the
/// increment to add, so other writers may keep changing the same value and the
/// tween still contributes exactly `offset` by the time it finishes.
#[derive(Clone, Debug)]
pub struct Tween {
    pub offset: Vec3,
    pub duration: f32,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(offset: Vec3, duration: f32, ease: Ease) -> Self {
        Self {
            offset,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return this step's contribution.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        if self.is_finished() {
            return Vec3::ZERO;
        }
        let before = self.progress();
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        let after = self.progress();
        self.offset * (self.ease.apply(after) - self.ease.apply(before))
    }

    /// Linear progress in [0, 1]; zero-length tweens are complete immediately.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power2_in_out_endpoints_and_midpoint() {
        let e = Ease::Power2InOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(e.apply(0.25) < 0.25);
        assert!(e.apply(0.75) > 0.75);
    }

    #[test]
    fn power2_in_out_is_point_symmetric() {
        let e = Ease::Power2InOut;
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let sum = e.apply(t) + e.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5, "asymmetric at t={t}");
        }
    }

    #[test]
    fn tween_contributes_exact_offset_with_uneven_steps() {
        let mut tw = Tween::new(Vec3::new(6.0, 3.0, 6.0), 2.0, Ease::Power2InOut);
        let mut total = Vec3::ZERO;
        for dt in [0.016, 0.033, 0.5, 0.2, 0.9, 0.017, 1.0] {
            total += tw.step(dt);
        }
        assert!(tw.is_finished());
        assert!((total - Vec3::new(6.0, 3.0, 6.0)).length() < 1e-4);
        assert_eq!(tw.step(0.1), Vec3::ZERO);
    }
}
