//! Falling snow particle field.
//!
//! Positions and fall speeds are kept in separate buffers so that the
//! positions slice can be uploaded to the GPU without repacking.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;

pub struct SnowField {
    positions: Vec<Vec3>,
    speeds: Vec<f32>,
    snowing: bool,
}

impl SnowField {
    /// Scatter `count` flakes over the spawn volume.
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut speeds = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                random_across(rng),
                rng.gen::<f32>() * SNOW_SPAWN_HEIGHT,
                random_across(rng),
            ));
            speeds.push(SNOW_SPEED_MIN + rng.gen::<f32>() * SNOW_SPEED_SPAN);
        }
        Self {
            positions,
            speeds,
            snowing: true,
        }
    }

    /// Move every flake down by its own speed; flakes that fall through the
    /// floor reappear at the top at a fresh x/z.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        if !self.snowing {
            return;
        }
        for (p, speed) in self.positions.iter_mut().zip(&self.speeds) {
            p.y -= speed * SNOW_STEP;
            if p.y < SNOW_FLOOR_Y {
                p.y = SNOW_RESPAWN_Y;
                p.x = random_across(rng);
                p.z = random_across(rng);
            }
        }
    }

    pub fn is_snowing(&self) -> bool {
        self.snowing
    }

    pub fn set_snowing(&mut self, snowing: bool) {
        self.snowing = snowing;
    }

    /// Flip snowing on/off and return the new state.
    pub fn toggle_snowing(&mut self) -> bool {
        self.snowing = !self.snowing;
        self.snowing
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[inline]
fn random_across(rng: &mut impl Rng) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * SNOW_HALF_EXTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_distribution_within_spawn_volume() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = SnowField::new(SNOW_COUNT, &mut rng);
        assert_eq!(field.len(), SNOW_COUNT);
        for (p, s) in field.positions().iter().zip(field.speeds()) {
            assert!((-50.0..50.0).contains(&p.x));
            assert!((-50.0..50.0).contains(&p.z));
            assert!((0.0..100.0).contains(&p.y));
            assert!((0.5..1.5).contains(s));
        }
    }

    #[test]
    fn paused_field_does_not_drift() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = SnowField::new(64, &mut rng);
        field.set_snowing(false);
        let before = field.positions().to_vec();
        for _ in 0..500 {
            field.advance(&mut rng);
        }
        assert_eq!(before, field.positions());
    }
}
