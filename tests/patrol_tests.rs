// Host-side tests for the car patrol state machine.
// The web crate is wasm-only, so these exercise folio-core directly.

use folio_core::{CarPatrol, PatrolPhase, Viewport};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

const CAMERA_Z: f32 = 20.0;

fn desktop() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

fn installed(viewport: Viewport) -> CarPatrol {
    let mut patrol = CarPatrol::new(viewport);
    patrol.install();
    patrol
}

fn phase(p: &CarPatrol) -> PatrolPhase {
    p.object().unwrap().phase
}

/// Tick until the phase changes; returns the number of ticks taken.
fn run_until_phase_change(p: &mut CarPatrol, limit: usize) -> usize {
    let start = phase(p);
    for n in 1..=limit {
        p.tick(CAMERA_Z);
        if phase(p) != start {
            return n;
        }
    }
    panic!("phase {start:?} did not change within {limit} ticks");
}

#[test]
fn approach_ends_past_camera_and_snaps_to_far_waypoint() {
    let mut p = installed(desktop());
    let mut last_z = 0.0;
    for _ in 0..1000 {
        let obj = p.object().unwrap();
        if obj.phase != PatrolPhase::ApproachCamera {
            break;
        }
        last_z = obj.transform.position.z;
        p.tick(CAMERA_Z);
    }
    let obj = p.object().unwrap();
    assert_eq!(obj.phase, PatrolPhase::SlideX);
    // the tick that crossed camera z + 5 started just below it
    assert!(last_z + 0.1 >= CAMERA_Z + 5.0 - 1e-3);
    assert_eq!(obj.transform.rotation.y, -FRAC_PI_2);
    assert_eq!(obj.transform.position, Vec3::new(5.0 * 8.0, 0.0, 0.0));
}

#[test]
fn slide_stops_at_home_offset_without_touching_rotation() {
    let mut p = installed(desktop());
    run_until_phase_change(&mut p, 1000);
    assert_eq!(phase(&p), PatrolPhase::SlideX);

    let mut prev_x = p.object().unwrap().transform.position.x;
    loop {
        p.tick(CAMERA_Z);
        let obj = p.object().unwrap();
        let x = obj.transform.position.x;
        if obj.phase == PatrolPhase::RotateInPlace {
            assert!(x <= p.home_offset_x());
            assert!(prev_x > p.home_offset_x());
            assert_eq!(obj.transform.rotation.y, -FRAC_PI_2);
            break;
        }
        assert!(x > p.home_offset_x());
        assert!((prev_x - x - 0.1).abs() < 1e-4);
        prev_x = x;
    }
}

#[test]
fn rotate_in_place_restarts_cycle_once_facing_forward() {
    let mut p = installed(desktop());
    run_until_phase_change(&mut p, 1000);
    run_until_phase_change(&mut p, 1000);
    assert_eq!(phase(&p), PatrolPhase::RotateInPlace);

    let mut prev = p.object().unwrap().transform.rotation.y;
    loop {
        p.tick(CAMERA_Z);
        let obj = p.object().unwrap();
        let r = obj.transform.rotation.y;
        assert!((r - prev - 0.1).abs() < 1e-5, "rotation must step by 0.1");
        if r >= 0.0 {
            assert_eq!(obj.phase, PatrolPhase::ApproachCamera);
            // no snap back to zero
            assert!(r > 0.0 && r < 0.1);
            break;
        }
        assert_eq!(obj.phase, PatrolPhase::RotateInPlace);
        prev = r;
    }
}

#[test]
fn cycle_repeats_forever() {
    let mut p = installed(desktop());
    let mut approaches = 0;
    let mut prev = phase(&p);
    for _ in 0..5000 {
        p.tick(CAMERA_Z);
        let now = phase(&p);
        if now == PatrolPhase::ApproachCamera && prev == PatrolPhase::RotateInPlace {
            approaches += 1;
        }
        prev = now;
    }
    assert!(approaches >= 5, "only {approaches} full cycles");
}

#[test]
fn compact_viewport_uses_small_offsets() {
    let mut p = installed(Viewport::new(480.0, 800.0));
    assert_eq!(p.home_offset_x(), 0.5);
    assert_eq!(p.object().unwrap().transform.scale, Vec3::splat(0.3));
    run_until_phase_change(&mut p, 1000);
    assert_eq!(
        p.object().unwrap().transform.position,
        Vec3::new(0.5 * 8.0, 0.0, 0.0)
    );
}

#[test]
fn resize_mid_slide_changes_target_only() {
    let mut p = installed(desktop());
    run_until_phase_change(&mut p, 1000);
    p.tick(CAMERA_Z);
    p.on_resize(Viewport::new(500.0, 800.0));
    assert_eq!(phase(&p), PatrolPhase::SlideX);
    assert_eq!(p.object().unwrap().transform.scale, Vec3::splat(0.3));
    // now slides on until the compact home offset
    run_until_phase_change(&mut p, 1000);
    assert!(p.object().unwrap().transform.position.x <= 0.5);
}
