// Host-side tests for the scroll-linked showcase rotator.

use folio_core::{PointerRange, PointerState, ScrollRotator, Viewport};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn desktop() -> Viewport {
    Viewport::new(1280.0, 1000.0)
}

fn rotations(r: &ScrollRotator) -> Vec<Vec3> {
    r.objects().iter().map(|o| o.transform.rotation).collect()
}

/// Continuous spin accumulated over `secs` for a section's object.
fn base_spin(section: usize, secs: f32) -> Vec3 {
    let x = if section == 1 { 0.0 } else { secs * 0.1 };
    Vec3::new(x, secs * 0.12, 0.0)
}

fn run(r: &mut ScrollRotator, secs: f32) {
    let steps = (secs / DT).round() as usize;
    for _ in 0..steps {
        r.tick(DT, PointerState::default());
    }
}

#[test]
fn entering_section_one_spins_only_y() {
    let mut r = ScrollRotator::new(desktop());
    assert_eq!(r.on_scroll(1200.0, desktop()), Some(1));
    run(&mut r, 2.5);
    let rot = rotations(&r);
    let expected = base_spin(1, 2.5) + Vec3::new(0.0, 6.0, 0.0);
    assert!((rot[1] - expected).length() < 1e-3, "{:?}", rot[1]);
    // the other objects only spun
    assert!((rot[0] - base_spin(0, 2.5)).length() < 1e-3);
    assert!((rot[2] - base_spin(2, 2.5)).length() < 1e-3);
}

#[test]
fn entering_other_sections_spins_all_axes() {
    let mut r = ScrollRotator::new(desktop());
    assert_eq!(r.on_scroll(2400.0, desktop()), Some(2));
    run(&mut r, 2.5);
    let rot = rotations(&r);
    let expected = base_spin(2, 2.5) + Vec3::new(6.0, 3.0, 6.0);
    assert!((rot[2] - expected).length() < 1e-3, "{:?}", rot[2]);

    assert_eq!(r.on_scroll(0.0, desktop()), Some(0));
    run(&mut r, 2.5);
    let rot = rotations(&r);
    let expected = base_spin(0, 5.0) + Vec3::new(6.0, 3.0, 6.0);
    assert!((rot[0] - expected).length() < 1e-3, "{:?}", rot[0]);
}

#[test]
fn kick_is_eased_not_instant() {
    let mut r = ScrollRotator::new(desktop());
    r.on_scroll(1200.0, desktop());
    run(&mut r, 0.2);
    let early = rotations(&r)[1].y - base_spin(1, 0.2).y;
    run(&mut r, 0.8);
    let half = rotations(&r)[1].y - base_spin(1, 1.0).y;
    assert!(early > 0.0 && early < 0.1, "early={early}");
    assert!((half - 3.0).abs() < 0.05, "half={half}");
}

#[test]
fn section_one_object_never_gains_x_rotation() {
    let mut r = ScrollRotator::new(desktop());
    run(&mut r, 10.0);
    let rot = rotations(&r);
    assert_eq!(rot[1].x, 0.0);
    assert!(rot[0].x > 0.0 && rot[2].x > 0.0);
}

#[test]
fn camera_group_eases_toward_pointer() {
    let vp = desktop();
    let mut r = ScrollRotator::new(vp);
    let pointer = PointerState::from_client(1280.0, 0.0, vp, PointerRange::Half);
    assert_eq!(pointer, PointerState { x: 0.5, y: -0.5 });
    let target = Vec2::new(0.5, 0.5);

    r.tick(DT, pointer);
    let first = r.camera_group();
    assert!((first - target * 5.0 * DT).length() < 1e-6);

    let mut prev_dist = (target - first).length();
    for _ in 0..300 {
        r.tick(DT, pointer);
        let d = (target - r.camera_group()).length();
        assert!(d <= prev_dist);
        prev_dist = d;
    }
    assert!(prev_dist < 1e-3);
}

#[test]
fn camera_follows_scroll_position() {
    let vp = desktop();
    let mut r = ScrollRotator::new(vp);
    r.on_scroll(500.0, vp);
    assert!((r.camera_y() + 2.0).abs() < 1e-6);
    assert_eq!(r.camera_eye().z, 6.0);
}

#[test]
fn compact_layout_centres_and_shrinks_objects() {
    let mut r = ScrollRotator::new(desktop());
    r.on_resize(Viewport::new(390.0, 844.0));
    for o in r.objects() {
        assert_eq!(o.transform.position.x, 0.0);
        assert_eq!(o.transform.scale, Vec3::splat(0.7));
    }
    r.on_resize(desktop());
    let xs: Vec<f32> = r.objects().iter().map(|o| o.transform.position.x).collect();
    assert_eq!(xs, vec![-2.0, 2.0, -2.0]);
    assert!(r.objects().iter().all(|o| o.transform.scale == Vec3::ONE));
}

#[test]
fn rapid_scrolling_layers_kicks() {
    let vp = desktop();
    let mut r = ScrollRotator::new(vp);
    r.on_scroll(1200.0, vp);
    r.tick(DT, PointerState::default());
    r.on_scroll(0.0, vp);
    r.tick(DT, PointerState::default());
    r.on_scroll(1200.0, vp);
    assert_eq!(r.objects()[1].active_tweens(), 2);
    run(&mut r, 3.0);
    assert_eq!(r.objects()[1].active_tweens(), 0);
    let extra = rotations(&r)[1].y - base_spin(1, 3.0 + 2.0 * DT).y;
    assert!((extra - 12.0).abs() < 1e-3, "extra={extra}");
}
