// Host-side tests for influence point smoothing.

use glam::Vec3;
use hero_field::core::InfluencePoint;

#[test]
fn starts_at_rest() {
    let rest = Vec3::new(0.0, 1.5, -15.0);
    let p = InfluencePoint::new(rest);
    assert_eq!(p.current(), rest);
    assert_eq!(p.target(), rest);
}

#[test]
fn convergence_is_geometric() {
    let mut p = InfluencePoint::new(Vec3::ZERO);
    let target = Vec3::new(10.0, 0.0, -5.0);
    p.set_target(target);
    let d0 = (target - p.current()).length();
    for n in 1..=60 {
        p.step(0.1);
        let expected = d0 * 0.9f32.powi(n);
        let got = (target - p.current()).length();
        assert!(
            (got - expected).abs() <= 1e-4 * d0,
            "tick {}: {} vs {}",
            n,
            got,
            expected
        );
    }
}

#[test]
fn never_overshoots() {
    let mut p = InfluencePoint::new(Vec3::ZERO);
    p.set_target(Vec3::new(3.0, 0.0, 0.0));
    let mut last = 0.0;
    for _ in 0..200 {
        let x = p.step(0.1).x;
        assert!(x >= last && x <= 3.0);
        last = x;
    }
}

#[test]
fn reset_targets_rest_without_moving_current() {
    let rest = Vec3::new(0.0, 1.5, -15.0);
    let mut p = InfluencePoint::new(rest);
    p.set_target(Vec3::new(4.0, 0.0, 4.0));
    p.step(0.1);
    let before = p.current();
    p.reset_to_rest();
    assert_eq!(p.target(), rest);
    assert_eq!(p.current(), before);
}
