// Host-side tests for the deformable ground grid and the point cloud.

use glam::Vec3;
use hero_field::core::{icosphere_points, ConeParams, DeformableSurface, PointCloud};

fn params() -> ConeParams {
    ConeParams::new(3.0, -3.0, 5.0, 15.0)
}

#[test]
fn reference_grid_has_expected_topology() {
    let s = DeformableSurface::new(100.0, 100);
    assert_eq!(s.vertex_count(), 101 * 101);
    assert_eq!(s.indices().len(), 100 * 100 * 6);
    assert!(s.indices().iter().all(|&i| (i as usize) < s.vertex_count()));
    let first = s.positions()[0];
    let last = s.positions()[s.vertex_count() - 1];
    assert_eq!(first, [-50.0, 0.0, -50.0]);
    assert_eq!(last, [50.0, 0.0, 50.0]);
}

#[test]
fn deform_rewrites_only_heights() {
    let mut s = DeformableSurface::new(20.0, 20);
    let before: Vec<[f32; 3]> = s.positions().to_vec();
    s.deform(Vec3::new(2.0, 7.0, -3.0), &params());
    assert_eq!(s.vertex_count(), before.len());
    for (a, b) in before.iter().zip(s.positions()) {
        assert_eq!(a[0], b[0]);
        assert_eq!(a[2], b[2]);
    }
}

#[test]
fn heights_follow_the_anchor_xz_only() {
    let p = params();
    let mut s = DeformableSurface::new(100.0, 100);
    s.deform(Vec3::new(0.0, 42.0, 0.0), &p);
    // Vertex (0, 0) sits in row 50, column 50.
    let center = 50 * 101 + 50;
    assert_eq!(s.positions()[center][0], 0.0);
    assert_eq!(s.positions()[center][2], 0.0);
    assert!((s.positions()[center][1] + 5.0).abs() < 1e-5);
    // Corners are outside the bump and rest on the base height.
    assert!((s.positions()[0][1] - 3.0).abs() < 1e-5);

    s.deform(Vec3::new(10.0, -8.0, 10.0), &p);
    for (pos, h) in s.positions().iter().zip(s.heights()) {
        let expected = p.height_at(pos[0] - 10.0, pos[2] - 10.0);
        assert!((h - expected).abs() < 1e-6);
    }
}

#[test]
fn dirty_flag_is_consumed_once_per_deform() {
    let mut s = DeformableSurface::new(10.0, 4);
    assert!(s.take_dirty());
    assert!(!s.take_dirty());
    s.deform(Vec3::ZERO, &params());
    assert!(s.take_dirty());
    assert!(!s.take_dirty());
}

#[test]
fn icosphere_point_count_matches_subdivision() {
    assert_eq!(icosphere_points(1.0, 0).len(), 12);
    assert_eq!(icosphere_points(1.0, 1).len(), 42);
    assert_eq!(icosphere_points(5.0, 12).len(), 10 * 13 * 13 + 2);
}

#[test]
fn icosphere_points_lie_on_the_sphere_without_duplicates() {
    let pts = icosphere_points(5.0, 3);
    for p in &pts {
        assert!((Vec3::from(*p).length() - 5.0).abs() < 1e-4);
    }
    for (i, a) in pts.iter().enumerate() {
        for b in &pts[i + 1..] {
            assert!(Vec3::from(*a).distance(Vec3::from(*b)) > 1e-2);
        }
    }
}

#[test]
fn point_cloud_moves_rigidly() {
    let mut cloud = PointCloud::icosphere(5.0, 2, Vec3::ZERO);
    let pts = cloud.points().to_vec();
    cloud.set_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(cloud.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(cloud.points(), &pts[..]);
}
