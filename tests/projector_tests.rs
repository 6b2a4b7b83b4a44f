// Host-side tests for pointer projection and the camera it relies on.

mod common;

use common::assert_vec3_near;
use glam::{Vec2, Vec3};
use hero_field::core::config::CameraConfig;
use hero_field::core::{
    intersect_horizontal_plane, pointer_to_ndc, Camera, ContainerRect, PointerProjector, Ray,
};

fn default_camera(aspect: f32) -> Camera {
    Camera::from_config(&CameraConfig::default(), aspect)
}

#[test]
fn pointer_to_ndc_maps_corners_and_flips_y() {
    let rect = ContainerRect::new(100.0, 50.0, 800.0, 400.0);
    let tl = pointer_to_ndc(Vec2::new(100.0, 50.0), &rect).unwrap();
    let br = pointer_to_ndc(Vec2::new(900.0, 450.0), &rect).unwrap();
    let c = pointer_to_ndc(rect.center(), &rect).unwrap();
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    assert_eq!(br, Vec2::new(1.0, -1.0));
    assert_eq!(c, Vec2::ZERO);
}

#[test]
fn pointer_to_ndc_rejects_empty_rect() {
    let rect = ContainerRect::new(0.0, 0.0, 0.0, 300.0);
    assert!(pointer_to_ndc(Vec2::new(10.0, 10.0), &rect).is_none());
}

#[test]
fn plane_intersection_hits_expected_point() {
    let ray = Ray {
        origin: Vec3::new(0.0, 10.0, 0.0),
        direction: Vec3::new(0.0, -1.0, 1.0).normalize(),
    };
    let hit = intersect_horizontal_plane(&ray, 2.0).expect("hit");
    assert_vec3_near(hit, Vec3::new(0.0, 2.0, 8.0), 1e-4);
}

#[test]
fn plane_intersection_rejects_parallel_and_backward_rays() {
    let parallel = Ray {
        origin: Vec3::new(0.0, 5.0, 0.0),
        direction: Vec3::X,
    };
    assert!(intersect_horizontal_plane(&parallel, 0.0).is_none());

    let upward = Ray {
        origin: Vec3::new(0.0, 5.0, 0.0),
        direction: Vec3::Y,
    };
    assert!(intersect_horizontal_plane(&upward, 0.0).is_none());
}

#[test]
fn default_camera_sits_at_distance_looking_at_origin() {
    let cam = default_camera(16.0 / 9.0);
    assert!((cam.eye.length() - 25.0).abs() < 1e-4);
    assert_eq!(cam.target, Vec3::ZERO);
    let dir = cam.eye.normalize();
    assert_vec3_near(dir, Vec3::new(25.0, 10.0, 15.0).normalize(), 1e-6);
}

#[test]
fn set_aspect_is_exact_and_ignores_zero() {
    let mut cam = default_camera(1.0);
    cam.set_aspect(1920, 1080);
    assert_eq!(cam.aspect, 1920.0 / 1080.0);
    cam.set_aspect(0, 500);
    assert_eq!(cam.aspect, 1920.0 / 1080.0);
}

#[test]
fn center_ray_points_at_target() {
    let cam = default_camera(4.0 / 3.0);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert_vec3_near(ray.origin, cam.eye, 1e-6);
    assert_vec3_near(ray.direction, (cam.target - cam.eye).normalize(), 1e-4);
}

#[test]
fn center_pointer_projects_onto_origin() {
    let cam = default_camera(2.0);
    let rect = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
    let hit = PointerProjector::new(0.0)
        .project(&cam, rect.center(), &rect)
        .expect("camera looks down at the plane");
    assert_vec3_near(hit, Vec3::ZERO, 1e-2);
}

#[test]
fn offset_pointer_lands_on_the_plane_to_the_correct_side() {
    let cam = default_camera(2.0);
    let rect = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
    let (right, _) = cam.billboard_axes();
    let hit = PointerProjector::new(0.0)
        .project(&cam, Vec2::new(700.0, 250.0), &rect)
        .expect("hit");
    assert!(hit.y.abs() < 1e-3);
    assert!(hit.dot(right) > 0.0);
}

#[test]
fn horizontal_camera_center_ray_has_no_hit() {
    let cfg = CameraConfig {
        start_dir: [0.0, 0.0, 1.0],
        ..CameraConfig::default()
    };
    let cam = Camera::from_config(&cfg, 1.0);
    let rect = ContainerRect::new(0.0, 0.0, 400.0, 400.0);
    assert!(PointerProjector::new(0.0)
        .project(&cam, rect.center(), &rect)
        .is_none());
    // Above the horizon the ray climbs away from the plane.
    assert!(PointerProjector::new(0.0)
        .project(&cam, Vec2::new(200.0, 10.0), &rect)
        .is_none());
}
