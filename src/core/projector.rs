//! Screen-to-world projection of the pointer onto the horizontal pick plane.

use crate::core::camera::{Camera, Ray};
use glam::{Vec2, Vec3};

/// Bounding rectangle of the hosting container in client (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Map client coordinates to NDC relative to `rect`; screen y is flipped so
/// up is positive. `None` when the rect has no area.
#[inline]
pub fn pointer_to_ndc(client: Vec2, rect: &ContainerRect) -> Option<Vec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let x = ((client.x - rect.left) / rect.width) * 2.0 - 1.0;
    let y = -((client.y - rect.top) / rect.height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

/// Intersect `ray` with the plane `y = height`.
///
/// Returns `None` for a ray parallel to the plane or one pointing away from it.
#[inline]
pub fn intersect_horizontal_plane(ray: &Ray, height: f32) -> Option<Vec3> {
    if ray.direction.y.abs() < 1e-6 {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    (t >= 0.0).then(|| ray.at(t))
}

#[derive(Clone, Copy, Debug)]
pub struct PointerProjector {
    pub plane_height: f32,
}

impl PointerProjector {
    pub fn new(plane_height: f32) -> Self {
        Self { plane_height }
    }

    /// World point under the pointer, or `None` when nothing sensible can be
    /// computed; callers then keep their previous target.
    pub fn project(&self, camera: &Camera, client: Vec2, rect: &ContainerRect) -> Option<Vec3> {
        let ndc = pointer_to_ndc(client, rect)?;
        let ray = camera.ray_from_ndc(ndc);
        intersect_horizontal_plane(&ray, self.plane_height)
    }
}
