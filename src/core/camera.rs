//! Perspective camera and screen-space ray construction.

use crate::core::config::CameraConfig;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(cfg: &CameraConfig, aspect: f32) -> Self {
        let dir = Vec3::from(cfg.start_dir).try_normalize().unwrap_or(Vec3::Z);
        Self {
            eye: dir * cfg.distance,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_degrees: cfg.fov_deg,
            znear: cfg.near,
            zfar: cfg.far,
        }
    }

    /// Clip-space projection; `perspective_rh` maps depth to [0, 1] as wgpu expects.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Set the aspect ratio to exactly `width / height`. Zero sizes are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Camera right and up vectors in world space, used to face point sprites.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (x right-positive, y up-positive, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            direction: (p1 - self.eye).normalize(),
        }
    }
}
