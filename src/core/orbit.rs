//! Damped orbital camera controller.
//!
//! Drag input accumulates angular deltas; each `update` applies a
//! `damping` fraction of them and decays the rest, so motion glides out
//! over several frames after the pointer is released.

use crate::constants::ORBIT_POLAR_EPS;
use crate::core::camera::Camera;
use crate::core::config::OrbitConfig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const ZOOM_STEP: f32 = 0.95;

#[derive(Clone, Debug)]
pub struct OrbitController {
    focus: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
    dragging: bool,
    cfg: OrbitConfig,
}

impl OrbitController {
    /// Start from the camera's current eye/target.
    pub fn new(camera: &Camera, cfg: OrbitConfig) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI * 0.5)
        };
        Self {
            focus: camera.target,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
            dragging: false,
            cfg,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cfg.enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = self.cfg.enabled;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Queue a rotation for a pointer drag of `(dx, dy)` CSS pixels.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.cfg.enabled || viewport_height <= 0.0 {
            return;
        }
        let k = TAU * self.cfg.rotate_speed / viewport_height;
        self.delta_theta -= dx * k;
        self.delta_phi -= dy * k;
    }

    /// Queue a zoom step; negative wheel deltas move the camera closer.
    pub fn zoom_by(&mut self, wheel_delta: f32) {
        if !self.cfg.enabled || wheel_delta == 0.0 {
            return;
        }
        let step = ZOOM_STEP.powf(self.cfg.zoom_speed);
        if wheel_delta < 0.0 {
            self.zoom_scale *= step;
        } else {
            self.zoom_scale /= step;
        }
    }

    /// Advance one tick and write the resulting eye/target into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        let damping = self.cfg.damping;
        self.theta += self.delta_theta * damping;
        self.phi += self.delta_phi * damping;
        self.phi = self.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        self.radius = (self.radius * self.zoom_scale)
            .clamp(self.cfg.min_distance, self.cfg.max_distance);

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.zoom_scale = 1.0;

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.eye = self.focus + offset;
        camera.target = self.focus;
    }
}
