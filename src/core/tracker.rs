use glam::Vec3;

/// The moving anchor both the point cloud and the ground bump follow.
///
/// `target` is written by input handlers; `current` only moves in `step`,
/// which the render loop calls once per tick.
#[derive(Clone, Copy, Debug)]
pub struct InfluencePoint {
    current: Vec3,
    target: Vec3,
    resting: Vec3,
}

impl InfluencePoint {
    pub fn new(resting: Vec3) -> Self {
        Self {
            current: resting,
            target: resting,
            resting,
        }
    }

    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn resting(&self) -> Vec3 {
        self.resting
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn reset_to_rest(&mut self) {
        self.target = self.resting;
    }

    /// Exponential smoothing: `current += alpha * (target - current)`.
    #[inline]
    pub fn step(&mut self, alpha: f32) -> Vec3 {
        self.current = self.current.lerp(self.target, alpha);
        self.current
    }
}
