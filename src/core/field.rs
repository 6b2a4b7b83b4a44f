//! Analytic height fields used to bend the ground under the influence point.

/// Sphere-cone height at horizontal distance `d` from the centre.
///
/// Inside `lim_r = sqrt(r² - h²)` this is a spherical cap of radius `r`
/// (signed by `h`); outside it continues as a straight cone skirt that
/// meets the cap at height `h`. Callers guarantee `r > |h|` and `h != 0`;
/// `SceneConfig::validate` enforces that once, up front.
#[inline]
pub fn cone_field(d: f32, h: f32, r: f32) -> f32 {
    let lim_r = (r * r - h * h).sqrt();
    cone_field_with_limit(d, h, r, lim_r)
}

#[inline]
fn cone_field_with_limit(d: f32, h: f32, r: f32, lim_r: f32) -> f32 {
    if d <= lim_r {
        (r * r - d * d).sqrt() * h.signum()
    } else {
        h - (d - lim_r) * (lim_r / h)
    }
}

/// Polynomial smooth blend between a flat base `a` and a field value `b`.
///
/// Collapses to `b` when `b` sits well below `a`, to `a` when it sits well
/// above, and bends through a quadratic correction inside a window of width
/// `k` around the crossover.
#[inline]
pub fn smooth_blend(a: f32, b: f32, k: f32) -> f32 {
    let t = ((b - a) / k + 0.5).clamp(0.0, 1.0);
    let m = t * (1.0 - t) * k;
    t * a + (1.0 - t) * b - m * 0.5
}

/// Parameters of the ground deformation, with `lim_r` cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeParams {
    pub base_height: f32,
    pub cone_height: f32,
    pub radius: f32,
    pub smoothness: f32,
    lim_r: f32,
}

impl ConeParams {
    pub fn new(base_height: f32, cone_height: f32, radius: f32, smoothness: f32) -> Self {
        Self {
            base_height,
            cone_height,
            radius,
            smoothness,
            lim_r: (radius * radius - cone_height * cone_height).sqrt(),
        }
    }

    /// Radius where the cap hands over to the cone skirt.
    #[inline]
    pub fn lim_r(&self) -> f32 {
        self.lim_r
    }

    /// Blended ground height at horizontal offset `(dx, dz)` from the centre.
    #[inline]
    pub fn height_at(&self, dx: f32, dz: f32) -> f32 {
        let d = dx.hypot(dz);
        let b = cone_field_with_limit(d, self.cone_height, self.radius, self.lim_r);
        smooth_blend(self.base_height, b, self.smoothness)
    }
}
