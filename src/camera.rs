use glam::{Mat4, Vec3};

/// Camera circling the scene centre at a fixed distance and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub distance: f32,
    pub height: f32,
    pub angle: f32,
    pub orbit_speed: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    pub fn new(distance: f32, height: f32, orbit_speed: f32) -> Self {
        Self {
            distance,
            height,
            angle: 0.0,
            orbit_speed,
            target: Vec3::ZERO,
        }
    }

    /// Advance the orbit; the angle stays within [0, TAU).
    pub fn advance(&mut self, dt_sec: f32) {
        self.angle = (self.angle + self.orbit_speed * dt_sec.max(0.0)).rem_euclid(std::f32::consts::TAU);
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.target
            + Vec3::new(
                self.distance * self.angle.sin(),
                self.height,
                self.distance * self.angle.cos(),
            )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect.max(1e-3), 0.1, 200.0);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        proj * view
    }
}
