use envblend_core::math::wrap_degrees;

/// Continuous skybox spin, independent of any blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyboxRotation {
    /// Current angle in degrees, always in [0, 360).
    angle: f32,
    /// Degrees per second.
    speed: f32,
}

impl SkyboxRotation {
    pub fn new(angle: f32, speed: f32) -> Self {
        Self {
            angle: wrap_degrees(angle),
            speed,
        }
    }

    /// Advance by `speed * delta_time` and return the wrapped angle.
    pub fn advance(&mut self, delta_time: f32) -> f32 {
        let next = self.angle + self.speed * delta_time;
        if next.is_finite() {
            self.angle = wrap_degrees(next);
        }
        self.angle
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_large_step_wraps() {
        let mut rotation = SkyboxRotation::new(0.0, 10.0);
        assert_eq!(rotation.advance(40.0), 40.0);
    }

    #[test]
    fn test_wraps_past_full_turn() {
        let mut rotation = SkyboxRotation::new(355.0, 1.0);
        let angle = rotation.advance(10.0);
        assert!((angle - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_accumulates_small_steps() {
        let mut rotation = SkyboxRotation::new(0.0, 3.0);
        for _ in 0..10 {
            rotation.advance(0.5);
        }
        assert!((rotation.angle() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_initial_angle_wrapped() {
        assert_eq!(SkyboxRotation::new(720.0, 0.0).angle(), 0.0);
    }

    #[test]
    fn test_non_finite_step_ignored() {
        let mut rotation = SkyboxRotation::new(90.0, 5.0);
        rotation.advance(f32::INFINITY);
        assert_eq!(rotation.angle(), 90.0);
    }
}
