//! Constant-rate rotation for the decorative 3D mark and project previews.

use std::f32::consts::TAU;
use std::time::Duration;

/// Angular rate of the brand mark, in radians per second, on each axis.
pub const MARK_RATE: f32 = 0.5;
/// Angular rate of the project preview shapes about the vertical axis.
pub const PREVIEW_RATE: f32 = 0.3;

/// Current orientation plus per-axis angular rates (radians, radians/second).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
    rate_x: f32,
    rate_y: f32,
}

impl Spin {
    pub fn new(rate_x: f32, rate_y: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rate_x,
            rate_y,
        }
    }

    /// Tumbling cube used as the brand mark.
    pub fn mark() -> Self {
        Self::new(MARK_RATE, MARK_RATE)
    }

    /// Vertical-axis turn used by project previews.
    pub fn turntable() -> Self {
        Self::new(0.0, PREVIEW_RATE)
    }

    /// Rotate proportionally to elapsed real time. Angles stay within one turn.
    pub fn advance(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.x = (self.x + self.rate_x * secs).rem_euclid(TAU);
        self.y = (self.y + self.rate_y * secs).rem_euclid(TAU);
    }

    pub fn css_transform(&self) -> String {
        format!("rotateX({:.4}rad) rotateY({:.4}rad)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_rotates_both_axes_at_fixed_rate() {
        let mut spin = Spin::mark();
        spin.advance(Duration::from_secs(2));
        assert!((spin.x - 1.0).abs() < 1e-5);
        assert!((spin.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_is_proportional_to_elapsed_time() {
        let mut stepped = Spin::mark();
        for _ in 0..100 {
            stepped.advance(Duration::from_millis(10));
        }
        let mut once = Spin::mark();
        once.advance(Duration::from_secs(1));
        assert!((stepped.x - once.x).abs() < 1e-4);
    }

    #[test]
    fn turntable_only_turns_vertical_axis() {
        let mut spin = Spin::turntable();
        spin.advance(Duration::from_secs(1));
        assert_eq!(spin.x, 0.0);
        assert!((spin.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn angles_wrap_within_one_turn() {
        let mut spin = Spin::mark();
        spin.advance(Duration::from_secs(60));
        assert!(spin.x >= 0.0 && spin.x < TAU);
    }

    #[test]
    fn css_transform_format() {
        assert_eq!(
            Spin::default().css_transform(),
            "rotateX(0.0000rad) rotateY(0.0000rad)"
        );
    }
}
