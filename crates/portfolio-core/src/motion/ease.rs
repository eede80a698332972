//! Easing curves used by the site's timelines.

/// Easing curve mapping linear progress `0..=1` onto eased progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out
    Power1InOut,
    /// Cubic ease-out
    #[default]
    Power2Out,
    /// Quartic ease-out
    Power3Out,
    /// Ease-out with three diminishing bounces
    BounceOut,
}

impl Ease {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}
