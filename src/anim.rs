/// Easing curves and timeline helpers for the staged reveals.
///
/// Every animation in the app is a pure function of elapsed time: views
/// read the tick clock, feed it through these helpers, and get back a
/// 0..=1 progress value (or slightly above 1.0 for the overshoot pop).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    OutCubic,
    InOutCubic,
    /// Overshoots past 1.0 before settling, for pop-in badges
    OutBack,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Linear 0..=1 progress of a window starting `delay` seconds in
pub fn progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

/// Eased opacity for fade-in reveals
pub fn fade_in(elapsed: f32, delay: f32, duration: f32) -> f32 {
    Ease::OutCubic.apply(progress(elapsed, delay, duration))
}

/// Springy scale for pop-in elements (may exceed 1.0 mid-flight)
pub fn pop(elapsed: f32, delay: f32, duration: f32) -> f32 {
    Ease::OutBack.apply(progress(elapsed, delay, duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_stable() {
        for ease in [Ease::OutCubic, Ease::InOutCubic, Ease::OutBack] {
            assert!((ease.apply(0.0) - 0.0).abs() < 1e-5);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_monotonic_spot_check() {
        for ease in [Ease::OutCubic, Ease::InOutCubic] {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (0..100)
            .map(|i| Ease::OutBack.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_progress_window() {
        assert_eq!(progress(0.0, 1.0, 2.0), 0.0);
        assert_eq!(progress(2.0, 1.0, 2.0), 0.5);
        assert_eq!(progress(9.0, 1.0, 2.0), 1.0);
        // Zero-length windows snap instead of dividing by zero
        assert_eq!(progress(0.9, 1.0, 0.0), 0.0);
        assert_eq!(progress(1.1, 1.0, 0.0), 1.0);
    }
}
