//! Fixed-duration one-shot animations with bezier easing.

/// Easing curves. Bezier control points follow the CSS definitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Apply the easing to a linear fraction. Endpoints are exact.
    pub fn transform(self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        match self.control_points() {
            None => fraction,
            Some((x1, y1, x2, y2)) => match bezier_easing::bezier_easing(x1, y1, x2, y2) {
                Ok(ease) => ease(fraction),
                Err(_) => {
                    log::warn!(
                        "[TWEEN] Invalid bezier ({}, {}, {}, {}), using linear",
                        x1,
                        y1,
                        x2,
                        y2
                    );
                    fraction
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        let t = self.easing.transform(self.progress());
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    pub fn advance(&mut self, dt_ms: f32) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let eased = Easing::EaseOut.transform(0.3);
        assert!(eased > 0.3);
        assert!(eased < 1.0);
    }

    #[test]
    fn test_tween_runs_to_completion() {
        let mut tween = Tween::new(0.6, 1.6, 350.0, Easing::EaseOut);
        assert_eq!(tween.value(), 0.6);

        let mid = tween.advance(175.0);
        assert!(mid > 0.6 && mid < 1.6);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(1000.0), 1.6);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let tween = Tween::new(1.0, 0.0, 0.0, Easing::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }
}
