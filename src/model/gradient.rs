/// Phase of the animated hero background: two radial gradients whose centers
/// orbit slowly around fixed anchor points.
pub struct GradientPhase {
    pub angle: f32,
}

/// Phase increment per frame.
const STEP: f32 = 0.2;

impl GradientPhase {
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    pub fn advance(&mut self) {
        self.angle += STEP;
    }

    /// Background value for the current phase.
    pub fn to_css(&self) -> String {
        let x1 = 30.0 + (self.angle * 0.01).sin() * 10.0;
        let y1 = 50.0 + (self.angle * 0.01).cos() * 10.0;
        let x2 = 70.0 + (self.angle * 0.015).sin() * 10.0;
        let y2 = 50.0 + (self.angle * 0.015).cos() * 10.0;

        format!(
            "radial-gradient(circle at {x1}% {y1}%, rgba(102, 126, 234, 0.15) 0%, transparent 50%), \
             radial-gradient(circle at {x2}% {y2}%, rgba(118, 75, 162, 0.15) 0%, transparent 50%)"
        )
    }
}

impl Default for GradientPhase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_phase() {
        let mut phase = GradientPhase::new();
        for _ in 0..5 {
            phase.advance();
        }
        assert!((phase.angle - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_initial_css_centers_at_anchor_offsets() {
        // angle 0: sin = 0, cos = 1, so centers sit at (30, 60) and (70, 60)
        let css = GradientPhase::new().to_css();
        assert!(css.contains("circle at 30% 60%"), "{css}");
        assert!(css.contains("circle at 70% 60%"), "{css}");
        assert!(css.contains("rgba(102, 126, 234, 0.15)"));
        assert!(css.contains("rgba(118, 75, 162, 0.15)"));
    }

    #[test]
    fn test_centers_stay_within_orbit_radius() {
        let mut phase = GradientPhase::new();
        for _ in 0..10_000 {
            phase.advance();
            let x1 = 30.0 + (phase.angle * 0.01).sin() * 10.0;
            assert!((20.0..=40.0).contains(&x1));
        }
    }
}
