//! Scroll-derived style values: hero parallax, nav backdrop, anchor targets
//! and reveal stagger delays.

/// Height of the fixed navigation bar, subtracted from anchor scroll targets.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Fraction of the scroll distance the hero image travels.
pub const PARALLAX_SPEED: f64 = 0.5;

/// Scroll depth past which the nav backdrop darkens.
pub const NAV_DARKEN_AT_PX: f64 = 100.0;

/// Hero image transform for the given scroll position. The -50% keeps the
/// image vertically centered in its container.
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY(calc(-50% + {}px))", scroll_y * PARALLAX_SPEED)
}

/// Nav backdrop for the given scroll position.
pub fn nav_background(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_DARKEN_AT_PX {
        "rgba(0, 0, 0, 0.95)"
    } else {
        "rgba(0, 0, 0, 0.8)"
    }
}

/// Scroll target for an in-page anchor, allowing for the fixed nav.
pub fn anchor_target_top(offset_top: f64) -> f64 {
    offset_top - NAV_OFFSET_PX
}

/// Transition delay for the element at `index` within a revealed group.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_scales_scroll_by_half() {
        assert_eq!(parallax_transform(0.0), "translateY(calc(-50% + 0px))");
        assert_eq!(parallax_transform(240.0), "translateY(calc(-50% + 120px))");
    }

    #[test]
    fn test_nav_darkens_past_threshold() {
        assert_eq!(nav_background(0.0), "rgba(0, 0, 0, 0.8)");
        assert_eq!(nav_background(100.0), "rgba(0, 0, 0, 0.8)");
        assert_eq!(nav_background(100.5), "rgba(0, 0, 0, 0.95)");
    }

    #[test]
    fn test_anchor_target_allows_for_nav() {
        assert_eq!(anchor_target_top(500.0), 420.0);
    }

    #[test]
    fn test_stagger_delays_step_per_index() {
        assert_eq!(stagger_delay(0, 0.1), "0s");
        assert_eq!(stagger_delay(1, 0.1), "0.1s");
        assert_eq!(stagger_delay(2, 0.15), "0.3s");
    }
}
