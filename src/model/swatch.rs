/// Product finishes offered by the color selector. Each doubles as the CSS
/// class toggled on the showcased device.
pub const FINISHES: [&str; 4] = ["midnight", "gold", "silver", "black"];

/// Selection state of the color-swatch row. At most one finish is active.
pub struct SwatchPalette {
    active: Option<&'static str>,
}

impl SwatchPalette {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Activate a finish by its `data-color` value. Unknown values leave the
    /// selection untouched and return false so the caller can skip the swap.
    pub fn select(&mut self, color: &str) -> bool {
        match FINISHES.iter().copied().find(|f| *f == color) {
            Some(finish) => {
                self.active = Some(finish);
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }
}

impl Default for SwatchPalette {
    fn default() -> Self {
        Self::new()
    }
}
