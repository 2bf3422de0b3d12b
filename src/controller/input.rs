/// Platform-agnostic input events and key-sequence tracking
use std::collections::VecDeque;

/// Platform-independent pointer events. Mouse and touch listeners both
/// reduce to these three shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Down { x: f32, y: f32 },
    Up,
}

/// The classic cheat sequence, by `KeyboardEvent.key` name.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent key presses. `push` reports whether
/// the window now spells the Konami sequence.
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self {
            recent: VecDeque::with_capacity(KONAMI_SEQUENCE.len()),
        }
    }

    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key.to_string());

        self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE).all(|(k, s)| k == s)
    }
}

impl Default for KonamiTracker {
    fn default() -> Self {
        Self::new()
    }
}

pub mod wasm {
    use super::PointerEvent;
    use web_sys::{MouseEvent, TouchEvent};

    pub fn mouse_move_to_pointer(e: &MouseEvent) -> PointerEvent {
        PointerEvent::Move {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        }
    }

    pub fn mouse_down_to_pointer(e: &MouseEvent) -> PointerEvent {
        PointerEvent::Down {
            x: e.client_x() as f32,
            y: e.client_y() as f32,
        }
    }

    /// First contact point of a touch event, if any finger is down.
    pub fn touch_to_pointer(e: &TouchEvent, down: bool) -> Option<PointerEvent> {
        let touch = e.touches().get(0)?;
        let x = touch.client_x() as f32;
        let y = touch.client_y() as f32;
        Some(if down {
            PointerEvent::Down { x, y }
        } else {
            PointerEvent::Move { x, y }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut KonamiTracker, keys: &[&str]) -> bool {
        let mut hit = false;
        for key in keys {
            hit = tracker.push(key);
        }
        hit
    }

    #[test]
    fn test_konami_sequence_recognized() {
        let mut tracker = KonamiTracker::new();
        assert!(feed(&mut tracker, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_konami_recognized_after_noise_prefix() {
        let mut tracker = KonamiTracker::new();
        feed(&mut tracker, &["x", "Enter", "ArrowUp", "q"]);
        assert!(feed(&mut tracker, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_wrong_order_not_recognized() {
        let mut tracker = KonamiTracker::new();
        let mut keys = KONAMI_SEQUENCE;
        keys.swap(8, 9); // "a" before "b"
        assert!(!feed(&mut tracker, &keys));
    }

    #[test]
    fn test_partial_sequence_not_recognized() {
        let mut tracker = KonamiTracker::new();
        assert!(!feed(&mut tracker, &KONAMI_SEQUENCE[..9]));
    }

    #[test]
    fn test_window_keeps_only_last_ten() {
        let mut tracker = KonamiTracker::new();
        feed(&mut tracker, &["z"; 40]);
        assert_eq!(tracker.recent.len(), KONAMI_SEQUENCE.len());
    }
}
