use glam::Vec2;
use tracing::debug;

use crate::controller::input::PointerEvent;
use crate::model::{OrientationState, Transform};

/// Converts pointer/touch input into the showcase rotation.
///
/// Two interaction modes: passive ambient tilt (pointer proximity to the
/// viewport center, no button held) and active drag rotation
/// (press-move-release). Ambient tracking is suspended while dragging.
pub struct OrientationController {
    /// Full ambient tilt range across the viewport, degrees.
    pub hover_tilt: f32,
    /// Degrees of rotation per pixel of drag movement.
    pub drag_sensitivity: f32,
    /// Drag rotation is clamped to +/- this angle on each axis.
    pub drag_limit: f32,
    /// Fraction of the remaining distance to the hover target closed per frame.
    pub damping: f32,
}

impl OrientationController {
    pub fn new() -> Self {
        Self {
            hover_tilt: 15.0,
            drag_sensitivity: 0.5,
            drag_limit: 45.0,
            damping: 0.1,
        }
    }

    /// Retarget the ambient tilt from the pointer position. No-op while a
    /// drag is active or when the viewport has no usable extent.
    pub fn on_pointer_move(&self, state: &mut OrientationState, x: f32, y: f32, viewport: Vec2) {
        if state.dragging || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        state.hover.x = (x / viewport.x - 0.5) * self.hover_tilt;
        state.hover.y = (y / viewport.y - 0.5) * self.hover_tilt;
    }

    /// Enter drag mode. Ignored if a drag is already active, so a stray
    /// second press cannot reset the delta origin mid-gesture.
    pub fn on_drag_start(&self, state: &mut OrientationState, x: f32, y: f32) {
        if state.dragging {
            return;
        }
        state.dragging = true;
        state.last_pointer = Vec2::new(x, y);
    }

    /// Accumulate rotation from the pointer delta since the last drag event.
    pub fn on_drag_move(&self, state: &mut OrientationState, x: f32, y: f32) {
        if !state.dragging {
            return;
        }
        let pointer = Vec2::new(x, y);
        let delta = pointer - state.last_pointer;

        state.drag.y =
            (state.drag.y + delta.x * self.drag_sensitivity).clamp(-self.drag_limit, self.drag_limit);
        state.drag.x =
            (state.drag.x - delta.y * self.drag_sensitivity).clamp(-self.drag_limit, self.drag_limit);

        state.last_pointer = pointer;
    }

    /// Leave drag mode. The accumulated rotation persists as the baseline
    /// for subsequent ambient blending.
    pub fn on_drag_end(&self, state: &mut OrientationState) {
        state.dragging = false;
    }

    /// Advance one frame and return the transform to render. Easing only
    /// runs outside of a drag; while dragging the transform tracks the drag
    /// angles directly.
    pub fn step(&self, state: &mut OrientationState) -> Transform {
        if !state.dragging {
            state.current += (state.hover - state.current) * self.damping;
        }
        state.transform()
    }
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller plus state, bound to one showcase surface.
///
/// When the surface is missing at attach the rig comes up disabled: every
/// operation is a no-op and `step` yields nothing, so the caller registers
/// no listeners and starts no frame loop for it.
pub struct OrientationRig {
    inner: Option<(OrientationState, OrientationController)>,
}

impl OrientationRig {
    pub fn attach(target_present: bool) -> Self {
        if !target_present {
            debug!("showcase surface missing, rotation effect disabled");
            return Self { inner: None };
        }
        Self {
            inner: Some((OrientationState::new(), OrientationController::new())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Route a pointer event. Moves feed the drag while one is active and
    /// the ambient tilt otherwise; each operation guards its own mode.
    pub fn process_event(&mut self, event: PointerEvent, viewport: Vec2) {
        let Some((state, controller)) = self.inner.as_mut() else {
            return;
        };
        match event {
            PointerEvent::Move { x, y } => {
                controller.on_drag_move(state, x, y);
                controller.on_pointer_move(state, x, y, viewport);
            }
            PointerEvent::Down { x, y } => controller.on_drag_start(state, x, y),
            PointerEvent::Up => controller.on_drag_end(state),
        }
    }

    /// Advance one frame; `None` when the rig is disabled.
    pub fn step(&mut self) -> Option<Transform> {
        self.inner
            .as_mut()
            .map(|(state, controller)| controller.step(state))
    }

    pub fn cursor(&self) -> &'static str {
        self.inner
            .as_ref()
            .map(|(state, _)| state.cursor())
            .unwrap_or("grab")
    }

    pub fn state(&self) -> Option<&OrientationState> {
        self.inner.as_ref().map(|(state, _)| state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::orientation::{DRAG_SCALE, HOVER_SCALE};

    const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

    fn rig() -> OrientationRig {
        OrientationRig::attach(true)
    }

    #[test]
    fn test_hover_target_from_viewport_position() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        // Bottom-right corner maps to the positive extreme of +/-7.5 per axis
        controller.on_pointer_move(&mut state, 1000.0, 800.0, VIEWPORT);
        assert_eq!(state.hover.x, 7.5);
        assert_eq!(state.hover.y, 7.5);

        // Viewport center is neutral
        controller.on_pointer_move(&mut state, 500.0, 400.0, VIEWPORT);
        assert_eq!(state.hover, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_move_suspended_while_dragging() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_pointer_move(&mut state, 1000.0, 800.0, VIEWPORT);
        let hover = state.hover;

        controller.on_drag_start(&mut state, 100.0, 100.0);
        controller.on_pointer_move(&mut state, 0.0, 0.0, VIEWPORT);
        assert_eq!(state.hover, hover);
    }

    #[test]
    fn test_drag_move_accumulates_scaled_delta() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_drag_start(&mut state, 100.0, 100.0);
        controller.on_drag_move(&mut state, 150.0, 100.0);
        assert_eq!(state.drag.y, 25.0); // (150 - 100) * 0.5
        assert_eq!(state.drag.x, 0.0);
    }

    #[test]
    fn test_drag_clamped_after_every_update() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_drag_start(&mut state, 0.0, 0.0);

        // One huge burst clamps, it does not overshoot
        controller.on_drag_move(&mut state, 1000.0, 0.0);
        assert_eq!(state.drag.y, 45.0);

        // Arbitrary follow-up sequences stay inside the limits
        for (x, y) in [(500.0, -900.0), (-2000.0, 300.0), (80.0, 80.0), (-80.0, -80.0)] {
            controller.on_drag_move(&mut state, x, y);
            assert!(state.drag.x.abs() <= 45.0, "drag.x = {}", state.drag.x);
            assert!(state.drag.y.abs() <= 45.0, "drag.y = {}", state.drag.y);
        }
    }

    #[test]
    fn test_empty_gesture_leaves_rotation_untouched() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();
        state.drag = Vec2::new(12.0, -8.0);

        controller.on_drag_start(&mut state, 100.0, 100.0);
        controller.on_drag_end(&mut state);
        assert_eq!(state.drag, Vec2::new(12.0, -8.0));
        assert!(!state.dragging);
    }

    #[test]
    fn test_drag_move_outside_gesture_is_noop() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_drag_move(&mut state, 400.0, 400.0);
        assert_eq!(state.drag, Vec2::ZERO);
    }

    #[test]
    fn test_second_drag_start_keeps_delta_origin() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_drag_start(&mut state, 100.0, 100.0);
        controller.on_drag_start(&mut state, 500.0, 500.0);
        assert_eq!(state.last_pointer, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_easing_converges_exponentially() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();
        state.hover = Vec2::new(10.0, 10.0);

        for n in 1..=60u32 {
            controller.step(&mut state);
            let expected = 10.0 * (1.0 - 0.9f32.powi(n as i32));
            assert!(
                (state.current.x - expected).abs() < 1e-3,
                "frame {n}: current = {}, expected = {expected}",
                state.current.x
            );
            assert!(state.current.x < 10.0, "easing must never reach the target");
        }
    }

    #[test]
    fn test_easing_frozen_while_dragging() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();
        state.hover = Vec2::new(10.0, 10.0);

        controller.on_drag_start(&mut state, 0.0, 0.0);
        controller.step(&mut state);
        assert_eq!(state.current, Vec2::ZERO);
    }

    #[test]
    fn test_dragging_transform_ignores_hover() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();
        state.hover = Vec2::new(7.0, -3.0);
        state.current = Vec2::new(5.0, 5.0);
        state.drag = Vec2::new(10.0, 20.0);
        state.dragging = true;

        let t = controller.step(&mut state);
        assert_eq!(
            t,
            Transform {
                rotate_y: 20.0,
                rotate_x: 10.0,
                scale: DRAG_SCALE,
            }
        );
    }

    #[test]
    fn test_released_drag_offsets_ambient_blend() {
        let controller = OrientationController::new();
        let mut state = OrientationState::new();

        controller.on_drag_start(&mut state, 0.0, 0.0);
        controller.on_drag_move(&mut state, 40.0, -20.0);
        controller.on_drag_end(&mut state);

        let t = controller.step(&mut state);
        assert_eq!(t.rotate_y, 20.0);
        assert_eq!(t.rotate_x, 10.0);
        assert_eq!(t.scale, HOVER_SCALE);
    }

    #[test]
    fn test_disabled_rig_is_inert() {
        let mut rig = OrientationRig::attach(false);
        assert!(!rig.is_enabled());

        rig.process_event(PointerEvent::Down { x: 10.0, y: 10.0 }, VIEWPORT);
        rig.process_event(PointerEvent::Move { x: 90.0, y: 90.0 }, VIEWPORT);
        assert!(rig.step().is_none());
        assert!(rig.state().is_none());
        assert_eq!(rig.cursor(), "grab");
    }

    #[test]
    fn test_rig_routes_moves_by_mode() {
        let mut rig = rig();

        // Ambient move retargets hover
        rig.process_event(PointerEvent::Move { x: 1000.0, y: 800.0 }, VIEWPORT);
        assert_eq!(rig.state().unwrap().hover.x, 7.5);

        // Press, then the same move coordinates feed the drag instead
        rig.process_event(PointerEvent::Down { x: 100.0, y: 100.0 }, VIEWPORT);
        assert_eq!(rig.cursor(), "grabbing");
        rig.process_event(PointerEvent::Move { x: 150.0, y: 100.0 }, VIEWPORT);

        let state = rig.state().unwrap();
        assert_eq!(state.drag.y, 25.0);
        assert_eq!(state.hover.x, 7.5, "hover untouched mid-drag");

        rig.process_event(PointerEvent::Up, VIEWPORT);
        assert_eq!(rig.cursor(), "grab");
    }
}
