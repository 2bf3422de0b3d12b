use glam::Vec2;

/// Scale applied while the ambient hover tilt drives the transform.
pub const HOVER_SCALE: f32 = 1.05;
/// Scale applied while a drag gesture drives the transform directly.
pub const DRAG_SCALE: f32 = 1.1;

/// Orientation of the showcase surface, blended from two angular inputs:
/// an ambient hover tilt (pointer position relative to viewport center) and
/// a cumulative drag rotation. All angles are degrees.
pub struct OrientationState {
    /// Ambient tilt target, roughly [-7.5, 7.5] per axis.
    pub hover: Vec2,
    /// Eased value approaching `hover` each frame.
    pub current: Vec2,
    /// Cumulative drag rotation: `x` about the X axis, `y` about the Y axis.
    /// Clamped to [-45, 45] after every update.
    pub drag: Vec2,
    /// While true, the rendered transform uses `drag` directly, undamped.
    pub dragging: bool,
    /// Previous pointer coordinate during an active drag.
    pub last_pointer: Vec2,
}

impl OrientationState {
    pub fn new() -> Self {
        Self {
            hover: Vec2::ZERO,
            current: Vec2::ZERO,
            drag: Vec2::ZERO,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Transform for the current frame. Drag angles persist after release and
    /// keep offsetting the ambient blend.
    pub fn transform(&self) -> Transform {
        if self.dragging {
            Transform {
                rotate_y: self.drag.y,
                rotate_x: self.drag.x,
                scale: DRAG_SCALE,
            }
        } else {
            Transform {
                rotate_y: self.current.x + self.drag.y,
                rotate_x: -self.current.y + self.drag.x,
                scale: HOVER_SCALE,
            }
        }
    }

    /// Cursor affordance for the showcase surface.
    pub fn cursor(&self) -> &'static str {
        if self.dragging { "grabbing" } else { "grab" }
    }
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-axis rotation plus scale, rendered as a CSS transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotate_y: f32,
    pub rotate_x: f32,
    pub scale: f32,
}

impl Transform {
    pub fn to_css(&self) -> String {
        format!(
            "perspective(1000px) rotateY({}deg) rotateX({}deg) scale({})",
            self.rotate_y, self.rotate_x, self.scale
        )
    }
}
