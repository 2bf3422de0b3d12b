use crate::controller::OrientationRig;
use crate::model::GradientPhase;

/// Per-frame update state: the showcase rotation rig and the hero gradient,
/// each present only when its target element was found at attach.
pub struct FrameLoopContext {
    pub rig: OrientationRig,
    pub gradient: Option<GradientPhase>,
}

/// Style values produced by one frame tick.
pub struct FrameOutput {
    pub transform: Option<String>,
    pub gradient: Option<String>,
}

impl FrameLoopContext {
    pub fn new(rig: OrientationRig, gradient: Option<GradientPhase>) -> Self {
        Self { rig, gradient }
    }

    /// Whether anything needs a running frame loop at all.
    pub fn is_animated(&self) -> bool {
        self.rig.is_enabled() || self.gradient.is_some()
    }

    /// Advance every animated effect by one frame.
    pub fn tick(&mut self) -> FrameOutput {
        FrameOutput {
            transform: self.rig.step().map(|t| t.to_css()),
            gradient: self.gradient.as_mut().map(|g| {
                g.advance();
                g.to_css()
            }),
        }
    }
}
