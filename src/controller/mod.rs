// CONTROLLER: Input handling and per-frame update logic
pub mod frame_loop;
pub mod input;
pub mod orientation;
pub mod scroll;

pub use frame_loop::{FrameLoopContext, FrameOutput};
pub use input::{KonamiTracker, PointerEvent};
pub use orientation::{OrientationController, OrientationRig};
