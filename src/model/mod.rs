// MODEL: UI state and derived style values
pub mod gradient;
pub mod orientation;
pub mod swatch;

pub use gradient::GradientPhase;
pub use orientation::{OrientationState, Transform};
pub use swatch::SwatchPalette;
