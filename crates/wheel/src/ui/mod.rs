pub mod audio;
pub mod surface;

pub use audio::{AudioCues, NullAudio, PlayerAudio};
pub use surface::{ConsoleSurface, Side, Surface, WheelFrame};
