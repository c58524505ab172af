/// Everything that can happen to a live wheel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Start a spin, unless one is already in flight.
    Spin,
    /// The spin animation has run its course; resolve the winner.
    Reveal,
    /// Close the winner overlay.
    Dismiss,
    /// Flip and persist the mute preference.
    ToggleMute,
    /// Pick and display a fresh pair of verses.
    RotateVerses,
    /// Tear the session down.
    Quit,
}
