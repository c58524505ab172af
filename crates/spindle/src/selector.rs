use crate::entry::Entry;
use crate::geometry;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

/// Extra full rotations added to every spin so even a near-zero stop angle
/// reads as a real spin.
pub const FULL_SPINS: u32 = 5;

/// How long the wheel animates before the winner is revealed. The render
/// surface's transition timing and the session's reveal delay both consume
/// this constant; they must agree or the displayed stop position lies.
pub const SPIN_DURATION: Duration = Duration::from_secs(5);

/// Result of one spin. Ephemeral: lives only for the duration of the
/// animation it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    /// Index of the winning entry, uniform over `[0, n)`.
    pub winner_index: usize,
    /// Resting position inside the winner's slice, in `[start, start + width)`.
    pub stop_angle: f64,
    /// Absolute rotation the wheel animates to.
    pub new_rotation: f64,
}

#[derive(Debug, Error)]
pub enum SpinError {
    #[error("cannot spin a wheel with no entries")]
    EmptyWheel,
}

/// Picks a winner uniformly and computes the rotation that parks the
/// winning slice under the pointer at 0°.
///
/// The wheel only ever moves forward: the returned rotation exceeds
/// `current_rotation` by at least `FULL_SPINS * 360` and by less than one
/// additional turn, and its residue mod 360 is `(360 - stop_angle) mod 360`.
pub fn spin<R: Rng>(
    entries: &[Entry],
    current_rotation: f64,
    rng: &mut R,
) -> Result<SpinOutcome, SpinError> {
    if entries.is_empty() {
        return Err(SpinError::EmptyWheel);
    }

    let n = entries.len();
    let winner_index = rng.gen_range(0..n);

    let slice = geometry::slice_angle(n);
    let stop_angle = geometry::slice_start(winner_index, n) + rng.gen_range(0.0..slice);

    // Shortest forward arc that lands the pointer on stop_angle, on top of
    // the mandatory full turns.
    let arc = (360.0 - stop_angle - current_rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let new_rotation = current_rotation + f64::from(FULL_SPINS) * 360.0 + arc;

    Ok(SpinOutcome {
        winner_index,
        stop_angle,
        new_rotation,
    })
}
