use crate::entry::Verse;
use rand::Rng;

/// Picks the pair of verses shown side by side.
///
/// Empty pool yields `None`; a single-verse pool yields that verse on both
/// sides; anything larger yields two distinct verses, redrawing the second
/// index until it differs (expected O(1) retries).
pub fn pick_two_distinct<'a, R: Rng>(pool: &'a [Verse], rng: &mut R) -> Option<(&'a Verse, &'a Verse)> {
    match pool {
        [] => None,
        [only] => Some((only, only)),
        _ => {
            let first = rng.gen_range(0..pool.len());
            let mut second = rng.gen_range(0..pool.len());
            while second == first {
                second = rng.gen_range(0..pool.len());
            }
            Some((&pool[first], &pool[second]))
        }
    }
}
