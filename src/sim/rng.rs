//! Random draws used by the simulation
//!
//! All randomness flows through a caller-supplied [`Rng`] so a seeded
//! `Pcg32` reproduces a run exactly.

use rand::Rng;

/// Uniform integer in the closed range `[min, max]` (bounds swapped if reversed)
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Uniform element of `seq`, or `None` when it is empty
pub fn pick_random<'a, T, R: Rng>(rng: &mut R, seq: &'a [T]) -> Option<&'a T> {
    if seq.is_empty() {
        return None;
    }
    let index = random_int(rng, 0, seq.len() as i64 - 1);
    seq.get(index as usize)
}

/// Uniform float in the closed range `[min, max]` (bounds swapped if reversed)
///
/// A range too wide to sample as an `f32` yields its lower bound.
pub fn random_between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !(hi - lo).is_finite() {
        return lo.min(f32::MAX);
    }
    rng.random_range(lo..=hi)
}
