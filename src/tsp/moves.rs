//! Tour perturbation operators.
//!
//! Each operator rewrites the half-open segment `[a, b)` of a source tour
//! into a target buffer and copies the prefix `[0, a)` and suffix
//! `[b, len)` unchanged:
//!
//! - [`two_opt`]: reverse the segment
//! - [`translate`]: move the last segment element to its front
//! - [`swap`]: exchange the first and last segment elements
//!
//! All three permute the segment only, so a valid tour stays valid and its
//! endpoints stay fixed as long as `a >= 1` and `b <= len - 1`.

use super::pool::{PooledTour, TourPool};
use crate::random::RandomSource;

/// Rolls below this pick [`TourMove::TwoOpt`].
const TWO_OPT_THRESHOLD: f64 = 0.40;
/// Rolls below this (and above the 2-opt threshold) pick [`TourMove::Translate`].
const TRANSLATE_THRESHOLD: f64 = 0.80;

/// The neighbourhood moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourMove {
    /// Segment reversal.
    TwoOpt,
    /// Single-element rotation of the segment.
    Translate,
    /// Exchange of the segment endpoints.
    Swap,
}

impl TourMove {
    /// Picks a move from a uniform `[0, 1)` roll: 40% 2-opt, 40%
    /// translate, 20% swap.
    pub fn from_roll(roll: f64) -> Self {
        if roll < TWO_OPT_THRESHOLD {
            TourMove::TwoOpt
        } else if roll < TRANSLATE_THRESHOLD {
            TourMove::Translate
        } else {
            TourMove::Swap
        }
    }

    /// Writes `source` with this move applied to `[a, b)` into `target`.
    pub fn apply(self, source: &[usize], target: &mut [usize], a: usize, b: usize) {
        match self {
            TourMove::TwoOpt => two_opt(source, target, a, b),
            TourMove::Translate => translate(source, target, a, b),
            TourMove::Swap => swap(source, target, a, b),
        }
    }
}

fn check_segment(source: &[usize], target: &[usize], a: usize, b: usize) {
    debug_assert_eq!(source.len(), target.len(), "tour lengths differ");
    debug_assert!(a + 2 <= b && b <= source.len(), "bad segment {a}..{b}");
}

/// Reverses `[a, b)`.
///
/// # Panics
/// Panics if `b > source.len()` or the slices differ in length.
pub fn two_opt(source: &[usize], target: &mut [usize], a: usize, b: usize) {
    check_segment(source, target, a, b);
    target[..a].copy_from_slice(&source[..a]);
    for (t, &s) in target[a..b].iter_mut().zip(source[a..b].iter().rev()) {
        *t = s;
    }
    target[b..].copy_from_slice(&source[b..]);
}

/// Moves `source[b - 1]` to position `a`, shifting `[a, b - 1)` right by one.
///
/// # Panics
/// Panics if `b > source.len()`, `a >= b`, or the slices differ in length.
pub fn translate(source: &[usize], target: &mut [usize], a: usize, b: usize) {
    check_segment(source, target, a, b);
    target[..a].copy_from_slice(&source[..a]);
    target[a] = source[b - 1];
    target[a + 1..b].copy_from_slice(&source[a..b - 1]);
    target[b..].copy_from_slice(&source[b..]);
}

/// Exchanges positions `a` and `b - 1`.
///
/// # Panics
/// Panics if `b > source.len()`, `a >= b`, or the slices differ in length.
pub fn swap(source: &[usize], target: &mut [usize], a: usize, b: usize) {
    check_segment(source, target, a, b);
    target.copy_from_slice(source);
    target.swap(a, b - 1);
}

/// Draws a segment `[a, b)` that spans at least two positions and leaves
/// the first and last positions of a tour of length `path_size` alone.
///
/// `a` is uniform in `[1, path_size - 2)` and `b - a` is uniform in
/// `[2, path_size - a)`.
///
/// # Panics
/// Panics in debug builds if `path_size < 4`.
pub fn random_segment<R: RandomSource + ?Sized>(
    path_size: usize,
    rng: &mut R,
) -> (usize, usize) {
    debug_assert!(path_size >= 4, "tour of length {path_size} has no movable segment");
    let a = rng.index(1, path_size - 2);
    let b = a + rng.index(2, path_size - a);
    (a, b)
}

/// Creates a neighbour of `source` in `pool` by one random move.
///
/// Draws the segment first, then the roll that picks the move.
pub fn neighbour<R: RandomSource + ?Sized>(
    pool: &mut TourPool<'_>,
    source: &PooledTour,
    rng: &mut R,
) -> PooledTour {
    let (a, b) = random_segment(pool.path_size(), rng);
    let mv = TourMove::from_roll(rng.real());
    pool.derive(source, |from, to| mv.apply(from, to, a, b))
}
