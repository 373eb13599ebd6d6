use rand::Rng;

use super::{NameEntry, NameSequence, parse_names, shuffle};

/// How many times the shuffled base list is repeated before duplication.
/// Keeps the wall dense even for short signer lists.
pub const DEFAULT_REPEAT: usize = 20;

/// Full pipeline: parse, shuffle, repeat `repeat` times, then duplicate.
pub fn prepare_sequence<R: Rng + ?Sized>(
    text: &str,
    repeat: usize,
    rng: &mut R,
) -> NameSequence {
    let mut names = parse_names(text);
    shuffle(&mut names, rng);
    repeat_for_loop(&names, repeat)
}

/// Repeats an already ordered base list and appends an identical copy.
pub fn repeat_for_loop(base: &[NameEntry], repeat: usize) -> NameSequence {
    if base.is_empty() || repeat == 0 {
        return NameSequence::empty();
    }

    let mut half = Vec::with_capacity(base.len() * repeat);
    for _ in 0..repeat {
        half.extend_from_slice(base);
    }

    NameSequence::from_halves(half)
}
