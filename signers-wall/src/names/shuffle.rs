use rand::Rng;
use rand::seq::SliceRandom;

/// In-place unbiased (Fisher–Yates) shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
