use rand::{Rng, seq::SliceRandom};

/// Uniformly shuffles the pool and keeps the first `size` entries. Smaller
/// pools are kept whole.
pub fn draw<T, R>(mut pool: Vec<T>, size: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    pool.shuffle(rng);
    pool.truncate(size);
    pool
}
