use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Derive an independent seed from a run seed, a stream tag and an index.
///
/// Every random stream in the engine (per entity, per frame, per producer) gets its own
/// generator seeded through this function, so no generator state is ever shared.
pub fn derive_seed(seed: u64, tag: &str, index: u64) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(seed);
    h.write_bytes(tag.as_bytes());
    h.write_u8(0);
    h.write_u64(index);
    h.finish()
}

/// A seed that differs between runs; used when the caller did not pin one.
pub fn process_seed() -> u64 {
    rand::random()
}

/// Generator for one random stream: `(seed, tag, index)` through [`derive_seed`].
pub fn stream_rng(seed: u64, tag: &str, index: u64) -> StdRng {
    StdRng::seed_from_u64(derive_seed(seed, tag, index))
}

/// Normal draw; a degenerate `sigma` (negative or non-finite) yields `mu`.
pub fn gauss(rng: &mut impl Rng, mu: f64, sigma: f64) -> f64 {
    match Normal::new(mu, sigma) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mu,
    }
}

pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
