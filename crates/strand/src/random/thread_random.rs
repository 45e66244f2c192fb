use crate::{ByteSource, FractionSource};
use rand::{Rng, RngCore, rng};

/// Random sources backed by the thread-local RNG (`rand::rng()`).
///
/// The thread-local generator is fast, ChaCha-based, and reseeds itself
/// periodically. It serves both capabilities here, a per-symbol fraction
/// draw and a batch byte fill, so the same entropy stream can back either
/// family of strategies.
#[derive(Default, Clone)]
pub struct ThreadRandom;

impl FractionSource for ThreadRandom {
    fn fraction(&self) -> f64 {
        rng().random()
    }
}

impl ByteSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rng().fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_stay_in_the_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..10_000 {
            let f = source.fraction();
            assert!((0.0..1.0).contains(&f), "fraction out of range: {f}");
        }
    }

    #[test]
    fn batch_fill_covers_the_buffer() {
        let source = ThreadRandom;
        let mut buf = [0_u8; 4096];
        source.fill_bytes(&mut buf);
        // A 4 KiB batch of all-zero output would mean the fill never ran.
        assert!(buf.iter().any(|&b| b != 0));
    }
}
