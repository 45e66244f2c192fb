use crate::ByteSource;
use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

/// A `ByteSource` that requests entropy directly from the operating
/// system.
///
/// This is the cryptographically strong batch source: every fill is one
/// request to the OS entropy interface, with no userspace generator in
/// between. Slower than [`ThreadRandom`], which is what the byte-sampling
/// strategies exist to measure.
///
/// The OS interface is assumed to never fail once available; a failing
/// read panics rather than surfacing an error from the generation path.
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[derive(Default, Clone)]
pub struct OsRandom;

impl ByteSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.unwrap_err().fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_fill_covers_the_buffer() {
        let source = OsRandom;
        let mut buf = [0_u8; 4096];
        source.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn empty_fill_is_a_no_op() {
        let source = OsRandom;
        let mut buf = [0_u8; 0];
        source.fill_bytes(&mut buf);
    }
}
