use crate::{
    Alphabet, ByteSource, StringGenerator,
    generator::index::modulo_index,
};

/// Maps one batch of random bytes onto the alphabet by remainder, writing
/// into a pre-sized buffer.
///
/// Identical to [`CryptoGenerator`] (one batch entropy call, byte-modulo
/// selection, the same preserved modulo bias) except that chosen symbols
/// are written into a slot buffer of exactly `length` entries, so nothing
/// grows during the fill phase.
///
/// [`CryptoGenerator`]: crate::CryptoGenerator
#[derive(Clone, Debug, Default)]
pub struct CryptoPreallocGenerator<B> {
    source: B,
}

impl<B> CryptoPreallocGenerator<B>
where
    B: ByteSource,
{
    /// Creates a new [`CryptoPreallocGenerator`] over the given byte
    /// source.
    pub const fn new(source: B) -> Self {
        Self { source }
    }
}

impl<B> StringGenerator for CryptoPreallocGenerator<B>
where
    B: ByteSource,
{
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        let mut bytes = vec![0_u8; length];
        self.source.fill_bytes(&mut bytes);

        let mut slots = vec!['\0'; length];
        for (slot, byte) in slots.iter_mut().zip(bytes) {
            *slot = alphabet.symbol(modulo_index(byte, alphabet.len()));
        }
        slots.into_iter().collect()
    }
}
