use crate::{
    Alphabet, ByteSource, StringGenerator,
    generator::index::modulo_index,
};

/// Maps one batch of random bytes onto the alphabet by remainder,
/// accumulating in a growable buffer.
///
/// Draws all `length` bytes from the byte source in a single batch call,
/// then selects `alphabet[byte % alphabet.len()]` for each byte.
///
/// The remainder mapping carries modulo bias: whenever
/// `256 % alphabet.len() != 0`, the first `256 % alphabet.len()` symbols
/// are drawn with probability `ceil(256 / len) / 256` and the rest with
/// `floor(256 / len) / 256`. The bias is part of this variant's contract:
/// the comparison against the uniform-real variants covers randomness
/// quality as much as speed, so the mapping is not corrected by rejection
/// sampling.
///
/// ## See Also
/// - [`CryptoPreallocGenerator`] writes into a pre-sized buffer instead.
///
/// [`CryptoPreallocGenerator`]: crate::CryptoPreallocGenerator
#[derive(Clone, Debug, Default)]
pub struct CryptoGenerator<B> {
    source: B,
}

impl<B> CryptoGenerator<B>
where
    B: ByteSource,
{
    /// Creates a new [`CryptoGenerator`] over the given byte source.
    pub const fn new(source: B) -> Self {
        Self { source }
    }
}

impl<B> StringGenerator for CryptoGenerator<B>
where
    B: ByteSource,
{
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        let mut bytes = vec![0_u8; length];
        self.source.fill_bytes(&mut bytes);

        let mut symbols = Vec::new();
        for byte in bytes {
            symbols.push(alphabet.symbol(modulo_index(byte, alphabet.len())));
        }
        symbols.into_iter().collect()
    }
}
