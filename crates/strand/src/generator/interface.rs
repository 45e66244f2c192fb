use crate::{Alphabet, Result};

/// A minimal interface for producing a random string from a length and an
/// alphabet.
///
/// Every implementation satisfies the same contract (the output contains
/// exactly `length` symbols, each drawn independently from `alphabet`, and
/// `length == 0` yields the empty string) and differs only in how the
/// output is accumulated and where its randomness comes from. Positions
/// are independent: no output symbol constrains any other.
///
/// Implementations are stateless between calls and reentrant; each call
/// allocates and discards its own working buffers.
///
/// # Example
/// ```
/// use strand::{Alphabet, NaiveGenerator, StringGenerator, ThreadRandom};
///
/// let alphabet = Alphabet::new("abc")?;
/// let generator = NaiveGenerator::new(ThreadRandom);
///
/// let s = generator.generate(8, &alphabet);
/// assert_eq!(s.chars().count(), 8);
/// assert!(s.chars().all(|symbol| alphabet.contains(symbol)));
/// # Ok::<(), strand::Error>(())
/// ```
pub trait StringGenerator {
    /// Returns a string of exactly `length` symbols drawn from `alphabet`.
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String;

    /// A fallible version of [`Self::generate`] that validates a raw
    /// alphabet first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAlphabet`] if `alphabet` contains no symbols;
    /// no generation work happens in that case.
    ///
    /// [`Error::EmptyAlphabet`]: crate::Error::EmptyAlphabet
    fn try_generate(&self, length: usize, alphabet: &str) -> Result<String> {
        let alphabet = Alphabet::new(alphabet)?;
        Ok(self.generate(length, &alphabet))
    }
}
