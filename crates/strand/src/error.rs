pub type Result<T> = core::result::Result<T, Error>;

/// All possible errors that `strand` can produce.
///
/// Generation itself is infallible once an [`Alphabet`] has been
/// constructed; the only failure point is validating raw alphabet input.
///
/// [`Alphabet`]: crate::Alphabet
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The alphabet contained no symbols.
    ///
    /// Index selection reduces a random draw modulo the alphabet length,
    /// so an empty alphabet is rejected before any generation work starts.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
}
