use crate::{
    Alphabet, FractionSource, StringGenerator,
    generator::index::uniform_index,
};

/// Grows the output one symbol at a time, directly on a `String`.
///
/// Semantically the simplest strategy: each chosen symbol is appended to
/// the accumulating string with no capacity reserved up front, so the
/// string's own growth policy dictates the cost profile. That growth cost
/// is exactly what this variant contributes to a strategy comparison.
///
/// Indices come from uniform-real selection, so the draw is uniform given
/// an ideal fraction source.
///
/// ## See Also
/// - [`BufferedGenerator`] accumulates in a growable buffer instead.
/// - [`PreallocGenerator`] fills a pre-sized buffer instead.
///
/// [`BufferedGenerator`]: crate::BufferedGenerator
/// [`PreallocGenerator`]: crate::PreallocGenerator
#[derive(Clone, Debug, Default)]
pub struct NaiveGenerator<R> {
    source: R,
}

impl<R> NaiveGenerator<R>
where
    R: FractionSource,
{
    /// Creates a new [`NaiveGenerator`] over the given fraction source.
    pub const fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R> StringGenerator for NaiveGenerator<R>
where
    R: FractionSource,
{
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        let mut result = String::new();
        for _ in 0..length {
            let index = uniform_index(&self.source, alphabet.len());
            result.push(alphabet.symbol(index));
        }
        result
    }
}
