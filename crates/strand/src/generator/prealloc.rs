use crate::{
    Alphabet, FractionSource, StringGenerator,
    generator::index::uniform_index,
};

/// Fills a pre-sized buffer of exactly `length` slots, then joins.
///
/// The slot buffer never grows during the fill phase, so this variant
/// isolates the cost of the draws and the final join from any
/// reallocation. Same uniform-real draw as [`NaiveGenerator`].
///
/// [`NaiveGenerator`]: crate::NaiveGenerator
#[derive(Clone, Debug, Default)]
pub struct PreallocGenerator<R> {
    source: R,
}

impl<R> PreallocGenerator<R>
where
    R: FractionSource,
{
    /// Creates a new [`PreallocGenerator`] over the given fraction source.
    pub const fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R> StringGenerator for PreallocGenerator<R>
where
    R: FractionSource,
{
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        let mut slots = vec!['\0'; length];
        for slot in &mut slots {
            let index = uniform_index(&self.source, alphabet.len());
            *slot = alphabet.symbol(index);
        }
        slots.into_iter().collect()
    }
}
