use crate::{
    Alphabet, FractionSource, StringGenerator,
    generator::index::uniform_index,
};

/// Accumulates chosen symbols in a growable buffer, joining once at the
/// end.
///
/// Avoids repeated whole-string copies during the loop; pays one join cost
/// after the fill. Same uniform-real draw as [`NaiveGenerator`].
///
/// [`NaiveGenerator`]: crate::NaiveGenerator
#[derive(Clone, Debug, Default)]
pub struct BufferedGenerator<R> {
    source: R,
}

impl<R> BufferedGenerator<R>
where
    R: FractionSource,
{
    /// Creates a new [`BufferedGenerator`] over the given fraction source.
    pub const fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R> StringGenerator for BufferedGenerator<R>
where
    R: FractionSource,
{
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        let mut symbols = Vec::new();
        for _ in 0..length {
            let index = uniform_index(&self.source, alphabet.len());
            symbols.push(alphabet.symbol(index));
        }
        symbols.into_iter().collect()
    }
}
