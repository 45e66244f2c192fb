use crate::{
    Alphabet, BufferedGenerator, CryptoGenerator, CryptoPreallocGenerator, NaiveGenerator,
    OsRandom, PreallocGenerator, StringGenerator, ThreadRandom,
};
use core::fmt;

/// A named generation strategy.
///
/// Pairs a display name with a boxed [`StringGenerator`] so a driver can
/// iterate a flat list of interchangeable strategies, printing or timing
/// each by name. The list itself is plain data passed around by value; no
/// global registry is involved.
pub struct Strategy {
    name: &'static str,
    generator: Box<dyn StringGenerator>,
}

impl Strategy {
    /// Creates a named entry wrapping `generator`.
    pub fn new(name: &'static str, generator: impl StringGenerator + 'static) -> Self {
        Self {
            name,
            generator: Box::new(generator),
        }
    }

    /// Returns the strategy's display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the wrapped generator.
    pub fn generator(&self) -> &dyn StringGenerator {
        self.generator.as_ref()
    }
}

impl StringGenerator for Strategy {
    fn generate(&self, length: usize, alphabet: &Alphabet) -> String {
        self.generator.generate(length, alphabet)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Returns the canonical strategy table, in comparison order.
///
/// Uniform-real variants draw from [`ThreadRandom`]; byte-sampling
/// variants draw from [`OsRandom`].
///
/// # Example
/// ```
/// use strand::{Alphabet, StringGenerator, default_strategies};
///
/// let alphabet = Alphabet::new("abc")?;
/// for strategy in default_strategies() {
///     let s = strategy.generate(4, &alphabet);
///     assert_eq!(s.chars().count(), 4);
/// }
/// # Ok::<(), strand::Error>(())
/// ```
pub fn default_strategies() -> Vec<Strategy> {
    vec![
        Strategy::new("naive", NaiveGenerator::new(ThreadRandom)),
        Strategy::new("buffered", BufferedGenerator::new(ThreadRandom)),
        Strategy::new("prealloc", PreallocGenerator::new(ThreadRandom)),
        Strategy::new("crypto", CryptoGenerator::new(OsRandom)),
        Strategy::new("crypto_prealloc", CryptoPreallocGenerator::new(OsRandom)),
    ]
}
