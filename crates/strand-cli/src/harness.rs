use core::hint::black_box;
use std::time::{Duration, Instant};
use strand::{Alphabet, Strategy, StringGenerator};

/// Times `calls` invocations of one strategy at one string length.
///
/// Returns wall-clock elapsed time for the whole batch. Each generated
/// string passes through `black_box` so the optimizer cannot drop the
/// work being measured.
pub fn time_strategy(
    strategy: &Strategy,
    length: usize,
    alphabet: &Alphabet,
    calls: u64,
) -> Duration {
    let start = Instant::now();
    for _ in 0..calls {
        black_box(strategy.generate(black_box(length), alphabet));
    }
    start.elapsed()
}
