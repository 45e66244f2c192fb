mod alphabet;
mod error;
mod generator;
mod random;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::random::*;
