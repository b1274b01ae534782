mod map;
mod prime;
#[macro_use]
mod builder;
mod opt;

// Public exports.
pub use map::PrimeMap;
pub use prime::{is_prime, next_prime, Primality};
