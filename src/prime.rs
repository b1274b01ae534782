/// The result of classifying an integer by primality.
///
/// Primality is not meaningful for values below `2`, which are reported as
/// [`Primality::Undefined`] rather than being folded into the composite case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primality {
    Prime,
    NotPrime,
    Undefined,
}

/// Classifies `x` by trial division.
///
/// Odd candidate divisors are tried from `3` up to `⌊√x⌋` inclusive, so the
/// cost is _O_(√x). There are no side effects and no allocation.
///
/// # Examples
///
/// ```
/// use primemap::{is_prime, Primality};
///
/// assert_eq!(is_prime(1), Primality::Undefined);
/// assert_eq!(is_prime(2), Primality::Prime);
/// assert_eq!(is_prime(4), Primality::NotPrime);
/// assert_eq!(is_prime(17), Primality::Prime);
/// ```
#[must_use]
pub const fn is_prime(x: usize) -> Primality {
    if x < 2 {
        return Primality::Undefined;
    }
    if x < 4 {
        return Primality::Prime;
    }
    if x % 2 == 0 {
        return Primality::NotPrime;
    }

    let mut divisor = 3;
    while divisor * divisor <= x {
        if x % divisor == 0 {
            return Primality::NotPrime;
        }
        divisor += 2;
    }

    Primality::Prime
}

/// Returns the smallest prime greater than or equal to `x`.
///
/// If `x` is already prime, `x` itself is returned. Values below `2` advance
/// to `2`. Termination for any input is guaranteed by Bertrand's postulate.
///
/// # Examples
///
/// ```
/// use primemap::next_prime;
///
/// assert_eq!(next_prime(50), 53);
/// assert_eq!(next_prime(31), 31);
/// assert_eq!(next_prime(0), 2);
/// ```
#[must_use]
pub const fn next_prime(x: usize) -> usize {
    let mut candidate = x;
    while !matches!(is_prime(candidate), Primality::Prime) {
        candidate += 1;
    }
    candidate
}
