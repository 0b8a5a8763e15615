//! Thread-local random source for lock tokens and random multivectors.

use rand::Rng;
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::thread_rng());
}

/// `N` uniform values in `[-1, 1)`.
#[inline]
pub fn gen_signed<const N: usize>() -> [f64; N] {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        std::array::from_fn(|_| rng.gen_range(-1.0..1.0))
    })
}

/// Nonzero token value; zero is reserved for sealed constants.
#[inline]
pub fn gen_token() -> u64 {
    RNG.with(|rng| rng.borrow_mut().gen_range(1..=u64::MAX))
}
