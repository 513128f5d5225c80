//! Randomness as an explicit capability.
//!
//! Every stochastic routine in the crate takes `&mut R where R: Rng + ?Sized`
//! instead of reaching for a global generator, so callers decide between a
//! reproducible [`StdRng`] and an entropy-seeded one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Build a generator from an optional seed. `None` seeds from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Uniform draw on the open interval (0, 1).
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen();
        if u > 0.0 {
            return u;
        }
    }
}

/// Standard normal draw via the Box-Muller transform.
///
/// Consumes two uniforms per call and keeps only the cosine branch.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = open_unit(rng);
    let v = open_unit(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}
