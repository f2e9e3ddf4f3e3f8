//! Starting guesses for Newton iteration
//!
//! Square roots of 0 through 9, rounded to six significant digits.

/// Seed values indexed by the integer part of inputs in `[1, 10)`
pub static SEED_TABLE: [f64; 10] = [
    0.0, 1.0, 1.41421, 1.73205, 2.0, 2.23607, 2.44949, 2.64575, 2.82843, 3.0,
];

/// Starting guess for Newton iteration on `x`
///
/// Inputs in `[1, 10)` use the table entry for `floor(x)`; everything else
/// starts from `x` itself.
pub fn seed_for(x: f64) -> f64 {
    if (1.0..10.0).contains(&x) {
        SEED_TABLE[x as usize]
    } else {
        x
    }
}
