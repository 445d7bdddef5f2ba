//! Hurwitz zeta function used to normalise the truncated power law.

/// Relative tolerance at which the series stops.
const TOLERANCE: f64 = f64::EPSILON / 2.0;

/// Minimum number of directly summed terms before the tail expansion.
const DIRECT_TERMS: usize = 9;

/// `(2j)! / B_{2j}` for `j = 1..=12`, the Euler-Maclaurin correction
/// divisors.
const EULER_MACLAURIN_DIVISORS: [f64; 12] = [
    12.0,
    -720.0,
    30_240.0,
    -1_209_600.0,
    47_900_160.0,
    -1.892_437_580_318_379_2e9,
    7.472_424_96e10,
    -2.950_130_727_918_164_2e12,
    1.164_678_281_435_006_7e14,
    -4.597_978_722_407_472_6e15,
    1.815_210_540_194_354_7e17,
    -7.166_165_256_175_667e18,
];

/// Computes `zeta(s, a) = sum_{n >= 0} (n + a)^-s` for `s > 1` and `a > 0`.
///
/// Sums the leading terms directly until the shifted argument exceeds nine,
/// then closes the series with the integral tail and Bernoulli corrections.
pub(crate) fn hurwitz_zeta(s: f64, a: f64) -> f64 {
    debug_assert!(s > 1.0, "hurwitz_zeta diverges for s <= 1");
    debug_assert!(a > 0.0, "hurwitz_zeta requires a positive shift");

    let mut sum = a.powf(-s);
    let mut shift = a;
    let mut term = 0.0;
    let mut summed = 0;
    while summed < DIRECT_TERMS || shift <= 9.0 {
        summed += 1;
        shift += 1.0;
        term = shift.powf(-s);
        sum += term;
        if (term / sum).abs() < TOLERANCE {
            return sum;
        }
    }

    // The last direct term is counted twice by the trapezoid correction.
    let base = shift;
    sum += term * base / (s - 1.0);
    sum -= 0.5 * term;

    let mut rising = 1.0;
    let mut k = 0.0;
    for divisor in EULER_MACLAURIN_DIVISORS {
        rising *= s + k;
        term /= base;
        let correction = rising * term / divisor;
        sum += correction;
        if (correction / sum).abs() < TOLERANCE {
            break;
        }
        k += 1.0;
        rising *= s + k;
        term /= base;
        k += 1.0;
    }
    sum
}
