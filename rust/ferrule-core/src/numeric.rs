//! Floating-point routines: square root, error function, unit-interval
//! random draw.

use rand::Rng;

/// Principal (non-negative) square root.
///
/// Negative input yields NaN and zero yields zero, following the host math
/// library's square-root semantics.
pub fn sqroot(x: f64) -> f64 {
    x.sqrt()
}

/// The Gauss error function.
///
/// Abramowitz & Stegun 7.1.26 rational approximation, absolute error below
/// 1.5e-7, extended to negative input by erf(-x) = -erf(x).
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// A uniformly distributed value in `[0, 1)` from the process RNG.
pub fn random_unit() -> f64 {
    rand::thread_rng().gen::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The approximation is good to 1.5e-7; tests leave headroom on top.
    const TOL: f64 = 1e-6;

    #[test]
    fn sqroot_of_perfect_square() {
        assert_eq!(sqroot(16.0), 4.0);
        assert_eq!(sqroot(0.0), 0.0);
    }

    #[test]
    fn sqroot_squares_back() {
        for x in [0.25, 1.0, 2.0, 123456.0, 1e12] {
            let r = sqroot(x);
            assert!(r >= 0.0);
            assert!((r * r - x).abs() <= x * 1e-12);
        }
    }

    #[test]
    fn sqroot_of_negative_is_nan() {
        assert!(sqroot(-4.0).is_nan());
        assert!(sqroot(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn erf_known_values() {
        assert_eq!(erf(0.0), 0.0);
        assert!((erf(1.0) - 0.842_700_79).abs() < TOL);
        assert!((erf(2.0) - 0.995_322_265).abs() < TOL);
    }

    #[test]
    fn erf_is_odd() {
        for x in [0.1, 0.5, 1.0, 2.0, 3.5] {
            assert!((erf(-x) + erf(x)).abs() < 1e-15);
        }
    }

    #[test]
    fn erf_saturates_toward_one() {
        assert!((erf(6.0) - 1.0).abs() < TOL);
        assert!(erf(4.0) < 1.0 + TOL);
    }

    #[test]
    fn random_unit_stays_in_range() {
        for _ in 0..1000 {
            let r = random_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }
}
