//! Binomial mass, cumulative and quantile evaluation
//!
//! Mass terms use the saddle-point form
//! `exp(-stirling - deviance) / sqrt(2 pi k (n - k) / n)`, which never
//! subtracts two large log-factorials. The cumulative function runs the
//! incomplete beta continued fraction of the nearer tail to convergence and
//! scales it by a single mass term.

use crate::io::configuration::{
    CONTINUED_FRACTION_TOLERANCE, MAX_CONTINUED_FRACTION_TERMS, PROBABILITY_TOLERANCE,
};
use num_traits::ToPrimitive;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::TAU;

/// `ln(sqrt(2 pi))`
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Floor for Lentz denominators
const LENTZ_FLOOR: f64 = 1e-300;

/// Upper bound on series terms in [`deviance`], which converges geometrically
const MAX_DEVIANCE_TERMS: u32 = 64;

/// `ln(m!) - (m + 1/2) ln(m) + m - ln(sqrt(2 pi))`, requires `m >= 1`
fn stirling_remainder(m: u64) -> f64 {
    const S0: f64 = 1.0 / 12.0;
    const S1: f64 = 1.0 / 360.0;
    const S2: f64 = 1.0 / 1260.0;
    const S3: f64 = 1.0 / 1680.0;
    const S4: f64 = 1.0 / 1188.0;

    let mf = m as f64;
    if m <= 15 {
        return ln_gamma(mf + 1.0) - (mf + 0.5).mul_add(mf.ln(), -mf) - LN_SQRT_2PI;
    }

    let squared = mf * mf;
    let tail = if m > 500 {
        S1
    } else if m > 80 {
        S1 - S2 / squared
    } else if m > 35 {
        S1 - (S2 - S3 / squared) / squared
    } else {
        S1 - (S2 - (S3 - S4 / squared) / squared) / squared
    };
    (S0 - tail / squared) / mf
}

/// `x ln(x / mean) + mean - x`, evaluated by series when `x` is near `mean`
fn deviance(x: f64, mean: f64) -> f64 {
    if (x - mean).abs() >= 0.1 * (x + mean) {
        return x.mul_add((x / mean).ln(), mean - x);
    }

    let ratio = (x - mean) / (x + mean);
    let ratio_squared = ratio * ratio;
    let mut sum = (x - mean) * ratio;
    let mut term = 2.0 * x * ratio;
    for j in 1..=MAX_DEVIANCE_TERMS {
        term *= ratio_squared;
        let next = sum + term / f64::from(2 * j + 1);
        if (next - sum).abs() <= f64::EPSILON * next.abs() {
            return next;
        }
        sum = next;
    }
    sum
}

/// Probability mass `P(X = k)` for X ~ Binomial(n, p)
///
/// Returns 0 outside the support. The degenerate cases `p = 0` and `p = 1`
/// are exact, as is `n = 0`.
pub fn binomial_pmf(k: u64, n: u64, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    if n == 0 {
        return 1.0;
    }

    let q = 1.0 - p;
    let nf = n as f64;

    if k == 0 {
        let log_mass = if p < 0.1 {
            nf.mul_add(-p, -deviance(nf, nf * q))
        } else {
            nf * (-p).ln_1p()
        };
        return log_mass.exp();
    }
    if k == n {
        let log_mass = if q < 0.1 {
            nf.mul_add(-q, -deviance(nf, nf * p))
        } else {
            nf * p.ln()
        };
        return log_mass.exp();
    }

    let kf = k as f64;
    let rest = (n - k) as f64;
    let log_core = stirling_remainder(n)
        - stirling_remainder(k)
        - stirling_remainder(n - k)
        - deviance(kf, nf * p)
        - deviance(rest, nf * q);
    let spread = (TAU * kf * (rest / nf)).sqrt();
    (log_core.exp() / spread).min(1.0)
}

const fn lentz_floor(value: f64) -> f64 {
    if value.abs() < LENTZ_FLOOR {
        LENTZ_FLOOR
    } else {
        value
    }
}

/// Continued fraction `h` of the regularized incomplete beta function
///
/// `I_x(a, b) = x^a (1 - x)^b / (a B(a, b)) * h`, evaluated with the modified
/// Lentz method. Converges when `x < (a + 1) / (a + b + 2)`, in a number of
/// terms that grows with `sqrt(max(a, b))`.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let sum = a + b;
    let above = a + 1.0;
    let below = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 / lentz_floor(1.0 - sum * x / above);
    let mut h = d;

    for term in 1..=MAX_CONTINUED_FRACTION_TERMS {
        let m = f64::from(term);
        let m2 = 2.0 * m;

        let even = m * (b - m) * x / ((below + m2) * (a + m2));
        d = 1.0 / lentz_floor(even.mul_add(d, 1.0));
        c = lentz_floor(1.0 + even / c);
        h *= d * c;

        let odd = -(a + m) * (sum + m) * x / ((a + m2) * (above + m2));
        d = 1.0 / lentz_floor(odd.mul_add(d, 1.0));
        c = lentz_floor(1.0 + odd / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < CONTINUED_FRACTION_TOLERANCE {
            return h;
        }
    }

    log::warn!("incomplete beta continued fraction did not converge: a = {a}, b = {b}, x = {x}");
    h
}

/// Left-cumulative probability `P(X <= k)` over the support
///
/// `P(X <= k) = I_{1-p}(n - k, k + 1)` and `P(X > k) = I_p(k + 1, n - k)`.
/// The tail on the convergent side of the continued fraction is evaluated
/// directly. Its prefactors reduce to `p P(X = k)` and `(1 - p) P(X = k + 1)`.
fn left_cumulative(k: u64, n: u64, p: f64) -> f64 {
    if k >= n || p <= 0.0 {
        return 1.0;
    }
    if p >= 1.0 {
        return 0.0;
    }

    let q = 1.0 - p;
    let failures = (n - k) as f64;
    let successes = (k + 1) as f64;

    let cumulative = if q * (n as f64 + 3.0) < failures + 1.0 {
        binomial_pmf(k, n, p) * p * beta_continued_fraction(failures, successes, q)
    } else {
        let upper = binomial_pmf(k + 1, n, p) * q * beta_continued_fraction(successes, failures, p);
        1.0 - upper
    };
    cumulative.clamp(0.0, 1.0)
}

/// Cumulative probability `P(X <= k)` for X ~ Binomial(n, p)
///
/// Negative `k` lies below the support and has no mass.
pub fn binomial_cdf(k: i64, n: u64, p: f64) -> f64 {
    k.to_u64().map_or(0.0, |k| left_cumulative(k, n, p))
}

/// Smallest `k` in `0..=n` with `P(X <= k) >= q`
///
/// Bisects the support. `P(X <= n)` is exactly 1, so a `q` in `[0, 1]`
/// always has an answer.
pub fn binomial_quantile(q: f64, n: u64, p: f64) -> u64 {
    let mut low = 0;
    let mut high = n;

    while low < high {
        let mid = low + (high - low) / 2;
        if left_cumulative(mid, n, p) >= q {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

/// Clamp a derived probability into `[0, 1]`
///
/// Values further outside than [`PROBABILITY_TOLERANCE`] indicate a numeric
/// problem rather than rounding and are logged.
pub fn clamp_probability(value: f64) -> f64 {
    if !(-PROBABILITY_TOLERANCE..=1.0 + PROBABILITY_TOLERANCE).contains(&value) {
        log::warn!("probability {value} outside [0, 1] beyond tolerance, clamping");
    }
    value.clamp(0.0, 1.0)
}
