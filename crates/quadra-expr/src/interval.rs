//! Bounds and interval arithmetic over variable bounds.
//!
//! The per-term functions here are the single source of bound arithmetic for
//! both expression kinds: a linear term contributes `coeff * x`, a quadratic
//! term `coeff * x * y`, and a square term `coeff * x^2`. Expressions fold
//! term intervals with [`Interval::add`].

use serde::{Deserialize, Serialize};

/// Lower/upper bounds of a variable. Either side may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether the range contains zero.
    pub fn contains_zero(self) -> bool {
        self.lower <= 0.0 && 0.0 <= self.upper
    }
}

/// Achievable-value range of an expression under given variable bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub const ZERO: Interval = Interval {
        lower: 0.0,
        upper: 0.0,
    };

    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Pointwise sum of two intervals.
    pub fn add(self, other: Interval) -> Interval {
        Interval::new(self.lower + other.lower, self.upper + other.upper)
    }
}

/// Product with an absorbing zero: `0 * inf` is 0 here, not NaN.
fn bound_product(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else {
        a * b
    }
}

/// Scaled min/max over candidate extreme values.
fn spread(coeff: f64, candidates: &[f64]) -> Interval {
    let mut lower = f64::INFINITY;
    let mut upper = f64::NEG_INFINITY;
    for &value in candidates {
        let scaled = bound_product(coeff, value);
        lower = lower.min(scaled);
        upper = upper.max(scaled);
    }
    Interval::new(lower, upper)
}

/// Range of `coeff * x` for `x` within `bounds`.
pub fn linear_term_interval(coeff: f64, bounds: Bounds) -> Interval {
    spread(coeff, &[bounds.lower, bounds.upper])
}

/// Range of `coeff * x * y` for distinct variables `x` and `y`.
pub fn cross_term_interval(coeff: f64, x: Bounds, y: Bounds) -> Interval {
    spread(
        coeff,
        &[
            bound_product(x.lower, y.lower),
            bound_product(x.lower, y.upper),
            bound_product(x.upper, y.lower),
            bound_product(x.upper, y.upper),
        ],
    )
}

/// Range of `coeff * x^2`.
///
/// A square never reaches `lower * upper`, so the candidates are the two
/// endpoint squares plus zero when the range crosses it.
pub fn square_term_interval(coeff: f64, x: Bounds) -> Interval {
    let lower_sq = bound_product(x.lower, x.lower);
    let upper_sq = bound_product(x.upper, x.upper);
    if x.contains_zero() {
        spread(coeff, &[lower_sq, upper_sq, 0.0])
    } else {
        spread(coeff, &[lower_sq, upper_sq])
    }
}
