//! Draw probability engine.
//!
//! Computes the chance that at least one studied topic comes out of a
//! lottery of `n` balls drawn without replacement from `N` topics, `k` of
//! which the candidate has studied (hypergeometric distribution):
//!
//! ```text
//! P(X >= 1) = 1 - C(N - k, n) / C(N, n)
//! ```
//!
//! Binomial coefficients are computed exactly with [`BigUint`]; only the
//! final ratio is converted to `f64`.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::InvalidParameter;

/// Bit width both operands are shifted down to before the final division,
/// keeping them well inside the `f64` exponent range.
const RATIO_BITS: u64 = 960;

/// The `(N, k, n)` triple describing one lottery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawParameters {
    /// N: size of the topic pool.
    pub total_topics: i64,
    /// k: topics the candidate has mastered.
    pub studied_topics: i64,
    /// n: balls drawn in the lottery.
    pub balls_drawn: i64,
}

impl DrawParameters {
    pub fn new(total_topics: i64, studied_topics: i64, balls_drawn: i64) -> Self {
        Self {
            total_topics,
            studied_topics,
            balls_drawn,
        }
    }

    /// Check every precondition without computing anything.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        let (total, studied, drawn) = (self.total_topics, self.studied_topics, self.balls_drawn);
        if total <= 0 {
            return Err(InvalidParameter::NonPositiveTotal { total });
        }
        if studied < 0 {
            return Err(InvalidParameter::NegativeStudied { studied });
        }
        if drawn <= 0 {
            return Err(InvalidParameter::NonPositiveDrawn { drawn });
        }
        if studied > total {
            return Err(InvalidParameter::StudiedExceedsTotal { studied, total });
        }
        if drawn > total {
            return Err(InvalidParameter::DrawnExceedsTotal { drawn, total });
        }
        Ok(())
    }

    pub fn probability(&self) -> Result<f64, InvalidParameter> {
        compute_probability(self.total_topics, self.studied_topics, self.balls_drawn)
    }

    /// Share of the syllabus studied, 0.0 ..= 1.0.
    pub fn coverage(&self) -> f64 {
        if self.total_topics <= 0 {
            return 0.0;
        }
        (self.studied_topics.max(0) as f64 / self.total_topics as f64).min(1.0)
    }
}

/// Probability that at least one studied topic is drawn.
///
/// # Errors
///
/// Returns the [`InvalidParameter`] variant of the first violated
/// precondition, checked in the order: `N > 0`, `k >= 0`, `n > 0`,
/// `k <= N`, `n <= N`.
pub fn compute_probability(
    total_topics: i64,
    studied_topics: i64,
    balls_drawn: i64,
) -> Result<f64, InvalidParameter> {
    DrawParameters::new(total_topics, studied_topics, balls_drawn).validate()?;

    if studied_topics == 0 {
        return Ok(0.0);
    }

    let not_studied = total_topics - studied_topics;
    // Pigeonhole: more balls than unstudied topics forces a studied one.
    if studied_topics == total_topics || balls_drawn > not_studied {
        return Ok(1.0);
    }

    // All three values are validated positive and bounded by N here.
    let none_studied = binomial(not_studied as u64, balls_drawn as u64);
    let all_draws = binomial(total_topics as u64, balls_drawn as u64);

    Ok(1.0 - ratio_to_f64(&none_studied, &all_draws))
}

/// Exact binomial coefficient `C(a, b)`; zero when `b > a`.
pub fn binomial(a: u64, b: u64) -> BigUint {
    if b > a {
        return BigUint::zero();
    }
    let b = b.min(a - b);
    let mut acc = BigUint::one();
    for i in 1..=b {
        // Each partial product is C(a - b + i, i), so the division is exact.
        acc = acc * BigUint::from(a - b + i) / BigUint::from(i);
    }
    acc
}

/// `num / den` as `f64` for `num <= den`, finite for arbitrarily large operands.
fn ratio_to_f64(num: &BigUint, den: &BigUint) -> f64 {
    if den.is_zero() {
        return 0.0;
    }
    let shift = den.bits().saturating_sub(RATIO_BITS);
    let n = (num >> shift).to_f64().unwrap_or(0.0);
    let d = (den >> shift).to_f64().unwrap_or(f64::INFINITY);
    n / d
}

/// Display band for a computed probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
    Critical,
}

impl ProbabilityTier {
    pub fn classify(probability: f64) -> Self {
        if probability >= 0.75 {
            ProbabilityTier::High
        } else if probability >= 0.50 {
            ProbabilityTier::Medium
        } else if probability >= 0.25 {
            ProbabilityTier::Low
        } else {
            ProbabilityTier::Critical
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProbabilityTier::High => "Excellent odds, you are well covered.",
            ProbabilityTier::Medium => "Moderate odds, more than half in your favour.",
            ProbabilityTier::Low => "Low odds, consider studying more topics.",
            ProbabilityTier::Critical => "Very high risk, widen your studied topics.",
        }
    }
}
