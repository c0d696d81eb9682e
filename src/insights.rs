//! Career-insight copy and synthetic chart data.
//!
//! Everything here is decoration around the predicted scalar: a percentile
//! blurb, a typical salary range, a growth projection, a sampled salary
//! distribution for the histogram, and a random career tip. All randomness
//! comes from a caller-supplied generator so the output is reproducible
//! under a seeded rng; the library never touches a global generator.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Fixed tip pool the presentation layer samples from.
pub const CAREER_TIPS: &[&str] = &[
    "Negotiate total compensation, not just base salary.",
    "Certifications in your sector can move you up a pay band.",
    "Switching roles every few years tends to outpace annual raises.",
    "Urban markets pay more, but adjust for cost of living.",
    "An advanced degree pays off most early in a career.",
];

/// Relative spread of the synthetic salary distribution.
const DISTRIBUTION_SPREAD: f64 = 0.2;
/// Salary treated as the 100th percentile for the donut figure.
const PERCENTILE_CEILING: f64 = 200_000.0;

/// Canned insight figures derived from one predicted salary.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerInsights {
    /// "Top N%" percentile rank, drawn from 60..85.
    pub percentile_rank: u32,
    /// Lower bound of the typical range (0.8x the estimate).
    pub typical_low: f64,
    /// Upper bound of the typical range (1.2x the estimate).
    pub typical_high: f64,
    /// Five-year growth projection (1.3x the estimate).
    pub five_year_growth: f64,
}

impl CareerInsights {
    pub fn generate<R: Rng + ?Sized>(salary: f64, rng: &mut R) -> Self {
        CareerInsights {
            percentile_rank: rng.gen_range(60..85),
            typical_low: salary * 0.8,
            typical_high: salary * 1.2,
            five_year_growth: salary * 1.3,
        }
    }
}

/// Sample `count` points from a normal centered on the estimate with a
/// spread proportional to it, for the salary histogram.
///
/// A non-finite estimate has no well-formed spread; the samples then
/// collapse to the estimate itself.
pub fn salary_distribution<R: Rng + ?Sized>(salary: f64, count: usize, rng: &mut R) -> Vec<f64> {
    match Normal::new(salary, salary.abs() * DISTRIBUTION_SPREAD) {
        Ok(normal) => (0..count).map(|_| normal.sample(rng)).collect(),
        Err(_) => vec![salary; count],
    }
}

/// Percentile position of a salary against the fixed ceiling, clamped to
/// 1..=100 for the donut chart.
pub fn salary_percentile(salary: f64) -> u32 {
    let raw = (salary / PERCENTILE_CEILING * 100.0) as i64;
    raw.clamp(1, 100) as u32
}

/// One tip from the fixed pool.
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CAREER_TIPS.choose(rng).copied().unwrap_or(CAREER_TIPS[0])
}
