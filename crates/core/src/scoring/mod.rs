//! Scoring for completed sessions.
//!
//! Both modes are pure functions of the final question/answer set: scoring a
//! session twice yields the same report. Every threshold table lives in
//! [`ScoringConfig`]; nothing is hard-coded at call sites.

mod buckets;
mod config;
mod numeric;

pub use buckets::{score_buckets, BucketOutcome, BucketReport};
pub use config::{ConfigError, RankTier, ScoringConfig, TendencyBand, TendencyStat};
pub use numeric::{score_numeric, NumericOutcome, NumericReport};

/// Completed-session report for either quiz mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreResult {
    Numeric(NumericReport),
    Buckets(BucketReport),
}
