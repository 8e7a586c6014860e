use thiserror::Error;

use crate::model::BucketCuts;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("tendency band table must not be empty")]
    EmptyTendencyBands,
    #[error("tendency bands must be in descending threshold order")]
    UnorderedTendencyBands,
    #[error("rank table must not be empty")]
    EmptyRankTable,
    #[error("rank tiers must be in descending score order")]
    UnorderedRankTable,
    #[error("bucket cuts must be strictly increasing")]
    UnorderedBucketCuts,
}

/// One tendency band: applies when the tendency statistic clears `min`.
///
/// `inclusive` controls the boundary: an inclusive band matches
/// `stat >= min`, an exclusive one `stat > min`. The quiz tables need both.
/// The bucket cascade treats a mean diff of exactly -1.0 as fully
/// pessimistic (its accurate band is exclusive at the bottom), while the
/// numeric table keeps exactly +1000 out of the extreme band and exactly
/// ±200 inside the flat band.
#[derive(Debug, Clone, PartialEq)]
pub struct TendencyBand {
    pub min: f64,
    pub label: String,
    pub inclusive: bool,
}

impl TendencyBand {
    /// Band matching `stat >= min`.
    #[must_use]
    pub fn at_least(min: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            label: label.into(),
            inclusive: true,
        }
    }

    /// Band matching `stat > min`.
    #[must_use]
    pub fn above(min: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            label: label.into(),
            inclusive: false,
        }
    }

    fn admits(&self, stat: f64) -> bool {
        if self.inclusive {
            stat >= self.min
        } else {
            stat > self.min
        }
    }
}

/// One rank tier: applies when the score is at least `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTier {
    pub min: f64,
    pub title: String,
}

impl RankTier {
    #[must_use]
    pub fn new(min: f64, title: impl Into<String>) -> Self {
        Self {
            min,
            title: title.into(),
        }
    }
}

/// Statistic the bucket-mode tendency is computed from.
///
/// One quiz revision classified on the median of per-question diffs instead
/// of the mean; both remain supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TendencyStat {
    #[default]
    Mean,
    Median,
}

/// All tuning tables for both scoring modes.
///
/// Band and tier tables are ordered by descending `min`; each band carries
/// its own boundary inclusivity, rank tiers resolve as inclusive lower
/// bounds. The final entry of every table should carry
/// `f64::NEG_INFINITY` so resolution is total.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Denominator of the dampening weight `1 / (1 + (|truth| / scale)²)`.
    pub weight_scale: f64,
    /// Mean weighted error that costs one point of score, times 20.
    pub score_divisor: f64,
    /// Seven bands over the mean signed centipawn diff.
    pub numeric_tendency: Vec<TendencyBand>,
    /// Sixteen title tiers over the numeric score.
    pub rank_table: Vec<RankTier>,
    /// Centipawn cuts for bucket classification.
    pub bucket_cuts: BucketCuts,
    /// Five bands over the bucket-rank diff statistic.
    pub bucket_tendency: Vec<TendencyBand>,
    /// Mean or median bucket-diff statistic.
    pub tendency_stat: TendencyStat,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_scale: 1000.0,
            score_divisor: 20.0,
            numeric_tendency: vec![
                TendencyBand::above(1000.0, "超楽観派"),
                TendencyBand::above(400.0, "楽観派"),
                TendencyBand::above(200.0, "やや楽観派"),
                TendencyBand::at_least(-200.0, "フラット"),
                TendencyBand::at_least(-400.0, "やや悲観派"),
                TendencyBand::at_least(-1000.0, "悲観派"),
                TendencyBand::at_least(f64::NEG_INFINITY, "超悲観派"),
            ],
            rank_table: vec![
                RankTier::new(99.0, "名人"),
                RankTier::new(98.0, "竜王"),
                RankTier::new(97.0, "九段"),
                RankTier::new(95.0, "八段"),
                RankTier::new(92.0, "七段"),
                RankTier::new(88.0, "六段"),
                RankTier::new(84.0, "五段"),
                RankTier::new(80.0, "四段"),
                RankTier::new(75.0, "三段"),
                RankTier::new(70.0, "二段"),
                RankTier::new(65.0, "初段"),
                RankTier::new(60.0, "一級"),
                RankTier::new(56.0, "二級"),
                RankTier::new(53.0, "三級"),
                RankTier::new(50.0, "四級"),
                RankTier::new(f64::NEG_INFINITY, "五級"),
            ],
            bucket_cuts: BucketCuts::default(),
            bucket_tendency: vec![
                TendencyBand::at_least(1.0, "楽観派"),
                TendencyBand::at_least(0.3, "やや楽観派"),
                TendencyBand::above(-0.3, "正確派"),
                TendencyBand::above(-1.0, "やや悲観派"),
                TendencyBand::at_least(f64::NEG_INFINITY, "悲観派"),
            ],
            tendency_stat: TendencyStat::Mean,
        }
    }
}

impl ScoringConfig {
    /// Validate a (possibly customized) configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a table is empty, out of order, or the
    /// bucket cuts are not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bands(&self.numeric_tendency)?;
        validate_bands(&self.bucket_tendency)?;
        if self.rank_table.is_empty() {
            return Err(ConfigError::EmptyRankTable);
        }
        if !is_descending(self.rank_table.iter().map(|tier| tier.min)) {
            return Err(ConfigError::UnorderedRankTable);
        }
        if !self.bucket_cuts.is_ordered() {
            return Err(ConfigError::UnorderedBucketCuts);
        }
        Ok(())
    }
}

fn validate_bands(bands: &[TendencyBand]) -> Result<(), ConfigError> {
    if bands.is_empty() {
        return Err(ConfigError::EmptyTendencyBands);
    }
    if !is_descending(bands.iter().map(|band| band.min)) {
        return Err(ConfigError::UnorderedTendencyBands);
    }
    Ok(())
}

fn is_descending(mins: impl Iterator<Item = f64>) -> bool {
    let mins: Vec<f64> = mins.collect();
    mins.windows(2).all(|pair| pair[0] > pair[1])
}

/// First band whose boundary admits `stat`, falling back to the last
/// (catch-all) entry.
pub(crate) fn band_label(bands: &[TendencyBand], stat: f64) -> String {
    bands
        .iter()
        .find(|band| band.admits(stat))
        .or_else(|| bands.last())
        .map_or_else(String::new, |band| band.label.clone())
}

/// First tier whose inclusive lower bound admits `score`.
pub(crate) fn rank_title(tiers: &[RankTier], score: f64) -> String {
    tiers
        .iter()
        .find(|tier| score >= tier.min)
        .or_else(|| tiers.last())
        .map_or_else(String::new, |tier| tier.title.clone())
}
