use serde::{Deserialize, Serialize};

//
// ─── BUCKETS ───────────────────────────────────────────────────────────────────
//

/// One of seven ordered position-strength labels, first player's perspective.
///
/// Ordered from worst to best for the first player; `rank` maps the variants
/// onto `-3..=3` for diff arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    BigDisadvantage,
    Disadvantage,
    SlightDisadvantage,
    Even,
    SlightAdvantage,
    Advantage,
    BigAdvantage,
}

impl Bucket {
    /// All buckets in ascending rank order.
    pub const ALL: [Bucket; 7] = [
        Bucket::BigDisadvantage,
        Bucket::Disadvantage,
        Bucket::SlightDisadvantage,
        Bucket::Even,
        Bucket::SlightAdvantage,
        Bucket::Advantage,
        Bucket::BigAdvantage,
    ];

    /// Integer rank in `-3..=3`; negative favors the second player.
    #[must_use]
    pub fn rank(self) -> i32 {
        match self {
            Bucket::BigDisadvantage => -3,
            Bucket::Disadvantage => -2,
            Bucket::SlightDisadvantage => -1,
            Bucket::Even => 0,
            Bucket::SlightAdvantage => 1,
            Bucket::Advantage => 2,
            Bucket::BigAdvantage => 3,
        }
    }

    /// Japanese display label, as used by the quiz dataset and share text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bucket::BigDisadvantage => "先手大劣勢",
            Bucket::Disadvantage => "先手劣勢",
            Bucket::SlightDisadvantage => "先手不利",
            Bucket::Even => "互角",
            Bucket::SlightAdvantage => "先手有利",
            Bucket::Advantage => "先手優勢",
            Bucket::BigAdvantage => "先手大優勢",
        }
    }
}

/// Centipawn cut points separating the seven buckets.
///
/// The negative cuts are inclusive upper bounds and the positive cuts are
/// inclusive lower bounds, so the even band is the open interval
/// `(slight_disadvantage, slight_advantage)`. Defaults follow the quiz data:
/// ≤ −1600 / ≤ −900 / ≤ −400 / (−400, 400) / ≥ 400 / ≥ 900 / ≥ 1400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCuts {
    pub big_disadvantage: i32,
    pub disadvantage: i32,
    pub slight_disadvantage: i32,
    pub slight_advantage: i32,
    pub advantage: i32,
    pub big_advantage: i32,
}

impl Default for BucketCuts {
    fn default() -> Self {
        Self {
            big_disadvantage: -1600,
            disadvantage: -900,
            slight_disadvantage: -400,
            slight_advantage: 400,
            advantage: 900,
            big_advantage: 1400,
        }
    }
}

impl BucketCuts {
    /// Classify an evaluation into its bucket. Total and monotonic in `cp`.
    #[must_use]
    pub fn classify(&self, cp: i32) -> Bucket {
        if cp <= self.big_disadvantage {
            Bucket::BigDisadvantage
        } else if cp <= self.disadvantage {
            Bucket::Disadvantage
        } else if cp <= self.slight_disadvantage {
            Bucket::SlightDisadvantage
        } else if cp < self.slight_advantage {
            Bucket::Even
        } else if cp < self.advantage {
            Bucket::SlightAdvantage
        } else if cp < self.big_advantage {
            Bucket::Advantage
        } else {
            Bucket::BigAdvantage
        }
    }

    /// True when the cuts are strictly increasing.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let cuts = [
            self.big_disadvantage,
            self.disadvantage,
            self.slight_disadvantage,
            self.slight_advantage,
            self.advantage,
            self.big_advantage,
        ];
        cuts.windows(2).all(|pair| pair[0] < pair[1])
    }
}
