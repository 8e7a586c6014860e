use crate::model::bucket::Bucket;

/// Lower bound of the numeric guess range (the slider's minimum).
pub const EVAL_GUESS_MIN: i32 = -3000;
/// Upper bound of the numeric guess range (the slider's maximum).
pub const EVAL_GUESS_MAX: i32 = 3000;

/// Which quiz variant a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// Free-form numeric guess on a centipawn slider.
    Slider,
    /// Categorical guess from the seven buckets.
    Buckets,
}

/// A submitted guess for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Numeric slider guess in centipawns.
    Eval(i32),
    /// Categorical bucket guess.
    Bucket(Bucket),
}

impl Answer {
    /// Builds a numeric guess. Out-of-range values are clamped to the slider
    /// bounds rather than rejected.
    #[must_use]
    pub fn eval(guess_cp: i32) -> Self {
        Self::Eval(guess_cp.clamp(EVAL_GUESS_MIN, EVAL_GUESS_MAX))
    }

    #[must_use]
    pub fn bucket(bucket: Bucket) -> Self {
        Self::Bucket(bucket)
    }

    /// The quiz mode this answer belongs to.
    #[must_use]
    pub fn mode(self) -> QuizMode {
        match self {
            Answer::Eval(_) => QuizMode::Slider,
            Answer::Bucket(_) => QuizMode::Buckets,
        }
    }
}
