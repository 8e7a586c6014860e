use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz position with its pre-computed engine evaluation.
///
/// The wire shape matches the dataset shard records:
/// `{"id": "...", "large": "...", "thumb": "...", "aiCp": 500}`.
/// `eval_cp` is a centipawn-like score from the first player's perspective,
/// conventionally displayed within ±3000 but unbounded in storage. Questions
/// are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "large")]
    image_large: String,
    #[serde(rename = "thumb")]
    image_thumb: String,
    #[serde(rename = "aiCp")]
    eval_cp: i32,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        image_large: impl Into<String>,
        image_thumb: impl Into<String>,
        eval_cp: i32,
    ) -> Self {
        Self {
            id,
            image_large: image_large.into(),
            image_thumb: image_thumb.into(),
            eval_cp,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Dataset-relative path of the full-size board image.
    #[must_use]
    pub fn image_large(&self) -> &str {
        &self.image_large
    }

    /// Dataset-relative path of the thumbnail board image.
    #[must_use]
    pub fn image_thumb(&self) -> &str {
        &self.image_thumb
    }

    /// Engine evaluation in centipawns, first player's perspective.
    #[must_use]
    pub fn eval_cp(&self) -> i32 {
        self.eval_cp
    }
}
