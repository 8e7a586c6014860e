use keisei_core::model::Question;
use keisei_core::rng::Mulberry32;

/// Default number of questions drawn per session.
pub const SESSION_SIZE: usize = 8;

/// Selection result for a session build: the sampled questions plus the seed
/// that produced them, so a session can be replayed or shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub questions: Vec<Question>,
    pub seed: u32,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Samples a session-sized question subset with a seeded shuffle.
///
/// A Fisher–Yates pass over a copy of the dataset, driven by the session
/// PRNG, truncated to the first `min(size, len)` elements. The input dataset
/// is never mutated.
#[derive(Debug, Clone)]
pub struct SessionSampler {
    size: usize,
}

impl SessionSampler {
    #[must_use]
    pub fn new() -> Self {
        Self { size: SESSION_SIZE }
    }

    /// Override the number of questions drawn per session.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Draw the session questions from `dataset`.
    ///
    /// The same seed over the same dataset always yields the same plan.
    #[must_use]
    pub fn sample(&self, dataset: &[Question], seed: u32) -> SessionPlan {
        let mut rng = Mulberry32::new(seed);
        let mut shuffled = dataset.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = rng.next_index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled.truncate(self.size);
        SessionPlan {
            questions: shuffled,
            seed,
        }
    }
}

impl Default for SessionSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keisei_core::model::QuestionId;
    use std::collections::HashSet;

    fn dataset(len: usize) -> Vec<Question> {
        (0..len)
            .map(|i| {
                Question::new(
                    QuestionId::new(format!("q{i:03}")),
                    format!("img/q{i:03}.png"),
                    format!("img/q{i:03}_t.png"),
                    (i as i32) * 137 - 800,
                )
            })
            .collect()
    }

    #[test]
    fn same_seed_yields_identical_plans() {
        let data = dataset(20);
        let sampler = SessionSampler::new();
        let first = sampler.sample(&data, 42);
        let second = sampler.sample(&data, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_draws_eight_distinct_questions() {
        let data = dataset(20);
        let plan = SessionSampler::new().sample(&data, 7);

        assert_eq!(plan.total(), SESSION_SIZE);
        let ids: HashSet<&QuestionId> = plan.questions.iter().map(Question::id).collect();
        assert_eq!(ids.len(), SESSION_SIZE);
        for question in &plan.questions {
            assert!(data.contains(question));
        }
    }

    #[test]
    fn small_dataset_is_used_whole() {
        let data = dataset(3);
        let plan = SessionSampler::new().sample(&data, 1);
        assert_eq!(plan.total(), 3);
    }

    #[test]
    fn input_dataset_is_not_mutated() {
        let data = dataset(12);
        let before = data.clone();
        let _ = SessionSampler::new().sample(&data, 99);
        assert_eq!(data, before);
    }

    #[test]
    fn custom_size_is_honored() {
        let data = dataset(20);
        let plan = SessionSampler::new().with_size(5).sample(&data, 3);
        assert_eq!(plan.total(), 5);
    }

    #[test]
    fn empty_dataset_yields_empty_plan() {
        let plan = SessionSampler::new().sample(&[], 5);
        assert!(plan.is_empty());
    }
}
