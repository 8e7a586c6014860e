use std::collections::HashMap;

use crate::model::{Answer, Bucket, Question, QuestionId};
use crate::scoring::config::{band_label, ConfigError, ScoringConfig, TendencyStat};

//
// ─── CATEGORICAL (BUCKET) MODE ─────────────────────────────────────────────────
//

/// Per-question outcome in bucket mode.
///
/// `rank_diff` is `guess rank − truth rank`; positive means the guess was
/// optimistic for the first player. Unanswered questions keep `guess` and
/// `rank_diff` as `None` and earn zero points.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketOutcome {
    pub question_id: QuestionId,
    pub truth: Bucket,
    pub guess: Option<Bucket>,
    pub rank_diff: Option<i32>,
    /// 1.0 for an exact hit, 0.5 for one bucket off, otherwise 0.
    pub points: f64,
}

/// Aggregate report for a completed bucket-mode session.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketReport {
    pub outcomes: Vec<BucketOutcome>,
    /// Sum of per-question points; at most `max_points`.
    pub total_points: f64,
    /// One point per question.
    pub max_points: f64,
    /// Mean or median of the answered rank diffs, per config.
    pub tendency_stat: f64,
    pub tendency: String,
}

/// Score a completed bucket-mode answer set.
///
/// Answers of the numeric kind are treated as unanswered.
///
/// # Errors
///
/// Returns `ConfigError` when `config` fails validation.
pub fn score_buckets(
    questions: &[Question],
    answers: &HashMap<QuestionId, Answer>,
    config: &ScoringConfig,
) -> Result<BucketReport, ConfigError> {
    config.validate()?;

    let mut outcomes = Vec::with_capacity(questions.len());
    let mut total_points = 0.0;
    let mut diffs = Vec::new();

    for question in questions {
        let truth = config.bucket_cuts.classify(question.eval_cp());
        let guess = answers.get(question.id()).and_then(|answer| match answer {
            Answer::Bucket(bucket) => Some(*bucket),
            Answer::Eval(_) => None,
        });

        let (rank_diff, points) = match guess {
            Some(bucket) => {
                let diff = bucket.rank() - truth.rank();
                diffs.push(diff);
                (Some(diff), points_for_diff(diff))
            }
            None => (None, 0.0),
        };

        total_points += points;
        outcomes.push(BucketOutcome {
            question_id: question.id().clone(),
            truth,
            guess,
            rank_diff,
            points,
        });
    }

    let tendency_stat = match config.tendency_stat {
        TendencyStat::Mean => mean(&diffs),
        TendencyStat::Median => median(&diffs),
    };
    let tendency = band_label(&config.bucket_tendency, tendency_stat);

    Ok(BucketReport {
        outcomes,
        total_points,
        max_points: questions.len() as f64,
        tendency_stat,
        tendency,
    })
}

fn points_for_diff(diff: i32) -> f64 {
    match diff.abs() {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

fn mean(diffs: &[i32]) -> f64 {
    if diffs.is_empty() {
        return 0.0;
    }
    diffs.iter().map(|d| f64::from(*d)).sum::<f64>() / diffs.len() as f64
}

fn median(diffs: &[i32]) -> f64 {
    if diffs.is_empty() {
        return 0.0;
    }
    let mut sorted = diffs.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        f64::from(sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, eval_cp: i32) -> Question {
        let image = format!("img/{id}.png");
        let thumb = format!("img/{id}_t.png");
        Question::new(QuestionId::new(id), image, thumb, eval_cp)
    }

    fn bucket_answers(pairs: &[(&str, Bucket)]) -> HashMap<QuestionId, Answer> {
        pairs
            .iter()
            .map(|(id, bucket)| (QuestionId::new(*id), Answer::bucket(*bucket)))
            .collect()
    }

    #[test]
    fn one_bucket_off_earns_half_a_point() {
        // Truth +500 classifies as slight advantage (rank +1); guessing even
        // (rank 0) is one off.
        let questions = vec![question("a", 500)];
        let answers = bucket_answers(&[("a", Bucket::Even)]);

        let report = score_buckets(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.outcomes[0].truth, Bucket::SlightAdvantage);
        assert_eq!(report.outcomes[0].rank_diff, Some(-1));
        assert_eq!(report.outcomes[0].points, 0.5);
        assert_eq!(report.total_points, 0.5);
    }

    #[test]
    fn points_are_exactly_zero_half_or_one() {
        let questions = vec![question("a", 0)];
        let config = ScoringConfig::default();
        for bucket in Bucket::ALL {
            let answers = bucket_answers(&[("a", bucket)]);
            let report = score_buckets(&questions, &answers, &config).unwrap();
            let points = report.outcomes[0].points;
            assert!(
                points == 0.0 || points == 0.5 || points == 1.0,
                "bucket={bucket:?} points={points}"
            );
        }
    }

    #[test]
    fn total_points_cap_at_question_count() {
        let questions: Vec<Question> = (0..8)
            .map(|i| question(&format!("q{i}"), i * 300 - 1200))
            .collect();
        let config = ScoringConfig::default();
        let answers: HashMap<QuestionId, Answer> = questions
            .iter()
            .map(|q| {
                let truth = config.bucket_cuts.classify(q.eval_cp());
                (q.id().clone(), Answer::bucket(truth))
            })
            .collect();

        let report = score_buckets(&questions, &answers, &config).unwrap();

        assert_eq!(report.total_points, 8.0);
        assert_eq!(report.max_points, 8.0);
        assert_eq!(report.tendency_stat, 0.0);
        assert_eq!(report.tendency, "正確派");
    }

    #[test]
    fn mean_tendency_flags_consistent_optimism() {
        // Truths are all even; always guessing big advantage is +3 per question.
        let questions = vec![question("a", 0), question("b", 100)];
        let answers = bucket_answers(&[
            ("a", Bucket::BigAdvantage),
            ("b", Bucket::BigAdvantage),
        ]);

        let report = score_buckets(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.tendency_stat, 3.0);
        assert_eq!(report.tendency, "楽観派");
        assert_eq!(report.total_points, 0.0);
    }

    #[test]
    fn one_bucket_low_everywhere_is_fully_pessimistic() {
        // Truths classify as slight advantage; guessing even each time puts
        // the mean diff at exactly -1, which lands in the bottom band.
        let questions = vec![question("a", 500), question("b", 600)];
        let answers = bucket_answers(&[("a", Bucket::Even), ("b", Bucket::Even)]);

        let report = score_buckets(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.tendency_stat, -1.0);
        assert_eq!(report.tendency, "悲観派");
    }

    #[test]
    fn mean_diff_at_minus_point_three_reads_slightly_pessimistic() {
        // Ten questions, three guessed one bucket low: mean diff -0.3.
        let questions: Vec<Question> = (0..10)
            .map(|i| question(&format!("q{i}"), 500))
            .collect();
        let answers: HashMap<QuestionId, Answer> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let guess = if i < 3 {
                    Bucket::Even
                } else {
                    Bucket::SlightAdvantage
                };
                (q.id().clone(), Answer::bucket(guess))
            })
            .collect();

        let report = score_buckets(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.tendency_stat, -0.3);
        assert_eq!(report.tendency, "やや悲観派");
    }

    #[test]
    fn median_tendency_ignores_a_single_outlier() {
        let questions = vec![
            question("a", 0),
            question("b", 0),
            question("c", 0),
        ];
        let answers = bucket_answers(&[
            ("a", Bucket::Even),
            ("b", Bucket::Even),
            ("c", Bucket::BigAdvantage),
        ]);
        let config = ScoringConfig {
            tendency_stat: TendencyStat::Median,
            ..ScoringConfig::default()
        };

        let report = score_buckets(&questions, &answers, &config).unwrap();

        assert_eq!(report.tendency_stat, 0.0);
        assert_eq!(report.tendency, "正確派");
    }

    #[test]
    fn median_of_even_count_averages_the_middle_pair() {
        let questions = vec![question("a", 0), question("b", 0)];
        let answers = bucket_answers(&[
            ("a", Bucket::Even),
            ("b", Bucket::SlightAdvantage),
        ]);
        let config = ScoringConfig {
            tendency_stat: TendencyStat::Median,
            ..ScoringConfig::default()
        };

        let report = score_buckets(&questions, &answers, &config).unwrap();

        assert_eq!(report.tendency_stat, 0.5);
        assert_eq!(report.tendency, "やや楽観派");
    }

    #[test]
    fn unanswered_questions_earn_zero_points() {
        let questions = vec![question("a", 500), question("b", -500)];
        let answers = bucket_answers(&[("a", Bucket::SlightAdvantage)]);

        let report = score_buckets(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.total_points, 1.0);
        assert_eq!(report.outcomes[1].guess, None);
        assert_eq!(report.outcomes[1].rank_diff, None);
        assert_eq!(report.outcomes[1].points, 0.0);
        // The unanswered diff is excluded from the tendency statistic.
        assert_eq!(report.tendency_stat, 0.0);
    }
}
