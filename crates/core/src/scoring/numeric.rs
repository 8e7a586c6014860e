use std::collections::HashMap;

use crate::model::{Answer, Question, QuestionId};
use crate::scoring::config::{band_label, rank_title, ConfigError, ScoringConfig};

//
// ─── NUMERIC (SLIDER) MODE ─────────────────────────────────────────────────────
//

/// Per-question outcome in numeric mode.
///
/// An unanswered question keeps `guess_cp`, `raw_diff` and
/// `weighted_abs_diff` as `None`; it is reported as "no answer", never
/// coerced into a zero diff.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericOutcome {
    pub question_id: QuestionId,
    pub truth_cp: i32,
    pub guess_cp: Option<i32>,
    /// Signed error `guess − truth`.
    pub raw_diff: Option<i64>,
    /// `|raw_diff|` scaled by the blowout-dampening weight.
    pub weighted_abs_diff: Option<f64>,
}

/// Aggregate report for a completed numeric-mode session.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericReport {
    pub outcomes: Vec<NumericOutcome>,
    /// Aggregate accuracy in `[0, 100]`, rounded to one decimal.
    pub score: f64,
    /// Mean signed diff over the answered questions.
    pub mean_signed_diff: f64,
    pub tendency: String,
    pub rank: String,
}

/// Score a completed numeric-mode answer set.
///
/// The weight `1 / (1 + (|truth| / scale)²)` forgives large misses on
/// already-lopsided positions more than on close ones. Aggregates are taken
/// over answered questions only; a session with no answers scores 0.
/// Answers of the bucket kind are treated as unanswered.
///
/// # Errors
///
/// Returns `ConfigError` when `config` fails validation.
pub fn score_numeric(
    questions: &[Question],
    answers: &HashMap<QuestionId, Answer>,
    config: &ScoringConfig,
) -> Result<NumericReport, ConfigError> {
    config.validate()?;

    let mut outcomes = Vec::with_capacity(questions.len());
    let mut weighted_sum = 0.0;
    let mut signed_sum = 0.0;
    let mut answered = 0_usize;

    for question in questions {
        let guess_cp = answers.get(question.id()).and_then(|answer| match answer {
            Answer::Eval(cp) => Some(*cp),
            Answer::Bucket(_) => None,
        });

        let outcome = match guess_cp {
            Some(guess) => {
                let raw = i64::from(guess) - i64::from(question.eval_cp());
                let truth = f64::from(question.eval_cp());
                let weight = 1.0 / (1.0 + (truth.abs() / config.weight_scale).powi(2));
                let weighted = (raw as f64).abs() * weight;

                weighted_sum += weighted;
                signed_sum += raw as f64;
                answered += 1;

                NumericOutcome {
                    question_id: question.id().clone(),
                    truth_cp: question.eval_cp(),
                    guess_cp: Some(guess),
                    raw_diff: Some(raw),
                    weighted_abs_diff: Some(weighted),
                }
            }
            None => NumericOutcome {
                question_id: question.id().clone(),
                truth_cp: question.eval_cp(),
                guess_cp: None,
                raw_diff: None,
                weighted_abs_diff: None,
            },
        };
        outcomes.push(outcome);
    }

    let (score, mean_signed_diff) = if answered > 0 {
        let mean_weighted = weighted_sum / answered as f64;
        let raw_score = (100.0 - mean_weighted / config.score_divisor).clamp(0.0, 100.0);
        ((raw_score * 10.0).round() / 10.0, signed_sum / answered as f64)
    } else {
        (0.0, 0.0)
    };

    let tendency = band_label(&config.numeric_tendency, mean_signed_diff);
    let rank = rank_title(&config.rank_table, score);

    Ok(NumericReport {
        outcomes,
        score,
        mean_signed_diff,
        tendency,
        rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, eval_cp: i32) -> Question {
        let image = format!("img/{id}.png");
        let thumb = format!("img/{id}_t.png");
        Question::new(QuestionId::new(id), image, thumb, eval_cp)
    }

    fn answers(pairs: &[(&str, i32)]) -> HashMap<QuestionId, Answer> {
        pairs
            .iter()
            .map(|(id, cp)| (QuestionId::new(*id), Answer::eval(*cp)))
            .collect()
    }

    #[test]
    fn worked_example_scores_ninety_seven() {
        // truths +500/-2000, guesses +600/-1800:
        // weights 0.8 and 0.2, weighted diffs 80 and 40, mean 60, 100 - 3 = 97.
        let questions = vec![question("a", 500), question("b", -2000)];
        let answers = answers(&[("a", 600), ("b", -1800)]);

        let report = score_numeric(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.score, 97.0);
        assert_eq!(report.rank, "九段");
        assert_eq!(report.mean_signed_diff, 150.0);
        assert_eq!(report.tendency, "フラット");
        assert_eq!(report.outcomes[0].raw_diff, Some(100));
        assert_eq!(report.outcomes[0].weighted_abs_diff, Some(80.0));
        assert_eq!(report.outcomes[1].raw_diff, Some(200));
        assert_eq!(report.outcomes[1].weighted_abs_diff, Some(40.0));
    }

    #[test]
    fn perfect_guesses_score_one_hundred() {
        let questions = vec![question("a", 500), question("b", -1200), question("c", 0)];
        let answers = answers(&[("a", 500), ("b", -1200), ("c", 0)]);

        let report = score_numeric(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.score, 100.0);
        assert_eq!(report.rank, "名人");
        assert_eq!(report.tendency, "フラット");
    }

    #[test]
    fn score_is_clamped_to_valid_range() {
        let questions = vec![question("a", 0)];
        let answers = answers(&[("a", 3000)]);

        let report = score_numeric(&questions, &answers, &ScoringConfig::default()).unwrap();

        assert_eq!(report.score, 0.0);
        assert_eq!(report.rank, "五級");
    }

    #[test]
    fn score_stays_in_range_across_guess_grid() {
        let questions = vec![question("a", 800), question("b", -2400)];
        let config = ScoringConfig::default();
        let mut guess = -3000;
        while guess <= 3000 {
            let answers = answers(&[("a", guess), ("b", -guess)]);
            let report = score_numeric(&questions, &answers, &config).unwrap();
            assert!((0.0..=100.0).contains(&report.score), "guess={guess}");
            guess += 250;
        }
    }

    #[test]
    fn tendency_tracks_mean_signed_diff() {
        let config = ScoringConfig::default();
        let questions = vec![question("a", 0)];
        let cases = [
            (1500, "超楽観派"),
            (1000, "楽観派"),
            (600, "楽観派"),
            (250, "やや楽観派"),
            (200, "フラット"),
            (0, "フラット"),
            (-200, "フラット"),
            (-250, "やや悲観派"),
            (-400, "やや悲観派"),
            (-600, "悲観派"),
            (-1000, "悲観派"),
            (-1500, "超悲観派"),
        ];
        for (guess, expected) in cases {
            let report = score_numeric(&questions, &answers(&[("a", guess)]), &config).unwrap();
            assert_eq!(report.tendency, expected, "guess={guess}");
        }
    }

    #[test]
    fn unanswered_questions_are_reported_not_coerced() {
        let questions = vec![question("a", 500), question("b", -2000)];
        let answers = answers(&[("a", 600)]);

        let report = score_numeric(&questions, &answers, &ScoringConfig::default()).unwrap();

        // Only the answered question contributes: weighted diff 80, 100 - 4 = 96.
        assert_eq!(report.score, 96.0);
        assert_eq!(report.mean_signed_diff, 100.0);
        assert_eq!(report.outcomes[1].guess_cp, None);
        assert_eq!(report.outcomes[1].raw_diff, None);
        assert_eq!(report.outcomes[1].weighted_abs_diff, None);
    }

    #[test]
    fn fully_unanswered_session_scores_zero() {
        let questions = vec![question("a", 500)];
        let report =
            score_numeric(&questions, &HashMap::new(), &ScoringConfig::default()).unwrap();
        assert_eq!(report.score, 0.0);
        assert_eq!(report.mean_signed_diff, 0.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let questions = vec![question("a", 0)];
        let mut config = ScoringConfig::default();
        config.rank_table.clear();
        let err = score_numeric(&questions, &answers(&[("a", 0)]), &config).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRankTable));
    }
}
