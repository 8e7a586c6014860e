use std::collections::HashMap;
use std::fmt;

use keisei_core::model::{Answer, Question, QuestionId, QuizMode};
use keisei_core::scoring::{self, ScoreResult, ScoringConfig};

use crate::error::SessionError;
use super::plan::SessionPlan;
use super::progress::SessionProgress;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: a fixed question list, the current index, and the
/// answers recorded so far.
///
/// The session is in an answering state while `0 <= current < total` and
/// complete once every question has been submitted. Going back never clears
/// the answer being returned to; resubmitting overwrites it. Restarting is
/// not a transition on this value; the loop service builds a brand-new
/// session and this one is discarded.
pub struct QuizSession {
    mode: QuizMode,
    seed: u32,
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<QuestionId, Answer>,
}

impl QuizSession {
    /// Create a session from a sampled plan.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the plan holds no questions.
    pub fn new(mode: QuizMode, plan: SessionPlan) -> Result<Self, SessionError> {
        if plan.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            mode,
            seed: plan.seed,
            questions: plan.questions,
            current: 0,
            answers: HashMap::new(),
        })
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Seed that produced this session's question order.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have been submitted.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    /// Zero-based index of the question currently awaiting an answer.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The recorded answer for a question, if any.
    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&Answer> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// Overwrites any answer previously recorded for this question (after a
    /// go-back). Numeric guesses are clamped to the slider range.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if every question is already
    /// answered, or `SessionError::AnswerMode` if the answer kind does not
    /// match the session mode.
    pub fn submit(&mut self, answer: Answer) -> Result<(), SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if answer.mode() != self.mode {
            return Err(SessionError::AnswerMode);
        }
        let answer = match answer {
            Answer::Eval(cp) => Answer::eval(cp),
            other => other,
        };
        self.answers.insert(question.id().clone(), answer);
        self.current += 1;
        Ok(())
    }

    /// Step back to the previous question.
    ///
    /// The answer recorded for that question is kept until the next submit
    /// overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AtFirstQuestion` when already at index 0.
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        if self.current == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        self.current -= 1;
        Ok(())
    }

    /// Score the completed session.
    ///
    /// Pure with respect to the session: calling it repeatedly yields the
    /// same report; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` before the last submit, or a
    /// config error from scoring.
    pub fn score(&self, config: &ScoringConfig) -> Result<ScoreResult, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        let result = match self.mode {
            QuizMode::Slider => ScoreResult::Numeric(scoring::score_numeric(
                &self.questions,
                &self.answers,
                config,
            )?),
            QuizMode::Buckets => ScoreResult::Buckets(scoring::score_buckets(
                &self.questions,
                &self.answers,
                config,
            )?),
        };
        Ok(result)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("mode", &self.mode)
            .field("seed", &self.seed)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
