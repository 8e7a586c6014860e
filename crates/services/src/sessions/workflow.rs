use std::sync::Arc;

use tracing::info;

use keisei_core::model::{Answer, QuizMode};
use keisei_core::scoring::{ScoreResult, ScoringConfig};
use keisei_core::Clock;

use crate::error::SessionError;
use crate::loader::DatasetLoader;
use super::plan::SessionSampler;
use super::service::QuizSession;
use super::view::{share_text, SessionView};

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub view: SessionView,
    pub is_complete: bool,
    /// Present exactly when the submit completed the session.
    pub result: Option<ScoreResult>,
}

/// Orchestrates session start, answering, and restart.
///
/// Owns the clock (default seeds), the dataset loader, the sampler, and the
/// scoring configuration, so callers only deal in sessions and answers.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    loader: Arc<dyn DatasetLoader>,
    sampler: SessionSampler,
    config: ScoringConfig,
    mode: QuizMode,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, loader: Arc<dyn DatasetLoader>, mode: QuizMode) -> Self {
        Self {
            clock,
            loader,
            sampler: SessionSampler::new(),
            config: ScoringConfig::default(),
            mode,
        }
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: SessionSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Replace the default scoring tables.
    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Start a new session.
    ///
    /// `seed: None` derives a non-reproducible seed from the clock;
    /// passing an explicit seed replays the same question order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Data` when the dataset cannot be loaded and
    /// `SessionError::Empty` when it yields no questions.
    pub async fn start_session(&self, seed: Option<u32>) -> Result<QuizSession, SessionError> {
        let dataset = self.loader.load().await?;
        let seed = seed.unwrap_or_else(|| self.clock.seed_millis());
        let plan = self.sampler.sample(&dataset, seed);
        info!(seed, total = plan.total(), mode = ?self.mode, "session started");
        QuizSession::new(self.mode, plan)
    }

    /// Discard `session` and start over with a fresh seed and sample.
    ///
    /// Valid in any session state.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::start_session`].
    pub async fn restart(&self, session: QuizSession) -> Result<QuizSession, SessionError> {
        info!(seed = session.seed(), "session restarted");
        drop(session);
        self.start_session(None).await
    }

    /// Answer the current question; when that completes the session, score it.
    ///
    /// # Errors
    ///
    /// Propagates state-machine rejections from [`QuizSession::submit`] and
    /// scoring config errors.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        answer: Answer,
    ) -> Result<SessionAnswerResult, SessionError> {
        session.submit(answer)?;
        let result = if session.is_complete() {
            Some(session.score(&self.config)?)
        } else {
            None
        };
        Ok(SessionAnswerResult {
            view: SessionView::from_session(session),
            is_complete: session.is_complete(),
            result,
        })
    }

    /// Step the session back one question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AtFirstQuestion` at index 0.
    pub fn go_back(&self, session: &mut QuizSession) -> Result<SessionView, SessionError> {
        session.go_back()?;
        Ok(SessionView::from_session(session))
    }

    /// Plain-text share summary for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` before the last answer.
    pub fn share_summary(&self, session: &QuizSession) -> Result<String, SessionError> {
        let result = session.score(&self.config)?;
        Ok(share_text(&result))
    }
}
