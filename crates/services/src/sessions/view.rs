use keisei_core::model::Question;
use keisei_core::scoring::ScoreResult;

use super::service::QuizSession;

/// Presentation-agnostic snapshot of a session after a transition.
///
/// This is intentionally **not** a UI view-model: no layout, no styling
/// assumptions. It carries exactly what a presentation layer needs to render
/// the current step: the question (or none, once complete) and the
/// position within the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Zero-based index of the question awaiting an answer.
    pub index: usize,
    pub total: usize,
    pub question: Option<Question>,
    pub is_complete: bool,
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            index: session.current_index(),
            total: session.total_questions(),
            question: session.current_question().cloned(),
            is_complete: session.is_complete(),
        }
    }
}

/// Plain-text share summary for a finished session.
///
/// The sharing mechanism (URL-encoding, platform endpoints) is the caller's
/// concern; this only assembles the text.
#[must_use]
pub fn share_text(result: &ScoreResult) -> String {
    match result {
        ScoreResult::Numeric(report) => format!(
            "【評価値クイズ】\n精度スコア: {:.1} / 100点\n傾向: {}\n段位: {}\n#将棋 #評価値クイズ",
            report.score, report.tendency, report.rank
        ),
        ScoreResult::Buckets(report) => format!(
            "【形勢判断診断】\n精度: {:.1} / {:.1}点\n傾向: {} ({:+.1})\n#将棋 #評価値クイズ",
            report.total_points, report.max_points, report.tendency, report.tendency_stat
        ),
    }
}
