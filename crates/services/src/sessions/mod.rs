mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{SessionPlan, SessionSampler, SESSION_SIZE};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use view::{share_text, SessionView};
pub use workflow::{QuizLoopService, SessionAnswerResult};
