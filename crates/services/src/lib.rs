#![forbid(unsafe_code)]

//! Session orchestration for the position-evaluation quiz: the asynchronous
//! dataset loader, the seeded question sampler, the session state machine,
//! and the loop service tying them together. All rendering stays outside;
//! this crate only hands plain data to whatever presents it.

pub mod error;
pub mod loader;
pub mod sessions;

pub use keisei_core::Clock;

pub use error::{LoaderError, SessionError};
pub use loader::{DatasetLoader, HttpDatasetLoader, InMemoryLoader, Manifest};

pub use sessions::{
    QuizLoopService, QuizSession, SessionAnswerResult, SessionPlan, SessionProgress,
    SessionSampler, SessionView,
};
