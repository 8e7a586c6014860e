#![forbid(unsafe_code)]

//! Core domain logic for the position-evaluation quiz: question and answer
//! models, the seeded session PRNG, and the scoring engine. Everything here
//! is pure and presentation-free; IO and session orchestration live in the
//! services crate.

pub mod model;
pub mod rng;
pub mod scoring;
pub mod time;

pub use time::Clock;
