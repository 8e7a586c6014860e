mod answer;
mod bucket;
mod ids;
mod question;

pub use answer::{Answer, QuizMode, EVAL_GUESS_MAX, EVAL_GUESS_MIN};
pub use bucket::{Bucket, BucketCuts};
pub use ids::QuestionId;
pub use question::Question;
