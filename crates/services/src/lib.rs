#![forbid(unsafe_code)]

pub mod drill;
pub mod error;
pub mod sampler;
pub mod scorer;

pub use drill_core::Clock;

pub use drill::{AnswerSource, DrillService, ScriptedAnswers};
pub use error::{DrillError, SamplerError, ScorerError};
pub use sampler::DateSampler;
pub use scorer::SessionScorer;
