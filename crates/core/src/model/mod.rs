mod mode;
mod sample;
mod session;

pub use mode::{DEFAULT_QUESTIONS, DateRange, DrillMode, clamp_weekdays_quantity};
pub use sample::{AnsweredSample, Blank, DateSample, UserAnswer};
pub use session::{Session, SessionError};
