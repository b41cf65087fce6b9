#![forbid(unsafe_code)]

pub mod model;
pub mod time;
pub mod weekday;

pub use time::Clock;
