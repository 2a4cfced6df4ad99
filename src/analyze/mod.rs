pub mod analyzer;
mod collector;
mod model;
pub mod multi_assign;
mod time_log;

pub use analyzer::Analyzer;
pub use collector::collect;
pub use model::*;
pub use time_log::{fetch_time_log, TimeLogEntry};
