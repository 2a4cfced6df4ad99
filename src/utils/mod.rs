mod progress;
mod time;

pub use progress::MultiProgressNew;
pub use time::{human_duration, ratio, start_of_today};
