pub mod prayer_times;
pub mod time;

pub use prayer_times::*;
pub use time::*;
