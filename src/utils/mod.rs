pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{format_km, format_pace};
pub use time::{format_clock, format_long};
