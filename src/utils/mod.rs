pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::format_timedelta;
pub use time::parse_timestamp;
