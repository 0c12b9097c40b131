pub mod city;
pub mod filters;
pub mod table;

pub use city::City;
pub use filters::{DayFilter, FilterSelection, MonthFilter};
pub use table::{TripRow, TripTable};
