pub mod engine;
pub mod filters;

pub use engine::{ScheduleQuery, ScheduleSearchEngine};
pub use filters::{DayPart, SearchFilters};
