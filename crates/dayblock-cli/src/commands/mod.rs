pub mod calendar;
pub mod day;
pub mod export;
pub mod note;
pub mod plan;
pub mod task;
