pub mod log_workout;
pub mod not_found;
