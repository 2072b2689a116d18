pub mod scene;
pub mod schedule;
pub mod trace;
