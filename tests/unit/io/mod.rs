pub mod persistence;
pub mod progress;
