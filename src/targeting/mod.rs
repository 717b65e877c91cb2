pub mod classifier;
pub mod constants;
pub mod cycling;
pub mod engine;
pub mod geometry;
pub mod strategies;
