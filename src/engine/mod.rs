pub mod accumulator;
pub mod runner;
