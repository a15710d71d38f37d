//! Benchmark categories by rendering algorithm

pub mod multi_thread;
pub mod single_thread;
