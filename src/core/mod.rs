//! Core application primitives (scan orchestration, scheduling)

pub mod scanner;
pub mod scheduler;

pub use scanner::*;
pub use scheduler::*;
