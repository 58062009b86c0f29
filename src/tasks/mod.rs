//! Background Tasks Module
//!
//! Optional periodic maintenance tasks for the cache engine.

mod sweep;

pub use sweep::spawn_gc_task;
