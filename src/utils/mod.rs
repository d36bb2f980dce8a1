//! Utility functions and timer primitives.

pub mod datetime;
pub mod debounce;
pub mod telegram;
pub mod timer;

pub use debounce::Debouncer;
pub use timer::Countdown;
