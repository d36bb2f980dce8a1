//! Core UI functionality for the Learnist application.
//!
//! The UI follows a component-based architecture:
//!
//! 1. **Components** implement the [`Component`] trait for consistent
//!    rendering and key handling
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** bundles the shared services handed to the composition
//!    root at startup
//! 4. **Events** are produced by the [`EventHandler`]
//! 5. Background fetches and mutations run on the [`TaskManager`] and
//!    report back as actions, applied in completion order

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Screen, ToastSeverity};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
