//! Core UI functionality for the studentdesk application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Application contexts and shared services
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background service calls
//!
//! Components turn key events into [`Action`]s; the root component applies
//! them to the contexts and local state, then everything re-renders.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{BackgroundKind, TaskId, TaskManager};
