//! Terminal user interface.
//!
//! [`AppComponent`] owns the contexts, the router and every page; the
//! renderer drives it from terminal events.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod pages;
pub mod renderer;
pub mod styles;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::{run_app, run_app_with_service};
