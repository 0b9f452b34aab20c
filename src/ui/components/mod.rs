//! Reusable UI components

// Presentational primitives
pub mod button;
pub mod card;
pub mod text_input;
pub mod toggle;

// Component architecture
pub mod bottom_nav;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;

// Component exports
pub use bottom_nav::BottomNav;
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use toggle::Toggle;
