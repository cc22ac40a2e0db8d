//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the sign-up form using ratatui and translates
//! keyboard input into form operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
