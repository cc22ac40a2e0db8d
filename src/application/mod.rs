//! Application layer managing state and the form workflow.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the form controller, its configuration, and the screen state around it.

pub mod config;
pub mod controller;
pub mod state;

pub use config::*;
pub use controller::*;
pub use state::*;
