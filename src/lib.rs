//! signup-tui - Terminal Sign-Up Form Library
//!
//! A terminal-based sign-up form with client-side validation, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
