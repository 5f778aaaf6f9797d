//! Memberform - the Galal Academy membership signup form for the terminal.
//!
//! Collects a name, a YouTube channel, a Gmail address and optional
//! suggestions, validates them locally and hands them to a pluggable
//! submission transport, reporting the outcome as a toast.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the form controller, services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "memberform";
