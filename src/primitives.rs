//! Primitive UI elements - atomic building blocks
//!
//! The lowest-level components, implementing iced's `canvas::Program` trait
//! directly.
//!
//! # Design Principles
//!
//! - **Generic Message types**: no coupling to any application
//! - **Self-contained**: each primitive derives its geometry from the bounds
//!   it is given
//! - **Reusable**: composed by widgets or embedded directly

pub mod circular_progress;

pub use circular_progress::{CircularProgressBar, circular_progress};
