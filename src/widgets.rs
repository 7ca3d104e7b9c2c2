//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI
//! patterns with generic Message types.

pub mod option_list;

pub use option_list::{OptionId, OptionItem, OptionList};
