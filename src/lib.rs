//! Skinnable progress-ring and option-list widgets for iced
//!
//! # Architecture
//!
//! The crate follows a small layered layout:
//!
//! - **Primitives** (`primitives`): low-level `canvas::Program`
//!   implementations ([`CircularProgressBar`])
//! - **Widgets** (`widgets`): composable element builders ([`OptionList`])
//! - **Support** (`animation`, `icons`, `theme`): spring selection
//!   animation, embedded icons, default palette
//!
//! Both widgets are pure functions of caller-owned state: they read the
//! bound values while building the view and hand back full replacement
//! values through messages, never mutating anything in place.

pub mod animation;
pub mod icons;
pub mod primitives;
pub mod theme;
pub mod widgets;

pub use animation::SelectionAnimation;
pub use primitives::{CircularProgressBar, circular_progress};
pub use widgets::{OptionId, OptionItem, OptionList};
