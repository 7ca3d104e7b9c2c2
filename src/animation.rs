//! Spring animation state for selection toggles using iced_anim
//!
//! iced has no ambient animation context, so the spring state lives with the
//! caller: feed selection changes in from `update`, tick on animation frames,
//! and read per-key progress back while building the view.

use std::time::Instant;

use iced_anim::Animated;
use iced_anim::spring::Motion;

fn spring(value: f32) -> Animated<f32> {
    Animated::spring(value, Motion::SMOOTH)
}

/// Exclusive selection animation manager.
///
/// At most one key is selected at a time, so only two springs are tracked:
/// the selected key animating toward 1 and the most recently deselected key
/// animating back toward 0. Every other key reports a progress of 0.
#[derive(Debug)]
pub struct SelectionAnimation<K: Eq + Clone> {
    /// Currently selected key
    selected_key: Option<K>,
    /// Spring for the selected key (toward 1)
    selected: Animated<f32>,
    /// Key that just lost the selection
    clearing_key: Option<K>,
    /// Spring for the cleared key (toward 0)
    clearing: Animated<f32>,
}

impl<K: Eq + Clone> Default for SelectionAnimation<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Clone> SelectionAnimation<K> {
    pub fn new() -> Self {
        Self {
            selected_key: None,
            selected: spring(0.0),
            clearing_key: None,
            clearing: spring(0.0),
        }
    }

    /// Record a selection change coming out of the caller's `update`.
    ///
    /// The previously selected key starts springing back toward 0 from
    /// wherever its spring currently sits; the new key starts toward 1.
    /// Passing the current selection again is a no-op.
    pub fn set_selected(&mut self, key: Option<K>) {
        if self.selected_key == key {
            return;
        }

        if let Some(old) = self.selected_key.take() {
            self.clearing_key = Some(old);
            self.clearing = spring(*self.selected.value());
            self.clearing.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.selected_key = Some(new_key);
            self.selected = spring(0.0);
            self.selected.update(1.0.into());
        }

        tracing::trace!(
            has_selection = self.selected_key.is_some(),
            "selection animation retargeted"
        );
    }

    /// Animated progress for a key, 0.0 (unselected) to 1.0 (selected).
    pub fn progress(&self, key: &K) -> f32 {
        if self.selected_key.as_ref() == Some(key) {
            *self.selected.value()
        } else if self.clearing_key.as_ref() == Some(key) {
            *self.clearing.value()
        } else {
            0.0
        }
    }

    /// Interpolate between two values by a key's progress.
    pub fn blend(&self, key: &K, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress(key)
    }

    /// Whether either spring still has distance to cover.
    pub fn is_animating(&self) -> bool {
        self.selected.is_animating() || self.clearing.is_animating()
    }

    /// Advance both springs; call once per animation frame.
    pub fn tick(&mut self, now: Instant) {
        self.selected.tick(now);
        self.clearing.tick(now);
    }
}
