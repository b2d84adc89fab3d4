//! Input model: the drag state machine and the actions handed back to the host.
//!
//! The controller never touches the DOM. When an event changes what the host
//! must listen for, or a debounced call needs a timer, the handler returns an
//! [`Action`] and the host carries it out.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Instructions returned from input handlers for the host to carry out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Start delivering pointer-move events (a drag began).
    SubscribePointerMove,
    /// Stop delivering pointer-move events (the drag ended).
    UnsubscribePointerMove,
    /// Call [`crate::controller::Controller::poll`] at `at_ms`.
    ScheduleFlush { at_ms: f64 },
}

/// Gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The topmost item is following the pointer.
    Dragging {
        /// Pointer position at the previous applied event.
        anchor: Point,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Last applied pointer position, while dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }

    /// Start following the pointer from `anchor`. Replaces any running drag.
    pub fn begin(&mut self, anchor: Point) {
        *self = Self::Dragging { anchor };
    }

    /// Re-anchor at `pt` and return the delta from the previous anchor.
    /// `None` while idle.
    pub fn advance(&mut self, pt: Point) -> Option<(f64, f64)> {
        let Self::Dragging { anchor } = self else {
            return None;
        };
        let delta = pt.delta_from(*anchor);
        *anchor = pt;
        Some(delta)
    }

    /// Go idle. Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}
