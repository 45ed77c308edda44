// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbitration: who owns vertical touch movement, the sheet drag or the inner scroll.
//!
//! ## States
//!
//! [`GestureArbiter`] holds a single authoritative [`GestureOwner`]:
//!
//! - [`GestureOwner::Drag`]: drag deltas resize the sheet; the inner scroll view is disabled.
//! - [`GestureOwner::Scroll`]: drag deltas are ignored; the inner content scrolls normally.
//!
//! ## Transitions
//!
//! - Scroll offset `<= 0` (content at its top, or overscrolled) → `Drag`.
//! - Scroll offset `> 0` → `Scroll`.
//! - A settle (release, programmatic selection, or first layout) re-derives the owner
//!   through [`GestureArbiter::settle_at`]: landing exactly on the largest detent → `Scroll`,
//!   so a following downward swipe scrolls the content instead of shrinking the sheet.
//!   Landing anywhere else → `Drag`, unless the content was last reported scrolled down.
//!
//! The initial owner is `Scroll` when the sheet starts at its largest detent and `Drag`
//! otherwise.
//!
//! ```
//! use understory_sheet::arbitration::{GestureArbiter, GestureOwner};
//!
//! let mut arb = GestureArbiter::new(false);
//! let owners: Vec<_> = [5.0, 2.0, -3.0, -1.0]
//!     .into_iter()
//!     .map(|o| arb.on_scroll_offset(o).owner)
//!     .collect();
//! assert_eq!(
//!     owners,
//!     [GestureOwner::Scroll, GestureOwner::Scroll, GestureOwner::Drag, GestureOwner::Drag]
//! );
//! ```

/// Which input source currently consumes vertical movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureOwner {
    /// The inner content scrolls; the sheet ignores drag deltas.
    Scroll,
    /// The sheet drag resizes the sheet; inner scrolling is disabled.
    Drag,
}

/// Optional arbitration behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArbitrationPolicy {
    /// When the scroll offset crosses from positive to `<= 0`, pin the selected detent
    /// to the largest one (snap to full height when the user scrolls content back up).
    ///
    /// Off by default.
    pub pin_largest_on_top: bool,
    /// A negative (overscrolled) offset pulls the sheet down by that amount, bounded below
    /// by the minimum height, and reselects the nearest detent without snapping.
    ///
    /// On by default.
    pub overscroll_resizes: bool,
}

impl Default for ArbitrationPolicy {
    fn default() -> Self {
        Self {
            pin_largest_on_top: false,
            overscroll_resizes: true,
        }
    }
}

/// Result of feeding one scroll offset to the arbiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollTransition {
    /// Owner before the report.
    pub previous: GestureOwner,
    /// Owner after the report.
    pub owner: GestureOwner,
    /// The offset went from positive to `<= 0` with this report.
    pub reached_top: bool,
}

impl ScrollTransition {
    /// Returns `true` if ownership changed.
    #[inline]
    pub fn changed(&self) -> bool {
        self.previous != self.owner
    }
}

/// Two-state machine arbitrating between sheet drag and inner scroll.
///
/// Also tracks whether a drag gesture is in flight, so that only an explicit
/// end-of-gesture after an accepted drag triggers detent resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureArbiter {
    owner: GestureOwner,
    last_offset: Option<f64>,
    dragging: bool,
}

impl GestureArbiter {
    /// Create an arbiter. `starts_at_largest` selects the initial owner.
    pub fn new(starts_at_largest: bool) -> Self {
        Self {
            owner: if starts_at_largest {
                GestureOwner::Scroll
            } else {
                GestureOwner::Drag
            },
            last_offset: None,
            dragging: false,
        }
    }

    /// Current owner.
    #[inline]
    pub fn owner(&self) -> GestureOwner {
        self.owner
    }

    /// Returns `true` when drag deltas resize the sheet.
    #[inline]
    pub fn drag_enabled(&self) -> bool {
        self.owner == GestureOwner::Drag
    }

    /// Last scroll offset reported, if any.
    #[inline]
    pub fn last_offset(&self) -> Option<f64> {
        self.last_offset
    }

    /// Returns `true` while an accepted drag gesture is in flight.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed an inner-scroll offset report.
    ///
    /// Non-finite offsets are ignored and reported as an unchanged transition.
    pub fn on_scroll_offset(&mut self, offset: f64) -> ScrollTransition {
        let previous = self.owner;
        if !offset.is_finite() {
            return ScrollTransition {
                previous,
                owner: previous,
                reached_top: false,
            };
        }
        let reached_top = offset <= 0.0 && self.last_offset.is_some_and(|last| last > 0.0);
        self.owner = if offset <= 0.0 {
            GestureOwner::Drag
        } else {
            GestureOwner::Scroll
        };
        self.last_offset = Some(offset);
        if self.owner != previous {
            log::debug!("gesture owner {previous:?} -> {:?} at offset {offset}", self.owner);
        }
        ScrollTransition {
            previous,
            owner: self.owner,
            reached_top,
        }
    }

    /// A drag gesture started. Returns `false` (and ignores it) unless the drag owns input.
    pub fn begin_drag(&mut self) -> bool {
        if self.drag_enabled() {
            self.dragging = true;
        }
        self.dragging
    }

    /// A drag delta arrived. Returns `true` if it should be applied to the height.
    ///
    /// Hosts that never send an explicit start get one implicitly with the first accepted delta.
    pub fn accept_drag_delta(&mut self) -> bool {
        if self.drag_enabled() {
            self.dragging = true;
            true
        } else {
            false
        }
    }

    /// A drag gesture ended. Returns `true` if a drag was in flight and should be resolved.
    pub fn end_drag(&mut self) -> bool {
        core::mem::replace(&mut self.dragging, false)
    }

    /// The host cancelled the drag. No resolution happens.
    pub fn cancel_drag(&mut self) {
        self.dragging = false;
    }

    /// Re-derive the owner after the sheet settled at a new height.
    ///
    /// Returns `true` if the owner changed.
    pub fn settle_at(&mut self, reached_max: bool) -> bool {
        let previous = self.owner;
        self.owner = if reached_max || self.last_offset.is_some_and(|o| o > 0.0) {
            GestureOwner::Scroll
        } else {
            GestureOwner::Drag
        };
        let changed = self.owner != previous;
        if changed {
            log::debug!(
                "gesture owner {previous:?} -> {:?} after settling (max: {reached_max})",
                self.owner
            );
        }
        changed
    }
}
