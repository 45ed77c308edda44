// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Sheet`] driver: owns the runtime state and routes host callbacks.
//!
//! ## Event flow
//!
//! - [`Sheet::layout`] captures the container height. The first valid layout places the
//!   sheet at its selected detent; later resizes recompute the height from the selected
//!   detent immediately, without re-selecting.
//! - [`Sheet::scroll_offset_changed`] feeds the [`GestureArbiter`] and, when enabled,
//!   lets an overscroll pull the sheet down.
//! - [`Sheet::drag_changed`] resizes the sheet while the drag owns input, following the
//!   translation accumulated since the drag started.
//! - [`Sheet::drag_ended`] resolves the detent nearest to where the finger let go and
//!   commits it.
//! - [`Sheet::drag_cancelled`] leaves the height where it is.
//!
//! Every settle (release, programmatic selection, first layout) re-derives which of the drag
//! and the inner scroll owns input, so ownership never goes stale after a programmatic move.
//!
//! Each call returns [`SheetChanges`] naming the fields the rendering layer should re-read.
//! Bounds are derived from the current configuration and container height on every event,
//! so a resize or detent change is always reflected before the next delta is applied.

use kurbo::{Size, Vec2};
use understory_detent::{Detent, DetentSet};

use crate::arbitration::{GestureArbiter, GestureOwner};
use crate::config::SheetConfig;
use crate::height::{DragTrack, HeightBounds, apply_drag_delta, clamp, is_laid_out};
use crate::resolve::{Resolution, resolve_release};
use crate::types::SheetChanges;

/// Mutable runtime state of one sheet instance.
///
/// Created with the sheet, filled in by the first layout, and mutated only through [`Sheet`].
#[derive(Clone, Debug, PartialEq)]
pub struct SheetState {
    container_height: f64,
    height: f64,
    arbiter: GestureArbiter,
    drag: Option<DragTrack>,
}

impl SheetState {
    /// Height of the enclosing layout region; `0.0` until laid out.
    #[inline]
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Current sheet height in absolute units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `true` once a usable container height has been reported.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        is_laid_out(self.container_height)
    }

    /// The scroll/drag arbiter.
    #[inline]
    pub fn arbiter(&self) -> &GestureArbiter {
        &self.arbiter
    }

    /// Last inner-scroll offset reported, if any.
    #[inline]
    pub fn scroll_offset(&self) -> Option<f64> {
        self.arbiter.last_offset()
    }

    /// The drag in flight, if any.
    #[inline]
    pub fn drag_track(&self) -> Option<DragTrack> {
        self.drag
    }
}

/// A bottom sheet engine: configuration plus runtime state.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_sheet::{Detent, DetentSet, DragResponse, Sheet, SheetConfig, SheetChanges};
///
/// let mut config = SheetConfig::new(DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]));
/// config.set_drag_response(DragResponse::Direct);
/// let mut sheet = Sheet::new(config);
///
/// sheet.layout(Size::new(390.0, 800.0));
/// assert_eq!(sheet.height(), 160.0);
///
/// // Finger moves up 200 units, then lifts.
/// assert!(sheet.drag_began());
/// assert_eq!(sheet.drag_changed(Vec2::new(0.0, -200.0)), SheetChanges::HEIGHT);
/// let changes = sheet.drag_ended();
/// assert_eq!(changes, SheetChanges::HEIGHT | SheetChanges::DETENT);
/// assert_eq!(sheet.selected_detent(), Detent::Medium);
/// assert_eq!(sheet.height(), 400.0);
/// ```
#[derive(Clone, Debug)]
pub struct Sheet {
    config: SheetConfig,
    state: SheetState,
}

impl Sheet {
    /// Create a sheet. It stays at height `0.0` until the first [`Sheet::layout`].
    pub fn new(config: SheetConfig) -> Self {
        let at_largest = config.selected_detent().fraction() >= config.detents().max_fraction();
        Self {
            config,
            state: SheetState {
                container_height: 0.0,
                height: 0.0,
                arbiter: GestureArbiter::new(at_largest),
                drag: None,
            },
        }
    }

    /// Configuration.
    #[inline]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Mutable configuration, for style and behavior changes.
    ///
    /// Prefer [`Sheet::set_detents`] and [`Sheet::select_detent`] for detent changes so the
    /// height follows the selection.
    #[inline]
    pub fn config_mut(&mut self) -> &mut SheetConfig {
        &mut self.config
    }

    /// Runtime state.
    #[inline]
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Current height in absolute units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.state.height
    }

    /// Container height; `0.0` until laid out.
    #[inline]
    pub fn container_height(&self) -> f64 {
        self.state.container_height
    }

    /// Selected detent.
    #[inline]
    pub fn selected_detent(&self) -> Detent {
        self.config.selected_detent()
    }

    /// Who owns vertical movement.
    #[inline]
    pub fn owner(&self) -> GestureOwner {
        self.state.arbiter.owner()
    }

    /// Returns `true` when drag deltas resize the sheet.
    #[inline]
    pub fn drag_enabled(&self) -> bool {
        self.state.arbiter.drag_enabled()
    }

    /// Returns `true` when the inner content should be allowed to scroll.
    #[inline]
    pub fn scroll_enabled(&self) -> bool {
        !self.drag_enabled()
    }

    /// Height bounds for the current detents and container, if laid out.
    pub fn bounds(&self) -> Option<HeightBounds> {
        HeightBounds::from_detents(self.config.detents(), self.state.container_height)
    }

    /// Current height as a fraction of the container, if laid out.
    pub fn fraction(&self) -> Option<f64> {
        self.state
            .is_laid_out()
            .then(|| self.state.height / self.state.container_height)
    }

    /// Returns `true` when the sheet is at (or above) its maximum height.
    pub fn is_max_detent_reached(&self) -> bool {
        self.bounds().is_some_and(|b| self.state.height >= b.max)
    }

    /// Report the container size. Only the height is used.
    pub fn layout(&mut self, size: Size) -> SheetChanges {
        self.set_container_height(size.height)
    }

    /// Report the container height.
    ///
    /// Zero, negative, or non-finite heights mean "not laid out yet" and are ignored.
    pub fn set_container_height(&mut self, container_height: f64) -> SheetChanges {
        if !is_laid_out(container_height) {
            log::debug!("ignoring unusable container height {container_height}");
            return SheetChanges::empty();
        }
        if container_height == self.state.container_height {
            return SheetChanges::empty();
        }
        let first_layout = !self.state.is_laid_out();
        self.state.container_height = container_height;
        let height = self.config.selected_detent().fraction() * container_height;
        let mut changes = self.place(height);
        if first_layout
            && let Some(bounds) = self.bounds()
            && self.state.arbiter.settle_at(height >= bounds.max)
        {
            changes |= SheetChanges::OWNER;
        }
        changes
    }

    /// Programmatically select `detent` and move the sheet to it.
    ///
    /// Non-members are refused. Landing on the maximum height hands input to the inner
    /// scroll; landing below it returns input to the drag unless the content is scrolled.
    pub fn select_detent(&mut self, detent: Detent) -> SheetChanges {
        if !self.config.detents().contains(detent) {
            log::error!("cannot select {detent:?}: not in the detent set");
            return SheetChanges::empty();
        }
        self.commit_selection(detent)
    }

    /// Replace the detent set and move the sheet to the resulting selection.
    ///
    /// See [`SheetConfig::set_detents`] for how the selection is chosen.
    pub fn set_detents(&mut self, detents: DetentSet, initial: Option<Detent>) -> SheetChanges {
        let previous = self.config.selected_detent();
        self.config.set_detents(detents, initial);
        let selected = self.config.selected_detent();
        let mut changes = self.commit_selection(selected);
        if selected != previous {
            changes |= SheetChanges::DETENT;
        }
        changes
    }

    /// Report the inner content's scroll offset.
    ///
    /// `offset <= 0` gives the drag ownership and `offset > 0` gives it to the scroll.
    /// With [`ArbitrationPolicy::pin_largest_on_top`](crate::ArbitrationPolicy::pin_largest_on_top),
    /// reaching the top pins the largest detent. With
    /// [`ArbitrationPolicy::overscroll_resizes`](crate::ArbitrationPolicy::overscroll_resizes),
    /// a negative offset pulls the sheet down by that amount and reselects the nearest detent.
    pub fn scroll_offset_changed(&mut self, offset: f64) -> SheetChanges {
        let mut changes = SheetChanges::empty();
        if !offset.is_finite() {
            return changes;
        }
        let transition = self.state.arbiter.on_scroll_offset(offset);
        if transition.changed() {
            changes |= SheetChanges::OWNER;
        }
        let policy = self.config.arbitration();

        if transition.reached_top && policy.pin_largest_on_top {
            let largest = self.config.detents().largest();
            if largest != self.config.selected_detent() && self.config.set_selected_detent(largest)
            {
                changes |= SheetChanges::DETENT;
            }
            if let Some(bounds) = self.bounds() {
                changes |= self.place(bounds.max);
            }
        }

        if offset < 0.0
            && policy.overscroll_resizes
            && let Some(bounds) = self.bounds()
        {
            changes |= self.place(clamp(self.state.height + offset, bounds.min, bounds.max));
            let nearest = self
                .config
                .detents()
                .nearest(self.state.height / self.state.container_height);
            if nearest != self.config.selected_detent() && self.config.set_selected_detent(nearest)
            {
                changes |= SheetChanges::DETENT;
            }
        }
        changes
    }

    /// A drag gesture started. Returns `false` if the inner scroll owns input.
    pub fn drag_began(&mut self) -> bool {
        if !self.state.arbiter.begin_drag() {
            return false;
        }
        if self.state.drag.is_none() {
            self.state.drag = Some(DragTrack::new(self.state.height));
        }
        true
    }

    /// The drag moved by `translation` since the last update. Only `translation.y` is used.
    ///
    /// With a smoothed [`DragResponse`](crate::DragResponse), an update without movement
    /// still moves the sheet closer to the finger.
    pub fn drag_changed(&mut self, translation: Vec2) -> SheetChanges {
        if !self.state.arbiter.accept_drag_delta() {
            return SheetChanges::empty();
        }
        let height = self.state.height;
        let track = self.state.drag.get_or_insert_with(|| DragTrack::new(height));
        let Some(bounds) =
            HeightBounds::from_detents(self.config.detents(), self.state.container_height)
        else {
            return SheetChanges::empty();
        };
        match apply_drag_delta(
            track,
            height,
            translation.y,
            bounds,
            self.config.drag_response(),
        ) {
            Some(h) => self.set_height(h),
            None => SheetChanges::empty(),
        }
    }

    /// The drag ended: snap to the detent nearest to where the finger let go.
    ///
    /// A smoothed height may still lag the finger; the release resolves against the
    /// finger position. Does nothing unless a drag was accepted since the last end or cancel.
    pub fn drag_ended(&mut self) -> SheetChanges {
        let track = self.state.drag.take();
        if !self.state.arbiter.end_drag() {
            return SheetChanges::empty();
        }
        let release_height = match (track, self.bounds()) {
            (Some(track), Some(bounds)) => track.target(bounds),
            _ => self.state.height,
        };
        match resolve_release(
            release_height,
            self.state.container_height,
            self.config.detents(),
        ) {
            Resolution::NotLaidOut => SheetChanges::empty(),
            Resolution::Rejected { target, height } => {
                log::debug!("rejected settle at {target:?} ({height}): below minimum height");
                SheetChanges::empty()
            }
            Resolution::Settle {
                detent,
                height,
                reached_max,
            } => self.commit(detent, height, reached_max),
        }
    }

    /// The host cancelled the drag. The height stays at its last value.
    pub fn drag_cancelled(&mut self) {
        self.state.arbiter.cancel_drag();
        self.state.drag = None;
    }

    fn commit_selection(&mut self, detent: Detent) -> SheetChanges {
        match self.bounds() {
            Some(bounds) => {
                let height = detent.fraction() * self.state.container_height;
                self.commit(detent, height, height >= bounds.max)
            }
            None => {
                let mut changes = SheetChanges::empty();
                if detent != self.config.selected_detent() && self.config.set_selected_detent(detent)
                {
                    changes |= SheetChanges::DETENT;
                }
                changes
            }
        }
    }

    fn commit(&mut self, detent: Detent, height: f64, reached_max: bool) -> SheetChanges {
        let mut changes = SheetChanges::empty();
        if detent != self.config.selected_detent() && self.config.set_selected_detent(detent) {
            changes |= SheetChanges::DETENT;
        }
        changes |= self.place(height);
        if self.state.arbiter.settle_at(reached_max) {
            changes |= SheetChanges::OWNER;
        }
        changes
    }

    /// Move the sheet outside of the drag itself; a drag in flight continues from here.
    fn place(&mut self, height: f64) -> SheetChanges {
        if let Some(track) = &mut self.state.drag {
            *track = DragTrack::new(height);
        }
        self.set_height(height)
    }

    fn set_height(&mut self, height: f64) -> SheetChanges {
        if height == self.state.height {
            return SheetChanges::empty();
        }
        log::trace!("sheet height {} -> {height}", self.state.height);
        self.state.height = height;
        SheetChanges::HEIGHT
    }
}
