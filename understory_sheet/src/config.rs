// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet configuration: the detent set, the selected detent, behavior, and style.
//!
//! ## Ownership
//!
//! The host builds a [`SheetConfig`] and hands it to a [`Sheet`](crate::Sheet).
//! The sheet only ever writes the selected detent; the detent set and style are
//! changed by the host through the setters here.
//!
//! ## Selected detent
//!
//! The selected detent is always a member of the detent set:
//!
//! - A fresh config selects the smallest detent that is not `Hidden`
//!   (or `Hidden` itself when nothing else exists).
//! - [`SheetConfig::set_detents`] honors an explicit initial detent on its first call only.
//!   Later calls keep the current selection while it remains a member.
//! - [`SheetConfig::set_selected_detent`] refuses non-members.

use understory_detent::{Detent, DetentSet};

use crate::arbitration::ArbitrationPolicy;
use crate::height::DragResponse;
use crate::types::{Color, Edges};

/// Corner radius used by [`SheetConfig::default`].
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

/// Visibility and color of the grabber drawn at the top of the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragIndicator {
    /// Draw the indicator.
    pub visible: bool,
    /// Indicator color.
    pub color: Color,
}

impl Default for DragIndicator {
    fn default() -> Self {
        Self {
            visible: false,
            color: Color::GRAY,
        }
    }
}

/// Configuration shared between the host, the sheet engine, and the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    detents: DetentSet,
    selected: Detent,
    initial_detent_applied: bool,
    sheet_color: Option<Color>,
    corner_radius: f64,
    drag_indicator: DragIndicator,
    ignored_edges: Edges,
    drag_response: DragResponse,
    arbitration: ArbitrationPolicy,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(DetentSet::default())
    }
}

impl SheetConfig {
    /// Create a config over `detents` with default style and behavior.
    pub fn new(detents: DetentSet) -> Self {
        let selected = default_selection(&detents);
        Self {
            detents,
            selected,
            initial_detent_applied: false,
            sheet_color: None,
            corner_radius: DEFAULT_CORNER_RADIUS,
            drag_indicator: DragIndicator::default(),
            ignored_edges: Edges::empty(),
            drag_response: DragResponse::default(),
            arbitration: ArbitrationPolicy::default(),
        }
    }

    /// Active detents.
    #[inline]
    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// Currently selected detent; always a member of [`SheetConfig::detents`].
    #[inline]
    pub fn selected_detent(&self) -> Detent {
        self.selected
    }

    /// Select `detent`. Returns `false` and leaves the selection alone if it is not a member.
    pub fn set_selected_detent(&mut self, detent: Detent) -> bool {
        if !self.detents.contains(detent) {
            log::error!("cannot select {detent:?}: not in {:?}", self.detents.as_slice());
            return false;
        }
        self.selected = detent;
        true
    }

    /// Replace the detent set.
    ///
    /// On the first call, `initial` (or the default selection when `None`) becomes the
    /// selected detent. Afterwards the current selection is kept if it is still a member,
    /// and replaced by the default selection otherwise.
    pub fn set_detents(&mut self, detents: DetentSet, initial: Option<Detent>) {
        self.detents = detents;
        if !self.initial_detent_applied {
            self.initial_detent_applied = true;
            self.selected = match initial {
                Some(d) if self.detents.contains(d) => d,
                Some(d) => {
                    log::error!("initial detent {d:?} is not in the detent set; using default");
                    default_selection(&self.detents)
                }
                None => default_selection(&self.detents),
            };
        } else if !self.detents.contains(self.selected) {
            self.selected = default_selection(&self.detents);
        }
    }

    /// Sheet background; `None` leaves it to the renderer.
    #[inline]
    pub fn sheet_color(&self) -> Option<Color> {
        self.sheet_color
    }

    /// Radius of the two top corners.
    #[inline]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Grabber at the top of the sheet.
    #[inline]
    pub fn drag_indicator(&self) -> DragIndicator {
        self.drag_indicator
    }

    /// Edges on which the sheet extends into the safe area.
    #[inline]
    pub fn ignored_edges(&self) -> Edges {
        self.ignored_edges
    }

    /// How drag deltas are applied to the height.
    #[inline]
    pub fn drag_response(&self) -> DragResponse {
        self.drag_response
    }

    /// Optional scroll/drag arbitration behaviors.
    #[inline]
    pub fn arbitration(&self) -> ArbitrationPolicy {
        self.arbitration
    }

    /// Set the sheet background color.
    pub fn set_sheet_color(&mut self, color: Option<Color>) {
        self.sheet_color = color;
    }

    /// Show or hide the drag indicator, keeping its color.
    pub fn set_drag_indicator_visible(&mut self, visible: bool) {
        self.drag_indicator.visible = visible;
    }

    /// Set the drag indicator color, keeping its visibility.
    pub fn set_drag_indicator_color(&mut self, color: Color) {
        self.drag_indicator.color = color;
    }

    /// Set the top corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius;
    }

    /// Set the edges that ignore the safe area.
    pub fn set_ignored_edges(&mut self, edges: Edges) {
        self.ignored_edges = edges;
    }

    /// Choose how drag deltas are applied.
    pub fn set_drag_response(&mut self, response: DragResponse) {
        self.drag_response = response;
    }

    /// Choose the optional arbitration behaviors.
    pub fn set_arbitration(&mut self, policy: ArbitrationPolicy) {
        self.arbitration = policy;
    }
}

fn default_selection(detents: &DetentSet) -> Detent {
    detents
        .smallest_excluding_hidden()
        .unwrap_or_else(|| detents.smallest())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> DetentSet {
        DetentSet::new([Detent::Small, Detent::Medium, Detent::Large])
    }

    #[test]
    fn defaults() {
        let c = SheetConfig::default();
        assert_eq!(c.detents().as_slice(), &[Detent::Large]);
        assert_eq!(c.selected_detent(), Detent::Large);
        assert_eq!(c.corner_radius(), 20.0);
        assert!(!c.drag_indicator().visible);
        assert_eq!(c.drag_indicator().color, Color::GRAY);
        assert!(c.ignored_edges().is_empty());
        assert_eq!(c.sheet_color(), None);
        assert_eq!(c.drag_response(), DragResponse::default());
        assert_eq!(c.arbitration(), ArbitrationPolicy::default());
    }

    // Hidden is the smallest member but the sheet starts at the smallest visible one.
    #[test]
    fn initial_selection_skips_hidden() {
        let c = SheetConfig::new(DetentSet::new([
            Detent::Hidden,
            Detent::Large,
            Detent::Medium,
        ]));
        assert_eq!(c.selected_detent(), Detent::Medium);
        let c = SheetConfig::new(DetentSet::new([Detent::Hidden]));
        assert_eq!(c.selected_detent(), Detent::Hidden);
    }

    #[test]
    fn selecting_non_member_is_refused() {
        let mut c = SheetConfig::new(three());
        assert!(!c.set_selected_detent(Detent::Hidden));
        assert_eq!(c.selected_detent(), Detent::Small);
        assert!(c.set_selected_detent(Detent::Large));
        assert_eq!(c.selected_detent(), Detent::Large);
    }

    #[test]
    fn initial_detent_applies_once() {
        let mut c = SheetConfig::default();
        c.set_detents(three(), Some(Detent::Medium));
        assert_eq!(c.selected_detent(), Detent::Medium);

        // A second call ignores `initial` and keeps the still-valid selection.
        c.set_detents(three(), Some(Detent::Large));
        assert_eq!(c.selected_detent(), Detent::Medium);
    }

    #[test]
    fn initial_detent_must_be_member() {
        let mut c = SheetConfig::default();
        c.set_detents(three(), Some(Detent::Fraction(0.3)));
        assert_eq!(c.selected_detent(), Detent::Small);
    }

    #[test]
    fn replacing_detents_reselects_when_selection_disappears() {
        let mut c = SheetConfig::default();
        c.set_detents(three(), Some(Detent::Medium));
        c.set_detents(DetentSet::new([Detent::Fraction(0.4), Detent::Large]), None);
        assert_eq!(c.selected_detent(), Detent::Fraction(0.4));
    }

    #[test]
    fn style_setters() {
        let mut c = SheetConfig::default();
        c.set_sheet_color(Some(Color::WHITE));
        c.set_drag_indicator_visible(true);
        c.set_drag_indicator_color(Color::BLACK);
        c.set_corner_radius(12.0);
        c.set_ignored_edges(Edges::BOTTOM);
        c.set_drag_response(DragResponse::Direct);
        c.set_arbitration(ArbitrationPolicy {
            pin_largest_on_top: true,
            overscroll_resizes: false,
        });
        assert_eq!(c.sheet_color(), Some(Color::WHITE));
        assert_eq!(
            c.drag_indicator(),
            DragIndicator {
                visible: true,
                color: Color::BLACK
            }
        );
        assert_eq!(c.corner_radius(), 12.0);
        assert_eq!(c.ignored_edges(), Edges::BOTTOM);
        assert_eq!(c.drag_response(), DragResponse::Direct);
        assert!(c.arbitration().pin_largest_on_top);
    }
}
