// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height resolution: pure functions mapping a drag to a new sheet height.
//!
//! ## Overview
//!
//! Nothing here holds state beyond the [`DragTrack`] a caller keeps for the gesture in
//! flight. Callers pass the current height, the gesture delta, and the [`HeightBounds`]
//! derived from the active detents and container height.
//!
//! A drag accumulates its translation since the gesture started and targets
//! `start - translation` (moving the finger up, a negative translation, grows the sheet),
//! clamped into the bounds. The height then moves toward that target according to the
//! [`DragResponse`]:
//!
//! - [`DragResponse::Direct`] assigns the clamped target as is. Use this when the
//!   rendering layer already animates height changes.
//! - [`DragResponse::Smoothed`] moves a fixed fraction of the way toward the target on
//!   every update, damping per-frame jitter. The target follows the finger, so updates
//!   without movement keep closing the gap. This is the default.
//!
//! ```
//! use understory_sheet::height::{DragResponse, DragTrack, HeightBounds, apply_drag_delta};
//!
//! let bounds = HeightBounds::new(160.0, 800.0);
//! // Finger moved up 200 units.
//! let mut track = DragTrack::new(160.0);
//! assert_eq!(apply_drag_delta(&mut track, 160.0, -200.0, bounds, DragResponse::Direct), Some(360.0));
//!
//! // Smoothed: 20% of the way there, then closer on every frame.
//! let mut track = DragTrack::new(160.0);
//! let mut h = apply_drag_delta(&mut track, 160.0, -200.0, bounds, DragResponse::default()).unwrap();
//! assert_eq!(h, 200.0);
//! for _ in 0..60 {
//!     h = apply_drag_delta(&mut track, h, 0.0, bounds, DragResponse::default()).unwrap_or(h);
//! }
//! assert!(360.0 - h < 1e-3);
//! ```

use understory_detent::DetentSet;

/// Smoothing factor used by [`DragResponse::default`].
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.2;

/// How a drag update is applied to the sheet height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragResponse {
    /// Assign the clamped height directly.
    Direct,
    /// Exponential smoothing toward the clamped height.
    Smoothed {
        /// Fraction of the remaining distance covered per update, in `0.0..=1.0`.
        /// Values outside that range are clamped into it.
        factor: f64,
    },
}

impl Default for DragResponse {
    fn default() -> Self {
        Self::Smoothed {
            factor: DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

impl DragResponse {
    /// Height after one update from `current` toward `target`.
    pub fn step(self, current: f64, target: f64) -> f64 {
        match self {
            Self::Direct => target,
            Self::Smoothed { factor } => smooth(current, target, factor.clamp(0.0, 1.0)),
        }
    }
}

/// Absolute height bounds for a laid-out sheet.
///
/// Derived from the smallest and largest detent fractions times the container height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightBounds {
    /// Lowest height the sheet may take.
    pub min: f64,
    /// Highest height the sheet may take.
    pub max: f64,
}

impl HeightBounds {
    /// Create bounds from explicit heights.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds for `detents` inside a container of the given height.
    ///
    /// Returns `None` when the container is not laid out yet
    /// (zero, negative, or non-finite height).
    pub fn from_detents(detents: &DetentSet, container_height: f64) -> Option<Self> {
        if !is_laid_out(container_height) {
            return None;
        }
        Some(Self {
            min: detents.min_fraction() * container_height,
            max: detents.max_fraction() * container_height,
        })
    }

    /// Clamp `height` into these bounds.
    #[inline]
    pub fn clamp(self, height: f64) -> f64 {
        clamp(height, self.min, self.max)
    }

    /// Returns `true` if `height` lies within the bounds (inclusive).
    #[inline]
    pub fn contains(self, height: f64) -> bool {
        height >= self.min && height <= self.max
    }
}

/// Returns `true` if a container height is usable for fraction math.
#[inline]
pub fn is_laid_out(container_height: f64) -> bool {
    container_height.is_finite() && container_height > 0.0
}

/// Clamp `desired` into `[min, max]`.
///
/// Unlike [`f64::clamp`], this never panics: if `min > max`, `min` wins.
#[inline]
pub fn clamp(desired: f64, min: f64, max: f64) -> f64 {
    desired.min(max).max(min)
}

/// Exponential smoothing: `current * (1 - factor) + target * factor`.
#[inline]
pub fn smooth(current: f64, target: f64, factor: f64) -> f64 {
    current * (1.0 - factor) + target * factor
}

/// Where a drag gesture started and how far the finger has moved since.
///
/// The drag target is derived from the whole gesture rather than from the last delta,
/// so a smoothed height lags the finger without losing any of its travel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragTrack {
    start: f64,
    translation: f64,
}

impl DragTrack {
    /// Start tracking a drag from `start_height`.
    pub const fn new(start_height: f64) -> Self {
        Self {
            start: start_height,
            translation: 0.0,
        }
    }

    /// Height when the gesture started (or was last rebased).
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Vertical translation accumulated since the start.
    #[inline]
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Height the finger asks for, clamped into `bounds`.
    #[inline]
    pub fn target(&self, bounds: HeightBounds) -> f64 {
        bounds.clamp(self.start - self.translation)
    }
}

/// Height after applying a vertical drag translation, or `None` for a no-op.
///
/// `translation_delta` is the movement since the previous update, in screen coordinates:
/// negative moves the finger up and grows the sheet. It is added to `track`, whose clamped
/// target is then approached according to `response`. The result is clamped again so a
/// stale `current` outside the bounds is pulled back in.
///
/// Returns `None` when `current` already sits on the target, when the result would not
/// change the height, or when an input is not finite (the delta is then not recorded).
pub fn apply_drag_delta(
    track: &mut DragTrack,
    current: f64,
    translation_delta: f64,
    bounds: HeightBounds,
    response: DragResponse,
) -> Option<f64> {
    if !translation_delta.is_finite() || !current.is_finite() {
        return None;
    }
    track.translation += translation_delta;
    let target = track.target(bounds);
    if target == current {
        return None;
    }
    let next = bounds.clamp(response.step(current, target));
    (next != current).then_some(next)
}
