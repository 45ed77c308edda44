// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: a headless, `no_std` bottom sheet engine.
//!
//! ## Overview
//!
//! A bottom sheet is a panel over primary content whose height moves between a few
//! resting heights ([detents](understory_detent::Detent)) in response to drags, and which
//! must share vertical touch movement with scrollable content inside it.
//!
//! This crate implements the numeric state machine only. It does not render, animate,
//! or read platform events. The host reports layout, scroll offsets, and drag updates;
//! the sheet answers with the height, the selected detent, and who owns the gesture.
//!
//! ## Pieces
//!
//! - [`height`]: clamp/smooth functions and the [`DragTrack`](height::DragTrack) turning
//!   drag deltas into a new height.
//! - [`arbitration`]: the two-state [`GestureArbiter`] deciding whether drag or inner scroll
//!   consumes movement.
//! - [`resolve`]: nearest-detent resolution when a drag is released.
//! - [`config`]: [`SheetConfig`], the detent set, selected detent, behavior, and style.
//! - [`sheet`]: [`Sheet`], which owns the state and routes host callbacks through the above.
//!
//! ## Workflow
//!
//! 1) Build a [`SheetConfig`] from a [`DetentSet`] and wrap it in a [`Sheet`].
//! 2) Call [`Sheet::layout`] whenever the container size changes.
//! 3) Forward [`Sheet::scroll_offset_changed`] from the inner scroll view and the drag
//!    callbacks ([`Sheet::drag_began`], [`Sheet::drag_changed`], [`Sheet::drag_ended`],
//!    [`Sheet::drag_cancelled`]).
//! 4) After each call, re-read whatever the returned [`SheetChanges`] names:
//!    [`Sheet::height`] for the frame, [`Sheet::selected_detent`] for bindings, and
//!    [`Sheet::scroll_enabled`] to toggle the inner scroll view.
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_sheet::{Detent, DetentSet, DragResponse, GestureOwner, Sheet, SheetConfig};
//!
//! let detents = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
//! let mut config = SheetConfig::new(detents);
//! config.set_drag_response(DragResponse::Direct);
//! let mut sheet = Sheet::new(config);
//! let _ = sheet.layout(Size::new(390.0, 800.0));
//! assert_eq!(sheet.height(), 160.0);
//!
//! // The content inside scrolls, so the sheet stops reacting to drags.
//! let _ = sheet.scroll_offset_changed(40.0);
//! assert_eq!(sheet.owner(), GestureOwner::Scroll);
//! assert!(!sheet.drag_began());
//!
//! // Back at the top: the drag owns movement again.
//! let _ = sheet.scroll_offset_changed(0.0);
//! assert!(sheet.drag_began());
//! let _ = sheet.drag_changed(Vec2::new(0.0, -900.0));
//! let _ = sheet.drag_ended();
//! assert_eq!(sheet.selected_detent(), Detent::Large);
//! assert_eq!(sheet.height(), 800.0);
//!
//! // Settling at the top hands movement to the inner scroll.
//! assert!(sheet.scroll_enabled());
//! ```
//!
//! ## Drag response
//!
//! A drag targets its start height minus the translation accumulated since it began.
//! [`DragResponse::Smoothed`] (the default, factor `0.2`) damps per-frame jitter by moving
//! part of the way toward that target on each update, so the sheet trails the finger and
//! catches up while it rests. [`DragResponse::Direct`] assigns the target outright, for
//! hosts that animate height changes themselves. Release resolves against the finger
//! position and always assigns the detent height directly.
//!
//! ## Threading
//!
//! Everything runs synchronously on the caller's event loop. Events are applied in the
//! order they arrive; there is no internal queue, timer, or lock.
//!
//! ## Logging
//!
//! Programming errors (empty detent sets, selecting a non-member) are reported with
//! `log::error!`, state transitions with `log::debug!`, and per-frame heights with
//! `log::trace!`. No logger is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbitration;
pub mod config;
pub mod height;
pub mod resolve;
pub mod sheet;
pub mod types;

pub use arbitration::{ArbitrationPolicy, GestureArbiter, GestureOwner, ScrollTransition};
pub use config::{DragIndicator, SheetConfig};
pub use height::{DragResponse, HeightBounds};
pub use resolve::Resolution;
pub use sheet::{Sheet, SheetState};
pub use types::{Color, Edges, SheetChanges};
pub use understory_detent::{Detent, DetentSet};
