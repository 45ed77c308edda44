// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_detent --heading-base-level=0

//! Understory Detent: resting heights for sheets and drawers.
//!
//! A detent is a height a sheet can settle at, expressed as a fraction of its container.
//! This crate defines the [`Detent`] value type, the ordered non-empty [`DetentSet`],
//! and the nearest-detent lookup used when a drag gesture is released.
//!
//! It does not know about gestures, pixels, or animation. Higher layers
//! (for example `understory_sheet`) convert fractions to absolute heights.
//!
//! # Example
//!
//! ```rust
//! use understory_detent::{Detent, DetentSet};
//!
//! let set = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
//!
//! // A sheet released at 45% of its container snaps to the closest detent.
//! assert_eq!(set.nearest(0.45), Detent::Medium);
//!
//! // Bounds used to clamp drags.
//! assert_eq!(set.min_fraction(), 0.2);
//! assert_eq!(set.max_fraction(), 1.0);
//! ```
//!
//! ## Ordering and ties
//!
//! A [`DetentSet`] keeps insertion order and drops duplicates.
//! Every query that can tie (nearest, smallest, largest) returns the earliest member,
//! so results are deterministic for a given set.
//!
//! ## Degraded inputs
//!
//! - Building a [`DetentSet`] from nothing is a programming error.
//!   [`DetentSet::new`] logs it and falls back to `[Large]`.
//! - [`nearest`] over an empty slice returns [`Detent::Small`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod detent;
pub mod set;

pub use detent::{Detent, nearest};
pub use set::DetentSet;
