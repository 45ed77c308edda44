// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent resolution on gesture release.
//!
//! ## Algorithm
//!
//! 1. `fraction = current_height / container_height`.
//! 2. `target = detents.nearest(fraction)`.
//! 3. `height = target.fraction() * container_height`.
//! 4. If `height < bounds.min`, reject and leave everything untouched.
//! 5. Otherwise settle at `target` and `height`, flagging whether it reached the maximum.
//!
//! Settling always assigns the detent height directly; the rendering layer animates the
//! snap. Smoothing only applies to per-frame drag updates.

use understory_detent::{Detent, DetentSet};

use crate::height::{HeightBounds, is_laid_out};

/// Outcome of resolving a release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The container height or current height is unusable; nothing to do.
    NotLaidOut,
    /// The nearest detent would place the sheet below the minimum height.
    Rejected {
        /// Detent that was considered.
        target: Detent,
        /// Height it would have produced.
        height: f64,
    },
    /// Commit `detent` and `height`.
    Settle {
        /// Detent to select.
        detent: Detent,
        /// Height to assign.
        height: f64,
        /// `height` is the maximum height; ownership should pass to the inner scroll.
        reached_max: bool,
    },
}

/// Resolve a release at `current_height` against the bounds implied by `detents`.
pub fn resolve_release(
    current_height: f64,
    container_height: f64,
    detents: &DetentSet,
) -> Resolution {
    match HeightBounds::from_detents(detents, container_height) {
        Some(bounds) => resolve_within(current_height, container_height, detents, bounds),
        None => Resolution::NotLaidOut,
    }
}

/// Resolve a release at `current_height` against explicit `bounds`.
///
/// [`resolve_release`] derives `bounds` from `detents`; use this when the minimum height
/// comes from elsewhere (for example a host-imposed floor).
pub fn resolve_within(
    current_height: f64,
    container_height: f64,
    detents: &DetentSet,
    bounds: HeightBounds,
) -> Resolution {
    if !is_laid_out(container_height) || !current_height.is_finite() {
        return Resolution::NotLaidOut;
    }
    let fraction = current_height / container_height;
    let target = detents.nearest(fraction);
    let height = target.fraction() * container_height;
    if height < bounds.min {
        return Resolution::Rejected { target, height };
    }
    Resolution::Settle {
        detent: target,
        height,
        reached_max: height >= bounds.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> DetentSet {
        DetentSet::new([Detent::Small, Detent::Medium, Detent::Large])
    }

    // 360 of 800 is 45%, which is 0.05 from Medium and 0.25 from Small.
    #[test]
    fn release_between_detents_snaps_to_nearest() {
        assert_eq!(
            resolve_release(360.0, 800.0, &three()),
            Resolution::Settle {
                detent: Detent::Medium,
                height: 400.0,
                reached_max: false,
            }
        );
    }

    #[test]
    fn release_at_min_settles_small() {
        assert_eq!(
            resolve_release(160.0, 800.0, &three()),
            Resolution::Settle {
                detent: Detent::Small,
                height: 160.0,
                reached_max: false,
            }
        );
    }

    #[test]
    fn release_near_top_reaches_max() {
        assert_eq!(
            resolve_release(790.0, 800.0, &three()),
            Resolution::Settle {
                detent: Detent::Large,
                height: 800.0,
                reached_max: true,
            }
        );
    }

    // Resolving at a height already on a detent returns that detent unchanged.
    #[test]
    fn release_on_detent_is_idempotent() {
        let set = three();
        for d in set.iter() {
            let h = d.fraction() * 800.0;
            match resolve_release(h, 800.0, &set) {
                Resolution::Settle { detent, height, .. } => {
                    assert_eq!(detent, d);
                    assert_eq!(height, h);
                }
                other => panic!("expected settle, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_container_is_not_laid_out() {
        assert_eq!(resolve_release(100.0, 0.0, &three()), Resolution::NotLaidOut);
        assert_eq!(
            resolve_release(f64::NAN, 800.0, &three()),
            Resolution::NotLaidOut
        );
    }

    // A floor above the nearest detent rejects the settle.
    #[test]
    fn below_min_is_rejected() {
        let floor = HeightBounds::new(300.0, 800.0);
        assert_eq!(
            resolve_within(200.0, 800.0, &three(), floor),
            Resolution::Rejected {
                target: Detent::Small,
                height: 160.0,
            }
        );
    }

    // Hidden is a member, so collapsing to zero is allowed.
    #[test]
    fn hidden_member_can_settle_at_zero() {
        let set = DetentSet::new([Detent::Hidden, Detent::Medium]);
        assert_eq!(
            resolve_release(50.0, 800.0, &set),
            Resolution::Settle {
                detent: Detent::Hidden,
                height: 0.0,
                reached_max: false,
            }
        );
    }
}
