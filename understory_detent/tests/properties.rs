// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for nearest-detent lookup.

use proptest::prelude::*;
use understory_detent::{Detent, DetentSet};

fn arb_detent() -> impl Strategy<Value = Detent> {
    prop_oneof![
        Just(Detent::Large),
        Just(Detent::Medium),
        Just(Detent::Small),
        Just(Detent::Hidden),
        (0.0..=1.0_f64).prop_map(Detent::Fraction),
    ]
}

fn arb_set() -> impl Strategy<Value = DetentSet> {
    prop::collection::vec(arb_detent(), 1..8).prop_map(|v| DetentSet::new(v))
}

fn dist(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

proptest! {
    /// The chosen detent is at least as close as every member, and strictly closer
    /// than every member that precedes it.
    #[test]
    fn prop_nearest_minimizes_distance(set in arb_set(), value in -0.5..1.5_f64) {
        let chosen = set.nearest(value);
        let chosen_idx = set.iter().position(|d| d == chosen);
        prop_assert!(chosen_idx.is_some(), "nearest must return a member");
        let chosen_idx = chosen_idx.unwrap();
        let best = dist(chosen.fraction(), value);
        for (i, d) in set.iter().enumerate() {
            let di = dist(d.fraction(), value);
            prop_assert!(best <= di, "member {d:?} is closer than {chosen:?}");
            if i < chosen_idx {
                prop_assert!(di > best, "earlier member {d:?} ties and should have won");
            }
        }
    }

    /// Resolving at a member's exact fraction returns a member with that fraction,
    /// and the member itself when its fraction is unique.
    #[test]
    fn prop_nearest_is_idempotent_on_members(set in arb_set()) {
        for d in set.iter() {
            let got = set.nearest(d.fraction());
            prop_assert_eq!(got.fraction(), d.fraction());
            if set.iter().filter(|o| o.fraction() == d.fraction()).count() == 1 {
                prop_assert_eq!(got, d);
            }
        }
    }

    /// Smallest and largest bound every member.
    #[test]
    fn prop_extremes_bound_members(set in arb_set()) {
        for d in set.iter() {
            prop_assert!(set.min_fraction() <= d.fraction());
            prop_assert!(set.max_fraction() >= d.fraction());
        }
        prop_assert!(set.contains(set.smallest()));
        prop_assert!(set.contains(set.largest()));
    }
}
