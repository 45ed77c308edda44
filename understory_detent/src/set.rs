// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DetentSet`]: an ordered, non-empty collection of unique detents.

use alloc::vec::Vec;

use crate::detent::{Detent, nearest};

/// An ordered, non-empty collection of unique [`Detent`] values.
///
/// ## Invariants
///
/// - Never empty. [`DetentSet::new`] replaces an empty input with `[Large]` and logs the
///   programming error; [`DetentSet::try_new`] returns `None` instead.
/// - No duplicates. Repeated detents are dropped, keeping the first occurrence.
/// - Insertion order is preserved. Tie-breaks in [`DetentSet::nearest`],
///   [`DetentSet::smallest`], and [`DetentSet::largest`] all favor the earlier member.
///
/// ```
/// use understory_detent::{Detent, DetentSet};
///
/// let set = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
/// assert_eq!(set.smallest(), Detent::Small);
/// assert_eq!(set.largest(), Detent::Large);
/// assert_eq!(set.nearest(0.45), Detent::Medium);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DetentSet {
    detents: Vec<Detent>,
}

impl DetentSet {
    /// Build a set from `detents`, dropping duplicates.
    ///
    /// An empty input is a programming error: it is logged and the set falls back to `[Large]`.
    pub fn new(detents: impl IntoIterator<Item = Detent>) -> Self {
        Self::try_new(detents).unwrap_or_else(|| {
            log::error!("detent set must not be empty; falling back to [Large]");
            Self::default()
        })
    }

    /// Build a set from `detents`, returning `None` if it would be empty.
    pub fn try_new(detents: impl IntoIterator<Item = Detent>) -> Option<Self> {
        let mut out: Vec<Detent> = Vec::new();
        for d in detents {
            if !out.contains(&d) {
                out.push(d);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(Self { detents: out })
        }
    }

    /// Number of detents in the set (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.detents.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Members in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Detent] {
        &self.detents
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Detent> + '_ {
        self.detents.iter().copied()
    }

    /// Returns `true` if `detent` is a member.
    pub fn contains(&self, detent: Detent) -> bool {
        self.detents.contains(&detent)
    }

    /// Member with the smallest fraction.
    pub fn smallest(&self) -> Detent {
        Self::min_by_fraction(self.iter()).unwrap_or(self.detents[0])
    }

    /// Member with the largest fraction.
    pub fn largest(&self) -> Detent {
        let mut best = self.detents[0];
        for d in self.iter().skip(1) {
            if d.fraction() > best.fraction() {
                best = d;
            }
        }
        best
    }

    /// Member with the smallest fraction, ignoring [`Detent::Hidden`].
    ///
    /// Returns `None` when the set only contains `Hidden`.
    pub fn smallest_excluding_hidden(&self) -> Option<Detent> {
        Self::min_by_fraction(self.iter().filter(|d| !d.is_hidden()))
    }

    /// Smallest fraction among the members.
    #[inline]
    pub fn min_fraction(&self) -> f64 {
        self.smallest().fraction()
    }

    /// Largest fraction among the members.
    #[inline]
    pub fn max_fraction(&self) -> f64 {
        self.largest().fraction()
    }

    /// Member whose fraction is closest to `value`; ties keep the earlier member.
    pub fn nearest(&self, value: f64) -> Detent {
        nearest(value, &self.detents)
    }

    fn min_by_fraction(iter: impl Iterator<Item = Detent>) -> Option<Detent> {
        let mut best: Option<Detent> = None;
        for d in iter {
            match best {
                Some(b) if d.fraction() >= b.fraction() => {}
                _ => best = Some(d),
            }
        }
        best
    }
}

impl Default for DetentSet {
    /// `[Large]`, matching a sheet that only rests fully expanded.
    fn default() -> Self {
        Self {
            detents: alloc::vec![Detent::Large],
        }
    }
}

impl<'a> IntoIterator for &'a DetentSet {
    type Item = Detent;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Detent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.detents.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_input_falls_back_to_large() {
        let set = DetentSet::new(core::iter::empty());
        assert_eq!(set.as_slice(), &[Detent::Large]);
        assert!(DetentSet::try_new(Vec::new()).is_none());
    }

    #[test]
    fn duplicates_are_dropped_keeping_order() {
        let set = DetentSet::new([
            Detent::Medium,
            Detent::Small,
            Detent::Medium,
            Detent::Fraction(0.7),
            Detent::Fraction(0.7),
        ]);
        assert_eq!(
            set.as_slice(),
            &[Detent::Medium, Detent::Small, Detent::Fraction(0.7)]
        );
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn derived_queries() {
        let set = DetentSet::new([
            Detent::Medium,
            Detent::Hidden,
            Detent::Large,
            Detent::Small,
        ]);
        assert_eq!(set.smallest(), Detent::Hidden);
        assert_eq!(set.largest(), Detent::Large);
        assert_eq!(set.smallest_excluding_hidden(), Some(Detent::Small));
        assert_eq!(set.min_fraction(), 0.0);
        assert_eq!(set.max_fraction(), 1.0);
        assert!(set.contains(Detent::Hidden));
        assert!(!set.contains(Detent::Fraction(0.5)));
    }

    #[test]
    fn only_hidden_has_no_visible_smallest() {
        let set = DetentSet::new([Detent::Hidden]);
        assert_eq!(set.smallest_excluding_hidden(), None);
        assert_eq!(set.smallest(), Detent::Hidden);
    }

    // Equal fractions under different variants: the earlier member wins both queries.
    #[test]
    fn extreme_ties_keep_first_member() {
        let set = DetentSet::new([
            Detent::Fraction(1.0),
            Detent::Large,
            Detent::Fraction(0.0),
            Detent::Hidden,
        ]);
        assert_eq!(set.largest(), Detent::Fraction(1.0));
        assert_eq!(set.smallest(), Detent::Fraction(0.0));
        assert_eq!(set.nearest(1.0), Detent::Fraction(1.0));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let set = DetentSet::new([Detent::Large, Detent::Small]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Detent::Large, Detent::Small]);
        let mut via_ref = Vec::new();
        for d in &set {
            via_ref.push(d);
        }
        assert_eq!(via_ref, collected);
    }
}
