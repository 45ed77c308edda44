// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Detent`] value type and nearest-detent lookup over plain slices.

/// A resting height for a sheet, expressed as a fraction of the container height.
///
/// The named variants map to fixed fractions:
///
/// | Variant    | Fraction |
/// |------------|----------|
/// | `Large`    | `1.0`    |
/// | `Medium`   | `0.5`    |
/// | `Small`    | `0.2`    |
/// | `Hidden`   | `0.0`    |
///
/// [`Fraction`](Detent::Fraction) carries an arbitrary fraction which is returned unmodified.
/// Values outside `0.0..=1.0` are accepted but produce heights outside the container;
/// supplying a sensible value is the caller's responsibility.
///
/// Equality compares the variant and payload, so `Fraction(1.0) != Large` even though
/// both resolve to the same height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Detent {
    /// The full container height.
    Large,
    /// Half of the container height.
    Medium,
    /// A fifth of the container height.
    Small,
    /// Collapsed to zero height.
    Hidden,
    /// An arbitrary fraction of the container height.
    Fraction(f64),
}

impl Detent {
    /// Fraction of the container height this detent rests at.
    #[inline]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Large => 1.0,
            Self::Medium => 0.5,
            Self::Small => 0.2,
            Self::Hidden => 0.0,
            Self::Fraction(f) => f,
        }
    }

    /// Returns `true` for [`Detent::Hidden`].
    ///
    /// A `Fraction(0.0)` is not considered hidden.
    #[inline]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Absolute distance between two fractions.
#[inline]
pub(crate) fn distance(a: f64, b: f64) -> f64 {
    if a >= b { a - b } else { b - a }
}

/// Return the candidate whose fraction is closest to `value`.
///
/// Ties keep the first candidate in iteration order.
/// Candidates whose distance is NaN never win over a comparable one.
///
/// An empty slice yields [`Detent::Small`]. A [`DetentSet`](crate::DetentSet) is never
/// empty, so prefer [`DetentSet::nearest`](crate::DetentSet::nearest) where possible.
pub fn nearest(value: f64, candidates: &[Detent]) -> Detent {
    let mut best: Option<(Detent, f64)> = None;
    for &c in candidates {
        let d = distance(c.fraction(), value);
        match best {
            None => best = Some((c, d)),
            // Strictly closer only; equal distance keeps the earlier candidate.
            Some((_, bd)) if d < bd => best = Some((c, d)),
            Some(_) => {}
        }
    }
    match best {
        Some((d, _)) => d,
        None => {
            log::debug!("nearest detent requested from an empty candidate list");
            Detent::Small
        }
    }
}
