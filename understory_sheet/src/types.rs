// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared types: change flags, edge sets, and colors.

bitflags::bitflags! {
    /// Fields of a [`Sheet`](crate::Sheet) touched by a single input event.
    ///
    /// Every mutating call on the sheet returns this so the rendering layer can re-read
    /// only what changed instead of observing the whole state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SheetChanges: u8 {
        /// [`Sheet::height`](crate::Sheet::height) changed.
        const HEIGHT = 0b0000_0001;
        /// [`Sheet::selected_detent`](crate::Sheet::selected_detent) changed.
        const DETENT = 0b0000_0010;
        /// [`Sheet::owner`](crate::Sheet::owner) changed; toggle inner-scroll enablement.
        const OWNER  = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// A set of container edges, used for safe-area exclusions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge.
        const TOP      = 0b0000_0001;
        /// Bottom edge.
        const BOTTOM   = 0b0000_0010;
        /// Leading edge (left in left-to-right layouts).
        const LEADING  = 0b0000_0100;
        /// Trailing edge (right in left-to-right layouts).
        const TRAILING = 0b0000_1000;
        /// Leading and trailing.
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        /// Top and bottom.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Every edge.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for SheetChanges {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::empty()
    }
}

/// An 8-bit RGBA color, carried as configuration for the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Neutral gray, the default drag indicator color.
    pub const GRAY: Self = Self::rgba8(128, 128, 128, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba8(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba8(0, 0, 0, 255);

    /// Create a color from its channels.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_aggregates() {
        assert_eq!(
            Edges::ALL,
            Edges::TOP | Edges::BOTTOM | Edges::LEADING | Edges::TRAILING
        );
        assert!(Edges::VERTICAL.contains(Edges::BOTTOM));
        assert!(!Edges::HORIZONTAL.contains(Edges::TOP));
        assert!(Edges::default().is_empty());
    }

    #[test]
    fn changes_default_is_empty() {
        let mut c = SheetChanges::default();
        assert!(c.is_empty());
        c |= SheetChanges::HEIGHT;
        assert!(c.contains(SheetChanges::HEIGHT));
        assert!(!c.contains(SheetChanges::DETENT));
    }
}
