// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share vertical movement between the sheet and its scrolling content.
//!
//! The sheet expands to full height, hands movement to the inner list, and takes it
//! back when the list returns to its top. An overscroll then pulls the sheet down.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_scroll_handoff`

use kurbo::{Size, Vec2};
use understory_sheet::{Detent, DetentSet, GestureOwner, Sheet, SheetConfig};

fn report(label: &str, sheet: &Sheet) {
    println!(
        "== {label} ==\n  height={:.1} detent={:?} owner={:?} scroll_enabled={}",
        sheet.height(),
        sheet.selected_detent(),
        sheet.owner(),
        sheet.scroll_enabled()
    );
}

fn main() {
    let detents = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
    let mut sheet = Sheet::new(SheetConfig::new(detents));
    let _ = sheet.layout(Size::new(390.0, 800.0));
    report("Initial", &sheet);

    // A long upward swipe with the default smoothed response.
    assert!(sheet.drag_began());
    for _ in 0..30 {
        let _ = sheet.drag_changed(Vec2::new(0.0, -120.0));
    }
    let _ = sheet.drag_ended();
    report("Expanded", &sheet);
    assert_eq!(sheet.selected_detent(), Detent::Large);
    assert_eq!(sheet.owner(), GestureOwner::Scroll);

    // The list scrolls; the sheet ignores drags.
    let _ = sheet.scroll_offset_changed(120.0);
    assert!(!sheet.drag_began());
    report("List scrolled", &sheet);

    // Back at the top, then overscrolled: the drag owns movement and the sheet follows.
    let _ = sheet.scroll_offset_changed(0.0);
    assert_eq!(sheet.owner(), GestureOwner::Drag);
    let _ = sheet.scroll_offset_changed(-450.0);
    report("Overscrolled", &sheet);
    assert_eq!(sheet.height(), 350.0);
    assert_eq!(sheet.selected_detent(), Detent::Medium);
}
