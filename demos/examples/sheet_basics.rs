// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a sheet between detents.
//!
//! Places a sheet at its smallest detent in an 800-unit container, drags it up
//! past the halfway mark, releases, then drags it back down past the bottom.
//!
//! Run:
//! - `cargo run -p understory_demos --example sheet_basics`

use kurbo::{Size, Vec2};
use understory_sheet::{Detent, DetentSet, DragResponse, Sheet, SheetChanges, SheetConfig};

fn main() {
    let detents = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
    let mut config = SheetConfig::new(detents);
    config.set_drag_response(DragResponse::Direct);
    config.set_drag_indicator_visible(true);

    let mut sheet = Sheet::new(config);
    let _ = sheet.layout(Size::new(390.0, 800.0));
    println!("== Layout ==\n  height={} detent={:?}", sheet.height(), sheet.selected_detent());
    assert_eq!(sheet.height(), 160.0);

    // Finger moves up 200 units.
    assert!(sheet.drag_began());
    let _ = sheet.drag_changed(Vec2::new(0.0, -200.0));
    println!("== Dragging ==\n  height={}", sheet.height());
    assert_eq!(sheet.height(), 360.0);

    let changes = sheet.drag_ended();
    println!(
        "== Released ==\n  changes={changes:?} height={} detent={:?}",
        sheet.height(),
        sheet.selected_detent()
    );
    assert_eq!(changes, SheetChanges::HEIGHT | SheetChanges::DETENT);
    assert_eq!(sheet.selected_detent(), Detent::Medium);
    assert_eq!(sheet.height(), 400.0);

    // Finger moves down 500 units: clamped at the smallest detent.
    assert!(sheet.drag_began());
    let _ = sheet.drag_changed(Vec2::new(0.0, 500.0));
    println!("== Dragging ==\n  height={} (clamped)", sheet.height());
    assert_eq!(sheet.height(), 160.0);

    let _ = sheet.drag_ended();
    println!(
        "== Released ==\n  height={} detent={:?}",
        sheet.height(),
        sheet.selected_detent()
    );
    assert_eq!(sheet.selected_detent(), Detent::Small);
}
