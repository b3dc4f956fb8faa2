// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted canvas session, headless.
//!
//! Drives a [`CanvasEngine`] through the same event entry points a real
//! host would use: select and drag pages, open linked pages into placed
//! spots, close and reopen a subtree, and answer delegate requests.
//!
//! Run:
//! - `cargo run -p trellis_demos --example canvas_session`

use kurbo::{Point, Rect, Size};
use trellis_canvas::{CanvasDelegate, CanvasEngine};
use trellis_interaction::{Key, KeyInput, Modifiers, PointerInput};
use trellis_page_tree::{LayoutConfig, NoteId, PageContent, PageId};

/// Prints every notification as it arrives.
struct Narrator;

impl CanvasDelegate for Narrator {
    fn pages_modified(&mut self, pages: &[PageId]) {
        println!("  [delegate] modified {pages:?}");
    }

    fn modification_finished(&mut self, pages: &[PageId]) {
        println!("  [delegate] finished {pages:?}");
    }

    fn remove_requested(&mut self, pages: &[PageId]) {
        println!("  [delegate] remove requested {pages:?}");
    }

    fn link_requested(&mut self, source: PageId, target: PageId) {
        println!("  [delegate] link requested {source:?} -> {target:?}");
    }
}

fn dump(engine: &CanvasEngine<Narrator>, heading: &str) {
    println!("{heading}");
    for id in engine.tree().pages() {
        let rect = engine.tree().content_rect(id).unwrap_or_default();
        let parent = engine.tree().parent(id);
        let mark = if engine.tree().is_selected(id) {
            " [selected]"
        } else {
            ""
        };
        println!(
            "  {id:?} ({:.0},{:.0})..({:.0},{:.0}) parent {parent:?}{mark}",
            rect.x0, rect.y0, rect.x1, rect.y1
        );
    }
}

fn drag(engine: &mut CanvasEngine<Narrator>, from: Point, to: Point) {
    engine.pointer_down(&PointerInput::new(from));
    engine.pointer_dragged(&PointerInput::new(to));
    engine.pointer_up(&PointerInput::new(to));
}

fn main() {
    let mut engine = CanvasEngine::with_delegate(
        LayoutConfig::default(),
        Size::new(1280.0, 800.0),
        Narrator,
    );
    let note = PageContent::sized(Size::new(240.0, 160.0));

    let outline = engine.insert_page(
        NoteId::new(1),
        Rect::new(80.0, 80.0, 320.0, 240.0),
        &note,
    );
    let scratch = engine.place_page(NoteId::new(2), Point::new(700.0, 500.0), &note);
    dump(&engine, "two pages on the canvas:");

    // Grab the outline page by its title bar and move it a little.
    println!("dragging the outline page:");
    drag(&mut engine, Point::new(200.0, 70.0), Point::new(260.0, 110.0));
    dump(&engine, "after the drag:");

    // Follow two links out of the outline page; each new page gets a free
    // spot next to its anchor.
    let details = engine
        .open_linked_page(outline, NoteId::new(3), &note)
        .unwrap_or(outline);
    let sources = engine
        .open_linked_page(outline, NoteId::new(4), &note)
        .unwrap_or(outline);
    dump(&engine, "after following two links:");

    // Sweep everything up and nudge the whole selection down a step.
    drag(&mut engine, Point::new(10.0, 10.0), Point::new(1200.0, 760.0));
    let nudge = KeyInput::new(Key::Down).with_modifiers(Modifiers::SHIFT);
    engine.key_down(&nudge);
    engine.key_up(&nudge);
    dump(&engine, "after a shift-nudge of the marquee selection:");

    // Close one linked page; its geometry waits in a snapshot.
    engine.close_linked_page(details);
    println!(
        "closed {details:?}; snapshots held: {}",
        engine.snapshots().len()
    );
    let reopened = engine
        .open_linked_page(outline, NoteId::new(3), &note)
        .unwrap_or(outline);
    println!("reopened as {reopened:?} (same id: {})", reopened == details);
    dump(&engine, "after the reopen:");

    // Draw a link from the scratch page to the sources page, then answer
    // the delegate's request the way a host would.
    println!("link mode:");
    engine.begin_link_mode();
    engine.pointer_down(&PointerInput::new(center(&engine, scratch)));
    engine.pointer_up(&PointerInput::new(center(&engine, sources)));
    engine.set_parent(sources, Some(scratch));
    dump(&engine, "after linking:");

    // Ask for a removal and carry it out.
    drag(&mut engine, Point::new(10.0, 10.0), Point::new(1200.0, 760.0));
    println!("delete requested:");
    let delete = KeyInput::new(Key::Delete);
    engine.key_down(&delete);
    engine.key_up(&delete);
    let doomed: Vec<PageId> = engine.tree().selected_pages();
    engine.remove_pages(&doomed);
    dump(&engine, "after removal:");
}

fn center(engine: &CanvasEngine<Narrator>, page: PageId) -> Point {
    engine
        .tree()
        .content_rect(page)
        .map(|r| r.center() + engine.canvas_origin())
        .unwrap_or_default()
}
