// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup, resize, fade-in and teardown across instances.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use chronoline_engine::{
    Document, ErrorKind, FADE_IN_DELAY, MemoryDocument, RESIZE_DEBOUNCE, Timeline, classes,
};
use chronoline_settings::{Key, Options, Orientation};
use common::{Recorder, VIEWPORT, nav_buttons, single, timeline_markup};
use kurbo::Size;

fn horizontal() -> Options {
    Options::new().set(Key::Mode, "horizontal")
}

fn recorded(doc: MemoryDocument) -> Timeline<MemoryDocument, Recorder> {
    Timeline::with_collaborators(doc, Recorder::default())
}

#[test]
fn destroy_removes_every_trace() {
    let (doc, fx) = single(6);
    let mut timeline = recorded(doc);
    assert_eq!(timeline.initialize(&[fx.container], &horizontal(), 0), 1);
    let (prev, next) = nav_buttons(&timeline, fx.container);

    timeline.destroy_all();
    let doc = timeline.document();
    assert!(!doc.is_connected(prev));
    assert!(!doc.is_connected(next));
    assert_eq!(doc.count_class(fx.container, classes::NAV_BUTTON), 0);
    assert_eq!(doc.count_class(fx.container, classes::DIVIDER), 0);
    assert!(!doc.has_class(fx.container, classes::HORIZONTAL));
    assert_eq!(doc.style_count(fx.container), 0);
    assert_eq!(doc.style_count(fx.scroller), 0);
    for item in &fx.items {
        assert_eq!(doc.style_count(*item), 0);
        assert!(!doc.has_class(*item, classes::ACTIVE));
        assert_eq!(doc.attribute(*item, "data-modal-bound"), None);
    }
    assert!(timeline.ids().is_empty());
    assert!(timeline.registry().is_empty());
    assert!(timeline.api("tl").is_none());
    assert_eq!(timeline.next_deadline(), None);

    assert!(!timeline.dispatch_click(next));
    assert!(!timeline.dispatch_click(fx.items[2]));
    assert!(timeline.collaborators().modals.is_empty());

    // Resizes are ignored until the next initialize.
    timeline.on_resize(10);
    assert_eq!(timeline.next_deadline(), None);

    timeline.destroy_all();
    assert!(timeline.ids().is_empty());
}

#[test]
fn destroy_before_any_setup() {
    let (doc, _) = single(3);
    let mut timeline = Timeline::new(doc);
    timeline.destroy_all();
    timeline.destroy_all();
    assert!(timeline.ids().is_empty());
}

#[test]
fn content_is_wrapped_once() {
    let (doc, fx) = single(3);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);
    timeline.initialize(&[fx.container], &horizontal(), 10);
    timeline.destroy_all();
    timeline.initialize(&[fx.container], &horizontal(), 20);

    let doc = timeline.document();
    for item in &fx.items {
        assert_eq!(doc.count_class(*item, classes::ITEM_INNER), 1);
        assert_eq!(doc.count_class(*item, classes::CONTENT_WRAP), 1);
        let inner = doc.children(*item);
        assert_eq!(inner.len(), 1);
        assert!(doc.has_class(inner[0], classes::ITEM_INNER));
    }
}

#[test]
fn reinitialize_replaces_the_previous_setup() {
    let (doc, fx) = single(6);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);
    timeline.initialize(&[fx.container], &horizontal(), 0);

    let doc = timeline.document();
    assert_eq!(doc.count_class(fx.container, classes::NAV_BUTTON), 2);
    assert_eq!(doc.count_class(fx.container, classes::DIVIDER), 1);
    assert_eq!(timeline.ids(), ["tl"]);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 2);
}

#[test]
fn missing_markup_is_reported_and_skipped() {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let body = doc.body();
    let no_wrap = doc.element("div", "timeline");
    doc.set_attribute(no_wrap, "id", "broken");
    doc.append_child(body, no_wrap);

    let no_items = doc.element("div", "timeline timeline--dark");
    let wrap = doc.element("div", classes::WRAP);
    doc.append_child(body, no_items);
    doc.append_child(no_items, wrap);

    let good = timeline_markup(&mut doc, Some("good"), &[150.0; 4]);

    let mut timeline = recorded(doc);
    let count = timeline.initialize(&[no_wrap, no_items, good.container], &horizontal(), 0);
    assert_eq!(count, 1);
    assert_eq!(timeline.ids(), ["good"]);

    let errors = &timeline.collaborators().errors;
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, no_wrap);
    assert_eq!(errors[0].1, ErrorKind::MissingElement);
    assert_eq!(
        errors[0].2,
        ".timeline__wrap could not be found as a descendant of #broken"
    );
    assert_eq!(errors[1].0, no_items);
    assert_eq!(
        errors[1].2,
        ".timeline__items could not be found as a descendant of .timeline__wrap in .timeline.timeline--dark"
    );
    assert!(!timeline.document().has_class(no_wrap, classes::LOADED));
}

#[test]
fn empty_containers_are_skipped_quietly() {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let fx = timeline_markup(&mut doc, Some("empty"), &[]);
    let mut timeline = recorded(doc);
    assert_eq!(timeline.initialize(&[fx.container], &horizontal(), 0), 0);
    assert!(timeline.ids().is_empty());
    assert!(timeline.collaborators().errors.is_empty());
    assert!(!timeline.document().has_class(fx.container, classes::LOADED));
}

#[test]
fn instance_ids_come_from_markup_or_a_counter() {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let first = timeline_markup(&mut doc, None, &[150.0; 2]);
    let second = timeline_markup(&mut doc, None, &[150.0; 2]);
    let custom = timeline_markup(&mut doc, None, &[150.0; 2]);
    doc.set_attribute(custom.container, "data-timeline-id", "custom");
    let named = timeline_markup(&mut doc, Some("named"), &[150.0; 2]);

    let mut timeline = Timeline::new(doc);
    let containers = [first.container, second.container, custom.container, named.container];
    assert_eq!(timeline.initialize(&containers, &Options::new(), 0), 4);
    assert_eq!(timeline.ids(), ["custom", "named", "timeline-1", "timeline-2"]);
    assert_eq!(
        timeline
            .document()
            .attribute(first.container, "data-timeline-id")
            .as_deref(),
        Some("timeline-1")
    );

    // Ids stay stable across re-initialization.
    timeline.initialize(&[first.container], &Options::new(), 10);
    assert_eq!(timeline.ids(), ["custom", "named", "timeline-1", "timeline-2"]);
}

#[test]
fn fade_in_follows_each_setup() {
    let (doc, fx) = single(4);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 1000);
    assert!(timeline.document().has_class(fx.container, classes::LOADED));
    assert_eq!(
        timeline.document().style(fx.container, "opacity").as_deref(),
        Some("0")
    );
    assert_eq!(timeline.next_deadline(), Some(1000 + FADE_IN_DELAY));

    timeline.advance(1000 + FADE_IN_DELAY - 1);
    assert_eq!(
        timeline.document().style(fx.container, "opacity").as_deref(),
        Some("0")
    );
    timeline.advance(1000 + FADE_IN_DELAY);
    assert_eq!(
        timeline.document().style(fx.container, "opacity").as_deref(),
        Some("1")
    );
}

#[test]
fn stale_fade_in_is_ignored() {
    let (doc, fx) = single(4);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);

    timeline
        .document_mut()
        .set_viewport(Size::new(1200.0, VIEWPORT.height));
    timeline.on_resize(100);
    timeline.advance(100 + RESIZE_DEBOUNCE);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 2);

    // The first setup's timer fires but belongs to generation 1.
    timeline.advance(FADE_IN_DELAY);
    assert_eq!(
        timeline.document().style(fx.container, "opacity").as_deref(),
        Some("0")
    );
    timeline.advance(100 + RESIZE_DEBOUNCE + FADE_IN_DELAY);
    assert_eq!(
        timeline.document().style(fx.container, "opacity").as_deref(),
        Some("1")
    );
}

#[test]
fn resize_without_width_change_keeps_the_layout() {
    let (doc, fx) = single(6);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);
    let buttons = nav_buttons(&timeline, fx.container);

    timeline
        .document_mut()
        .set_viewport(Size::new(VIEWPORT.width, 700.0));
    timeline.on_resize(50);
    timeline.advance(50 + RESIZE_DEBOUNCE);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 1);
    assert_eq!(nav_buttons(&timeline, fx.container), buttons);
}

#[test]
fn pending_resize_survives_a_later_initialize() {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let a = timeline_markup(&mut doc, Some("a"), &[150.0; 6]);
    let b = timeline_markup(&mut doc, Some("b"), &[150.0; 6]);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[a.container], &horizontal(), 0);

    timeline
        .document_mut()
        .set_viewport(Size::new(500.0, VIEWPORT.height));
    timeline.on_resize(10);
    timeline.initialize(&[b.container], &horizontal(), 20);
    assert_eq!(
        timeline.instance("b").unwrap().orientation(),
        Some(Orientation::Vertical)
    );

    timeline.advance(10 + RESIZE_DEBOUNCE);
    let a_info = timeline.instance("a").unwrap();
    assert_eq!(a_info.orientation(), Some(Orientation::Vertical));
    assert_eq!(a_info.generation(), 2);
    assert!(timeline.document().has_class(a.container, classes::MOBILE));
    // Already laid out at this width.
    assert_eq!(timeline.instance("b").unwrap().generation(), 1);
}

#[test]
fn resize_bursts_collapse_into_one_relayout() {
    let (doc, fx) = single(6);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);

    timeline
        .document_mut()
        .set_viewport(Size::new(900.0, VIEWPORT.height));
    timeline.on_resize(100);
    timeline.on_resize(200);
    timeline.on_resize(300);
    timeline.advance(100 + RESIZE_DEBOUNCE);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 1);
    timeline.advance(300 + RESIZE_DEBOUNCE);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 2);
    timeline.advance(10_000);
    assert_eq!(timeline.instance("tl").unwrap().generation(), 2);
    assert_eq!(
        timeline.document().count_class(fx.container, classes::NAV_BUTTON),
        2
    );
}

#[test]
fn crossing_the_breakpoint_switches_mode() {
    let (doc, fx) = single(6);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);
    assert_eq!(
        timeline.instance("tl").unwrap().orientation(),
        Some(Orientation::Horizontal)
    );

    timeline
        .document_mut()
        .set_viewport(Size::new(500.0, VIEWPORT.height));
    timeline.on_resize(0);
    timeline.advance(RESIZE_DEBOUNCE);
    let info = timeline.instance("tl").unwrap();
    assert_eq!(info.orientation(), Some(Orientation::Vertical));
    assert_eq!(info.listener_count(), fx.items.len());
    let doc = timeline.document();
    assert!(doc.has_class(fx.container, classes::MOBILE));
    assert!(!doc.has_class(fx.container, classes::HORIZONTAL));
    assert_eq!(doc.count_class(fx.container, classes::NAV_BUTTON), 0);
    assert_eq!(doc.count_class(fx.container, classes::DIVIDER), 0);
    assert_eq!(doc.style(fx.items[0], "width"), None);

    timeline
        .document_mut()
        .set_viewport(Size::new(1100.0, VIEWPORT.height));
    timeline.on_resize(1000);
    timeline.advance(1000 + RESIZE_DEBOUNCE);
    assert_eq!(
        timeline.instance("tl").unwrap().orientation(),
        Some(Orientation::Horizontal)
    );
    let doc = timeline.document();
    assert!(!doc.has_class(fx.container, classes::MOBILE));
    assert!(!doc.has_class(fx.items[0], "timeline__item--left"));
    assert_eq!(doc.count_class(fx.container, classes::NAV_BUTTON), 2);
}

#[test]
fn initialized_events_reach_scoped_then_global_listeners() {
    let (doc, fx) = single(4);
    let mut timeline = Timeline::new(doc);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&seen);
    timeline.events_mut().subscribe(fx.container, move |e| {
        log.borrow_mut().push(format!("scoped {} {}", e.id, e.generation));
    });
    let log = Rc::clone(&seen);
    let global = timeline.events_mut().subscribe_global(move |e| {
        assert_eq!(e.orientation, Orientation::Horizontal);
        log.borrow_mut().push(format!("global {} {}", e.id, e.generation));
    });

    timeline.initialize(&[fx.container], &horizontal(), 0);
    assert_eq!(*seen.borrow(), ["scoped tl 1", "global tl 1"]);

    assert!(timeline.events_mut().unsubscribe(global));
    timeline.initialize(&[fx.container], &horizontal(), 0);
    assert_eq!(*seen.borrow(), ["scoped tl 1", "global tl 1", "scoped tl 2"]);
}

#[test]
fn colours_go_to_the_theming_collaborator() {
    let (mut doc, fx) = single(3);
    doc.set_attribute(fx.container, "data-line-color", "#0a0");
    let mut timeline = recorded(doc);
    let options = horizontal().set(Key::NodeColor, "#f00");
    timeline.initialize(&[fx.container], &options, 0);

    let colors = &timeline.collaborators().colors;
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].0, fx.container);
    assert_eq!(colors[0].1.node.as_deref(), Some("#f00"));
    assert_eq!(colors[0].1.line.as_deref(), Some("#0a0"));
    assert_eq!(colors[0].1.nav, None);
}

#[test]
fn no_colours_no_theming_call() {
    let (doc, fx) = single(3);
    let mut timeline = recorded(doc);
    timeline.initialize(&[fx.container], &horizontal(), 0);
    assert!(timeline.collaborators().colors.is_empty());
}

#[test]
fn vertical_items_open_their_modal() {
    let (doc, fx) = single(3);
    let mut timeline = recorded(doc);
    let options = Options::new().set(Key::Mode, "vertical").set(Key::MaxWidth, 2000);
    timeline.initialize(&[fx.container], &options, 0);

    let heading = timeline
        .document()
        .find_descendant(fx.items[1], chronoline_engine::Descendant::Heading)
        .unwrap();
    assert_eq!(
        timeline
            .document()
            .attribute(fx.items[1], "data-modal-title")
            .as_deref(),
        Some("Event 1")
    );
    assert!(timeline.dispatch_click(heading));
    assert_eq!(timeline.collaborators().modals, [fx.items[1]]);
    assert_eq!(timeline.instance("tl").unwrap().active_index(), None);
}

#[test]
fn containers_are_independent() {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let a = timeline_markup(&mut doc, Some("a"), &[150.0; 6]);
    let b = timeline_markup(&mut doc, Some("b"), &[150.0; 6]);
    let mut timeline = Timeline::new(doc);
    timeline.initialize(&[a.container, b.container], &horizontal(), 0);

    let (_, next_a) = nav_buttons(&timeline, a.container);
    assert!(timeline.dispatch_click(next_a));
    assert_eq!(timeline.instance("a").unwrap().active_index(), Some(1));
    assert_eq!(timeline.instance("b").unwrap().active_index(), Some(0));
}
