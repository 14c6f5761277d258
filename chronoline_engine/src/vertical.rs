// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical mode bound to a document.

use alloc::string::ToString;
use alloc::vec::Vec;

use chronoline_layout::{
    Reveal, effective_trigger, in_trigger_region, placement, reveal_plan, trigger_line,
};
use chronoline_settings::{Orientation, resolve_side};

use crate::instance::{Binding, Instance, Phase, VerticalState};
use crate::{Document, classes};

/// Places items, reveals the ones already in view and starts watching the
/// rest.
pub(crate) fn setup<D: Document>(doc: &mut D, inst: &mut Instance<D::Element>, mobile: bool) {
    let viewport = doc.viewport();
    let settings = &inst.settings;
    let side = resolve_side(settings, Orientation::Vertical, settings.rtl_mode);
    let trigger = effective_trigger(viewport.height, &settings.vertical_trigger);
    let line = trigger_line(viewport.height, &trigger);

    let in_region: Vec<bool> = inst
        .items
        .iter()
        .map(|item| in_trigger_region(doc.bounding_rect(*item), viewport, line))
        .collect();

    let mut observed = Vec::new();
    for (index, (item, reveal)) in inst.items.iter().zip(reveal_plan(&in_region)).enumerate() {
        let place = placement(index, side, settings.vertical_start(), mobile);
        doc.add_class(*item, place.class());
        if reveal == Reveal::Deferred {
            doc.add_class(*item, classes::ANIMATED);
            observed.push(*item);
        }
    }

    let scroll_fallback = !doc.supports_visibility_observer();
    if scroll_fallback {
        inst.listeners.push(Binding::WindowScroll);
    }
    log::debug!(
        id = inst.id.as_str(), deferred = observed.len(), scroll_fallback = scroll_fallback;
        "vertical layout"
    );
    inst.phase = Phase::Vertical(VerticalState {
        observed,
        trigger,
        root_margin: trigger.to_string(),
        scroll_fallback,
    });
}

/// Reveals `item` if it is waiting. Returns `true` if it was.
pub(crate) fn reveal<D: Document>(doc: &mut D, inst: &mut Instance<D::Element>, item: D::Element) -> bool {
    let Phase::Vertical(state) = &mut inst.phase else {
        return false;
    };
    let Some(pos) = state.observed.iter().position(|e| *e == item) else {
        return false;
    };
    state.observed.remove(pos);
    doc.add_class(item, classes::FADE_IN);
    log::trace!("revealed {item:?}");
    true
}

/// Re-tests every waiting item against the trigger line. Returns how many
/// were revealed.
pub(crate) fn rescan<D: Document>(doc: &mut D, inst: &mut Instance<D::Element>) -> usize {
    let viewport = doc.viewport();
    let Phase::Vertical(state) = &inst.phase else {
        return 0;
    };
    let line = trigger_line(viewport.height, &state.trigger);
    let due: Vec<D::Element> = state
        .observed
        .iter()
        .copied()
        .filter(|item| in_trigger_region(doc.bounding_rect(*item), viewport, line))
        .collect();
    for item in &due {
        reveal(doc, inst, *item);
    }
    due.len()
}
