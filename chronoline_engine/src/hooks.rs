// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calls out to companion features.

use chronoline_settings::Colors;

use crate::{Document, ErrorKind};

/// Companion features the engine calls into.
///
/// Every method has a no-op default, so a host only implements what it
/// provides. Implementations must not panic; the engine treats each call as
/// fire-and-forget.
pub trait Collaborators<D: Document> {
    /// A container is missing required markup and was skipped.
    fn notify_error(
        &mut self,
        doc: &mut D,
        container: D::Element,
        kind: ErrorKind,
        details: &str,
    ) {
        let _ = (doc, container, kind, details);
    }

    /// Theme colours are configured for `container`. Called once per setup.
    fn apply_colors(&mut self, doc: &mut D, container: D::Element, colors: &Colors) {
        let _ = (doc, container, colors);
    }

    /// An item with modal data was clicked.
    ///
    /// The item carries `data-modal-title`, `data-modal-content`,
    /// `data-modal-image` and/or `data-modal-html`.
    fn open_modal(&mut self, doc: &mut D, item: D::Element) {
        let _ = (doc, item);
    }

    /// Horizontal navigation highlighted an item with a `data-node-id`.
    fn active_node_changed(&mut self, doc: &mut D, container: D::Element, node_id: &str) {
        let _ = (doc, container, node_id);
    }
}

/// Collaborators that do nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCollaborators;

impl<D: Document> Collaborators<D> for NoCollaborators {}
