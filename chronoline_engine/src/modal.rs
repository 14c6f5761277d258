// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline modal data on items.

use crate::{Descendant, Document, classes};

pub(crate) const TITLE: &str = "data-modal-title";
pub(crate) const CONTENT: &str = "data-modal-content";
pub(crate) const IMAGE: &str = "data-modal-image";
pub(crate) const HTML: &str = "data-modal-html";
/// Marks an item whose modal click binding is live.
pub(crate) const BOUND: &str = "data-modal-bound";

/// Fills in missing modal attributes from the item's content and reports
/// whether the item has any modal data.
///
/// The title comes from the first heading, the content from the first
/// paragraph and the image from the first image's `src`.
pub(crate) fn prepare<D: Document>(doc: &mut D, item: D::Element) -> bool {
    let content = doc.find_by_class(item, classes::CONTENT).unwrap_or(item);

    if doc.attribute(item, TITLE).is_none()
        && let Some(text) = descendant_text(doc, content, Descendant::Heading)
    {
        doc.set_attribute(item, TITLE, &text);
    }
    if doc.attribute(item, CONTENT).is_none()
        && let Some(text) = descendant_text(doc, content, Descendant::Paragraph)
    {
        doc.set_attribute(item, CONTENT, &text);
    }
    if doc.attribute(item, IMAGE).is_none() {
        let src = doc
            .find_descendant(content, Descendant::Image)
            .and_then(|img| doc.attribute(img, "src"))
            .filter(|src| !src.is_empty());
        if let Some(src) = src {
            doc.set_attribute(item, IMAGE, &src);
        }
    }

    [TITLE, CONTENT, IMAGE, HTML]
        .into_iter()
        .any(|name| doc.attribute(item, name).is_some())
}

fn descendant_text<D: Document>(
    doc: &D,
    root: D::Element,
    kind: Descendant,
) -> Option<alloc::string::String> {
    let el = doc.find_descendant(root, kind)?;
    let text = doc.text_content(el);
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.into())
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{CONTENT, IMAGE, TITLE, prepare};
    use crate::{Document, MemoryDocument, classes};

    #[test]
    fn derives_missing_fields_only() {
        let mut doc = MemoryDocument::new(Size::new(800.0, 600.0));
        let item = doc.element("div", "timeline__item");
        let content = doc.element("div", classes::CONTENT);
        let h = doc.element("h3", "");
        let p = doc.element("p", "");
        let img = doc.element("img", "");
        doc.append_child(item, content);
        doc.append_child(content, h);
        doc.append_child(content, p);
        doc.append_child(content, img);
        doc.set_text(h, "  1969  ");
        doc.set_text(p, "Moon landing");
        doc.set_attribute(img, "src", "moon.jpg");
        doc.set_attribute(item, CONTENT, "Custom");

        assert!(prepare(&mut doc, item));
        assert_eq!(doc.attribute(item, TITLE).as_deref(), Some("1969"));
        assert_eq!(doc.attribute(item, CONTENT).as_deref(), Some("Custom"));
        assert_eq!(doc.attribute(item, IMAGE).as_deref(), Some("moon.jpg"));
    }

    #[test]
    fn plain_items_have_no_modal() {
        let mut doc = MemoryDocument::new(Size::new(800.0, 600.0));
        let item = doc.element("div", "timeline__item");
        let content = doc.element("div", classes::CONTENT);
        doc.append_child(item, content);
        doc.set_text(content, "just text");
        assert!(!prepare(&mut doc, item));
    }
}
