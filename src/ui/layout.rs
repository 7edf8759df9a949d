//! Where each part of the form screen goes for a given terminal size
//!
//! ```text
//! ┌ header ─────────────────────────────┐
//! │                                      │
//! │ form            │ doc header         │
//! │ (field width)   │ viewport           │
//! │                 │ doc footer         │
//! │                                      │
//! └ footer ─────────────────────────────┘
//! ```
//!
//! The screen is never wider than the configured maximum and is padded by
//! one column on each side. The documentation panel takes whatever width the
//! form leaves. Header and footer heights come from their rendered content.

use ratatui::layout::Rect;

/// Columns of padding on each side of the screen
pub const BASE_PADDING: u16 = 1;

/// Columns between the form and the documentation panel
pub const DOC_GAP: u16 = 2;

/// Blank rows above and below the body
const BODY_MARGIN: u16 = 1;

/// Measured heights of the screen's chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    pub header: u16,
    pub footer: u16,
    pub doc_header: u16,
    pub doc_footer: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub header: Rect,
    pub form: Rect,
    pub doc_header: Rect,
    pub viewport: Rect,
    pub doc_footer: Rect,
    pub footer: Rect,
}

/// Usable screen width for a terminal `width` columns wide
pub fn content_width(width: u16, max_width: u16) -> u16 {
    width.min(max_width).saturating_sub(2 * BASE_PADDING)
}

pub fn compute(area: Rect, field_width: u16, max_width: u16, chrome: Chrome) -> PanelLayout {
    let width = content_width(area.width, max_width);
    let x = area.x + BASE_PADDING.min(area.width);

    let header = Rect::new(x, area.y, width, chrome.header);
    let body_y = area.y + chrome.header + BODY_MARGIN;
    let body_height = area
        .height
        .saturating_sub(chrome.header + chrome.footer + 2 * BODY_MARGIN);
    let footer = Rect::new(
        x,
        body_y + body_height + BODY_MARGIN,
        width,
        chrome.footer,
    );

    let form = Rect::new(x, body_y, field_width.min(width), body_height);

    let doc_x = form.right() + DOC_GAP;
    let doc_width = (x + width).saturating_sub(doc_x);
    let doc_header = Rect::new(doc_x, body_y, doc_width, chrome.doc_header.min(body_height));
    let viewport_height = body_height.saturating_sub(doc_header.height + chrome.doc_footer);
    let viewport = Rect::new(doc_x, doc_header.bottom(), doc_width, viewport_height);
    let doc_footer = Rect::new(
        doc_x,
        viewport.bottom(),
        doc_width,
        chrome.doc_footer.min(body_height - doc_header.height),
    );

    PanelLayout {
        header: header.intersection(area),
        form: form.intersection(area),
        doc_header: doc_header.intersection(area),
        viewport: viewport.intersection(area),
        doc_footer: doc_footer.intersection(area),
        footer: footer.intersection(area),
    }
}
