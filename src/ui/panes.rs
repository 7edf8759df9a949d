//! Header, footer and documentation chrome
//!
//! Each function builds the [`Text`] for one strip of the screen. The screen
//! measures these before laying out, so a strip's height is whatever its
//! content needs.

use crate::config::KeyHint;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::text::{Line, Span, Text};

/// `label` followed by a rule that runs to `width`
fn boundary(label: Span<'static>, width: u16, errored: bool) -> Line<'static> {
    let rule_len = (width as usize).saturating_sub(label.width() + 1);
    Line::from(vec![
        label,
        Span::raw(" "),
        Span::styled("─".repeat(rule_len), DEFAULT_THEME.boundary(errored)),
    ])
}

/// The app title, or one line per form error
pub fn header_text(title: &str, errors: &[String], width: u16) -> Text<'static> {
    if errors.is_empty() {
        let label = Span::styled(format!(" {} ", title), DEFAULT_THEME.header_text());
        return Text::from(boundary(label, width, false));
    }
    let lines: Vec<Line> = errors
        .iter()
        .map(|error| {
            let label = Span::styled(format!(" {} ", error), DEFAULT_THEME.error_header_text());
            boundary(label, width, true)
        })
        .collect();
    Text::from(lines)
}

/// Key help, or a bare error-coloured rule while the form has errors.
///
/// Hints never break across lines; a hint that does not fit on the current
/// line starts a new one.
pub fn footer_text(hints: &[KeyHint], errored: bool, width: u16) -> Text<'static> {
    if errored {
        return Text::from(Line::styled(
            "─".repeat(width as usize),
            DEFAULT_THEME.boundary(true),
        ));
    }
    const SEP: &str = " • ";
    let width = width as usize;
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut line_width = 0;

    for hint in hints {
        let desc = format!(" {}", hint.desc);
        let hint_width = Span::raw(hint.key.as_str()).width() + Span::raw(desc.as_str()).width();
        if line_width > 0 && line_width + SEP.chars().count() + hint_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            line_width = 0;
        }
        if line_width > 0 {
            spans.push(Span::styled(SEP, DEFAULT_THEME.help_desc()));
            line_width += SEP.chars().count();
        }
        spans.push(Span::styled(hint.key.clone(), DEFAULT_THEME.help_key()));
        spans.push(Span::styled(desc, DEFAULT_THEME.help_desc()));
        line_width += hint_width;
    }
    lines.push(Line::from(spans));
    Text::from(lines)
}

pub fn doc_header_text(title: &str, width: u16) -> Text<'static> {
    let label = Span::styled(title.to_string(), DEFAULT_THEME.doc_title());
    Text::from(boundary(label, width, false))
}

/// A rule ending in the scroll position, e.g. `──── 42%`
pub fn doc_footer_text(percent: f64, width: u16) -> Text<'static> {
    let label = format!(" {:3.0}%", percent * 100.0);
    let rule_len = (width as usize).saturating_sub(label.len());
    Text::from(Line::from(vec![
        Span::styled("─".repeat(rule_len), DEFAULT_THEME.boundary(false)),
        Span::styled(label, DEFAULT_THEME.help_desc()),
    ]))
}
