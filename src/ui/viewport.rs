//! Scrollable read-only text panel

use crate::config::KeyMap;
use crate::runtime::{Message, Signal};
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A fixed-size window onto a block of text.
///
/// Content is word-wrapped to the viewport width; resizing rewraps but keeps
/// the scroll offset, only clamping it to the new bounds.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    content: String,
    lines: Vec<String>,
    y_offset: usize,
    /// Row on screen the viewport starts at
    pub y_position: u16,
    closed: bool,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport {
            width,
            height,
            ..Viewport::default()
        }
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.rewrap();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        let rewrap = width != self.width;
        self.width = width;
        self.height = height;
        if rewrap {
            self.rewrap();
        } else {
            self.clamp();
        }
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    fn clamp(&mut self) {
        self.y_offset = self.y_offset.min(self.max_offset());
    }

    fn rewrap(&mut self) {
        self.lines = wrap(&self.content, self.width);
        self.clamp();
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_offset()
    }

    /// Share of the content above the bottom edge, 0.0 to 1.0
    pub fn scroll_percent(&self) -> f64 {
        if self.lines.len() <= self.height as usize {
            return 1.0;
        }
        let bottom = self.y_offset + self.height as usize;
        (bottom as f64 / self.lines.len() as f64).clamp(0.0, 1.0)
    }

    pub fn line_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    pub fn line_down(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_add(n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.line_up(self.height.max(1) as usize);
    }

    pub fn page_down(&mut self) {
        self.line_down(self.height.max(1) as usize);
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_offset();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Scroll in response to a viewport key; other keys are ignored
    pub fn handle_key(&mut self, key: &KeyEvent, keys: &KeyMap) {
        if self.closed {
            return;
        }
        if keys.scroll_up.matches(key) {
            self.line_up(1);
        } else if keys.scroll_down.matches(key) {
            self.line_down(1);
        } else if keys.page_up.matches(key) {
            self.page_up();
        } else if keys.page_down.matches(key) {
            self.page_down();
        } else if keys.top.matches(key) {
            self.goto_top();
        } else if keys.bottom.matches(key) {
            self.goto_bottom();
        }
    }

    pub fn update(&mut self, msg: &Message, keys: &KeyMap) {
        match msg {
            Message::Key(key) => self.handle_key(key, keys),
            Message::Signal(Signal::EndOfSession) => self.closed = true,
            Message::Resize { .. } | Message::Signal(Signal::Interrupt) | Message::Other(_) => {}
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.y_offset)
            .take(self.height.min(area.height) as usize)
            .map(|line| Line::from(Span::styled(line.as_str(), style)))
            .collect();
        Paragraph::new(visible).render(area, buf);
    }
}

/// Greedy word wrap that keeps indentation and runs of spaces.
///
/// Whitespace at a wrap point is dropped; words longer than `width` are split.
fn wrap(content: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut out = Vec::new();

    for raw in content.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        let mut rest = raw.trim_end();
        while !rest.is_empty() {
            let word_start = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            let (gap, tail) = rest.split_at(word_start);
            let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
            let (word, tail) = tail.split_at(word_end);
            rest = tail;

            let mut gap = gap;
            let needed = Span::raw(gap).width() + Span::raw(word).width();
            if line_width > 0 && line_width + needed > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
                gap = "";
            }
            for c in gap.chars().chain(word.chars()) {
                let c_width = Span::raw(c.to_string()).width();
                if line_width > 0 && line_width + c_width > width {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += c_width;
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> String {
        (1..=n).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_keeps_indentation_and_spacing() {
        assert_eq!(wrap("a  b", 10), vec!["a  b"]);
        assert_eq!(wrap("  aa bb", 5), vec!["  aa", "bb"]);
        assert_eq!(wrap("    cmd --flag  value  ", 40), vec!["    cmd --flag  value"]);
    }

    #[test]
    fn test_render_shows_text_as_written() {
        let mut vp = Viewport::new(40, 5);
        vp.set_content("fastqc\n  Quality control report for raw reads.\n    cmd --flag  value");

        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        vp.render(area, &mut buf, Style::default());

        let row = |y: u16| -> String { (0..40).map(|x| buf[(x, y)].symbol()).collect() };
        assert_eq!(row(0).trim_end(), "fastqc");
        assert_eq!(row(1).trim_end(), "  Quality control report for raw reads.");
        assert_eq!(row(2).trim_end(), "    cmd --flag  value");
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut vp = Viewport::new(20, 4);
        vp.set_content(&numbered(10));

        vp.line_up(1);
        assert!(vp.at_top());
        vp.page_down();
        assert_eq!(vp.y_offset(), 4);
        vp.goto_bottom();
        assert_eq!(vp.y_offset(), 6);
        vp.line_down(5);
        assert_eq!(vp.y_offset(), 6);
        assert!(vp.at_bottom());
        assert_eq!(vp.scroll_percent(), 1.0);
    }

    #[test]
    fn test_resize_keeps_offset() {
        let mut vp = Viewport::new(20, 4);
        vp.set_content(&numbered(10));
        vp.line_down(3);

        vp.set_size(20, 5);
        assert_eq!(vp.y_offset(), 3);

        // Taller than the content: offset clamps to zero
        vp.set_size(20, 20);
        assert_eq!(vp.y_offset(), 0);
        assert_eq!(vp.content(), numbered(10));
    }

    #[test]
    fn test_closed_viewport_ignores_keys() {
        let keys = KeyMap::default();
        let mut vp = Viewport::new(20, 2);
        vp.set_content(&numbered(10));

        vp.update(&Message::Signal(Signal::EndOfSession), &keys);
        vp.update(
            &Message::Key(KeyEvent::new(
                crossterm::event::KeyCode::PageDown,
                crossterm::event::KeyModifiers::NONE,
            )),
            &keys,
        );
        assert!(vp.is_closed());
        assert!(vp.at_top());
    }
}
