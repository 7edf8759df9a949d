//! Interactive forms whose fields write into caller-owned [`Binding`]s
//!
//! The screen only talks to a form through [`FormWidget`], so any widget that
//! can take messages, report whether it is done and draw itself can be shown.
//! [`Form`] is the implementation used by default:
//!
//! - Tab / Enter move to the next field, Shift+Tab to the previous one;
//! - Enter on the last field submits;
//! - a field's value is written to its binding when the field loses focus,
//!   and every field is written again on a successful submit.

pub mod binding;
pub mod field;

pub use binding::Binding;
pub use field::{Confirm, Field, Input, MultiSelect, Select};

use crate::config::KeyHint;
use crate::runtime::{Command, Message};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Paragraph, widgets::Widget};
use tracing::debug;

/// Lifecycle of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Still being filled in
    Normal,
    /// Submitted with every field valid
    Completed,
}

/// What the screen needs from a form
pub trait FormWidget {
    /// Prepare the form to be drawn inside a screen at `width` columns.
    /// The screen shows help and errors itself, so the form should not.
    fn embed(&mut self, width: u16);

    fn init(&mut self) -> Command {
        Command::None
    }

    fn update(&mut self, msg: &Message) -> Command;

    fn state(&self) -> FormState;

    /// Field-level errors, in field order
    fn errors(&self) -> Vec<String>;

    fn help(&self) -> Vec<KeyHint>;

    /// Rows needed to draw the whole form
    fn height(&self) -> u16;

    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A column of fields filled in top to bottom
pub struct Form {
    fields: Vec<Field>,
    errors: Vec<Option<String>>,
    focus: usize,
    state: FormState,
    width: u16,
    show_help: bool,
    show_errors: bool,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        let errors = vec![None; fields.len()];
        Form {
            fields,
            errors,
            focus: 0,
            state: FormState::Normal,
            width: crate::config::FIELD_WIDTH,
            show_help: true,
            show_errors: true,
        }
    }

    /// Convenience for building a form from fields of mixed kinds
    pub fn with_field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self.errors.push(None);
        self
    }

    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validate the focused field and move on if it passes
    fn next_field(&mut self) {
        if !self.check(self.focus) {
            return;
        }
        self.fields[self.focus].commit();
        if self.focus + 1 >= self.fields.len() {
            self.submit();
        } else {
            self.focus += 1;
        }
    }

    fn prev_field(&mut self) {
        if let Some(field) = self.fields.get(self.focus) {
            field.commit();
        }
        self.focus = self.focus.saturating_sub(1);
    }

    fn submit(&mut self) {
        let mut first_invalid = None;
        for idx in 0..self.fields.len() {
            if !self.check(idx) && first_invalid.is_none() {
                first_invalid = Some(idx);
            }
        }
        match first_invalid {
            Some(idx) => {
                debug!(field = idx, "submit rejected");
                self.focus = idx;
            }
            None => {
                self.fields.iter().for_each(Field::commit);
                self.state = FormState::Completed;
                debug!("form completed");
            }
        }
    }

    /// Re-run a field's validator and remember the result
    fn check(&mut self, idx: usize) -> bool {
        let Some(field) = self.fields.get(idx) else {
            return true;
        };
        let result = field.validate();
        let ok = result.is_ok();
        self.errors[idx] = result.err();
        ok
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if self.fields.is_empty() {
            if key.code == KeyCode::Enter {
                self.state = FormState::Completed;
            }
            return;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::Enter, KeyModifiers::NONE) => self.next_field(),
            (KeyCode::BackTab, _) => self.prev_field(),
            _ => {
                self.fields[self.focus].handle_key(key);
                if self.errors[self.focus].is_some() {
                    self.check(self.focus);
                }
            }
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::raw(""));
            }
            let error = if self.show_errors {
                self.errors[idx].as_deref()
            } else {
                None
            };
            lines.extend(field.lines(idx == self.focus, error));
        }
        if self.show_help {
            let help = self
                .help()
                .iter()
                .map(|hint| format!("{} {}", hint.key, hint.desc))
                .collect::<Vec<_>>()
                .join(" • ");
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                help,
                ratatui::style::Style::default().fg(crate::ui::theme::DEFAULT_THEME.comment),
            ));
        }
        lines
    }
}

impl FormWidget for Form {
    fn embed(&mut self, width: u16) {
        self.width = width;
        self.show_help = false;
        self.show_errors = false;
    }

    fn update(&mut self, msg: &Message) -> Command {
        if self.state == FormState::Completed {
            return Command::None;
        }
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Other(Event::Paste(text)) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.paste(text);
                }
            }
            Message::Resize { .. } | Message::Signal(_) | Message::Other(_) => {}
        }
        Command::None
    }

    fn state(&self) -> FormState {
        self.state
    }

    fn errors(&self) -> Vec<String> {
        self.fields
            .iter()
            .zip(&self.errors)
            .filter_map(|(field, error)| {
                error
                    .as_ref()
                    .map(|error| format!("{}: {}", field.title(), error))
            })
            .collect()
    }

    fn help(&self) -> Vec<KeyHint> {
        let mut hints = self
            .fields
            .get(self.focus)
            .map(Field::hints)
            .unwrap_or_default();
        hints.push(KeyHint::new("shift+tab", "back"));
        let last = self.focus + 1 >= self.fields.len();
        hints.push(KeyHint::new("enter", if last { "submit" } else { "next" }));
        hints
    }

    fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            width: area.width.min(self.width),
            ..area
        };
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn required(s: &str) -> Result<(), String> {
        if s.trim().is_empty() {
            Err(String::from("required"))
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_form_completes_after_last_field() {
        let name = Binding::new(String::new());
        let enabled = Binding::new(false);
        let mut form = Form::new(vec![])
            .with_field(Input::new("Name", &name))
            .with_field(Confirm::new("Enabled", &enabled));

        form.update(&key(KeyCode::Char('z')));
        form.update(&key(KeyCode::Enter));
        // Value is written as soon as the field loses focus
        assert_eq!(name.get(), "z");
        assert_eq!(form.focused(), 1);

        form.update(&key(KeyCode::Char('y')));
        form.update(&key(KeyCode::Enter));
        assert_eq!(form.state(), FormState::Completed);
        assert!(enabled.get());

        // Completed forms ignore further input
        form.update(&key(KeyCode::Char('n')));
        assert!(enabled.get());
    }

    #[test]
    fn test_invalid_field_blocks_navigation() {
        let dir = Binding::new(String::new());
        let mut form = Form::new(vec![Input::new("Dir", &dir).validate(required).into()]);

        form.update(&key(KeyCode::Enter));
        assert_eq!(form.state(), FormState::Normal);
        assert_eq!(form.errors(), vec![String::from("Dir: required")]);

        // Fixing the value clears the error while typing
        form.update(&key(KeyCode::Char('o')));
        assert!(form.errors().is_empty());

        form.update(&key(KeyCode::Enter));
        assert_eq!(form.state(), FormState::Completed);
        assert_eq!(dir.get(), "o");
    }

    #[test]
    fn test_back_tab_returns_to_previous_field() {
        let a = Binding::new(String::new());
        let b = Binding::new(String::new());
        let mut form = Form::new(vec![])
            .with_field(Input::new("A", &a))
            .with_field(Input::new("B", &b));

        form.update(&key(KeyCode::Tab));
        assert_eq!(form.focused(), 1);
        form.update(&key(KeyCode::BackTab));
        assert_eq!(form.focused(), 0);
        form.update(&key(KeyCode::BackTab));
        assert_eq!(form.focused(), 0);
    }

    #[test]
    fn test_paste_goes_to_focused_input() {
        let name = Binding::new(String::new());
        let mut form = Form::new(vec![Input::new("Name", &name).into()]);

        form.update(&Message::Other(Event::Paste(String::from("hello"))));
        form.update(&key(KeyCode::Enter));
        assert_eq!(name.get(), "hello");
    }

    #[test]
    fn test_embed_hides_help() {
        let name = Binding::new(String::new());
        let mut form = Form::new(vec![Input::new("Name", &name).into()]);
        let with_help = form.height();

        form.embed(30);
        assert_eq!(form.height(), with_help - 2);
        assert_eq!(form.help().last().map(|h| h.desc.as_str()), Some("submit"));
    }
}
