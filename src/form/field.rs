//! Form fields and their key handling

use super::binding::Binding;
use crate::config::KeyHint;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use tui_input::InputRequest;

type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Single-line text entry
pub struct Input {
    title: String,
    description: Option<String>,
    placeholder: Option<String>,
    value: Binding<String>,
    input: tui_input::Input,
    char_limit: Option<usize>,
    validator: Option<Validator>,
}

impl Input {
    pub fn new(title: impl Into<String>, value: &Binding<String>) -> Self {
        Input {
            title: title.into(),
            description: None,
            placeholder: None,
            value: value.clone(),
            input: tui_input::Input::new(value.get()),
            char_limit: None,
            validator: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn validate(mut self, validator: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    fn at_limit(&self) -> bool {
        self.char_limit
            .is_some_and(|limit| self.input.value().chars().count() >= limit)
    }

    fn insert(&mut self, c: char) {
        if !self.at_limit() {
            self.input.handle(InputRequest::InsertChar(c));
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let request = match key.code {
            KeyCode::Char(c) if !ctrl && !alt => return self.insert(c),
            KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
            KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
            KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
            KeyCode::Backspace if ctrl || alt => InputRequest::DeletePrevWord,
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left if ctrl || alt => InputRequest::GoToPrevWord,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right if ctrl || alt => InputRequest::GoToNextWord,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };
        self.input.handle(request);
    }

    fn paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    fn value_line(&self, focused: bool) -> Line<'static> {
        let text_style = Style::default().fg(DEFAULT_THEME.fg);
        let value = self.input.value();
        let mut spans = vec![Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary))];

        if value.is_empty() && !focused {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            spans.push(Span::styled(placeholder, Style::default().fg(DEFAULT_THEME.comment)));
            return Line::from(spans);
        }
        if !focused {
            spans.push(Span::styled(value.to_string(), text_style));
            return Line::from(spans);
        }

        // cursor() counts chars
        let before: String = value.chars().take(self.input.cursor()).collect();
        let mut rest = value.chars().skip(self.input.cursor());
        let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".into());
        spans.push(Span::styled(before, text_style));
        spans.push(Span::styled(
            under_cursor,
            text_style.add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(rest.collect::<String>(), text_style));
        Line::from(spans)
    }
}

/// Yes/no choice
pub struct Confirm {
    title: String,
    description: Option<String>,
    affirmative: String,
    negative: String,
    value: Binding<bool>,
    current: bool,
}

impl Confirm {
    pub fn new(title: impl Into<String>, value: &Binding<bool>) -> Self {
        Confirm {
            title: title.into(),
            description: None,
            affirmative: String::from("Yes"),
            negative: String::from("No"),
            current: value.get(),
            value: value.clone(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn affirmative(mut self, label: impl Into<String>) -> Self {
        self.affirmative = label.into();
        self
    }

    pub fn negative(mut self, label: impl Into<String>) -> Self {
        self.negative = label.into();
        self
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('y') => self.current = true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => self.current = false,
            KeyCode::Char(' ') => self.current = !self.current,
            _ => {}
        }
    }
}

/// Pick exactly one of several options
pub struct Select {
    title: String,
    description: Option<String>,
    options: Vec<String>,
    value: Binding<usize>,
    cursor: usize,
}

impl Select {
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        value: &Binding<usize>,
    ) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let cursor = value.get().min(options.len().saturating_sub(1));
        Select {
            title: title.into(),
            description: None,
            options,
            value: value.clone(),
            cursor,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.options.len().saturating_sub(1));
            }
            _ => {}
        }
    }
}

/// Toggle any number of options on or off
pub struct MultiSelect {
    title: String,
    description: Option<String>,
    options: Vec<String>,
    value: Binding<Vec<bool>>,
    selected: Vec<bool>,
    cursor: usize,
}

impl MultiSelect {
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        value: &Binding<Vec<bool>>,
    ) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let mut selected = value.get();
        selected.resize(options.len(), false);
        MultiSelect {
            title: title.into(),
            description: None,
            options,
            value: value.clone(),
            selected,
            cursor: 0,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.options.len().saturating_sub(1));
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(on) = self.selected.get_mut(self.cursor) {
                    *on = !*on;
                }
            }
            KeyCode::Char('a') => {
                let all = self.selected.iter().all(|&on| on);
                self.selected.iter_mut().for_each(|on| *on = !all);
            }
            _ => {}
        }
    }
}

/// One entry of a [`Form`](super::Form)
pub enum Field {
    Input(Input),
    Confirm(Confirm),
    Select(Select),
    MultiSelect(MultiSelect),
}

impl From<Input> for Field {
    fn from(field: Input) -> Self {
        Field::Input(field)
    }
}

impl From<Confirm> for Field {
    fn from(field: Confirm) -> Self {
        Field::Confirm(field)
    }
}

impl From<Select> for Field {
    fn from(field: Select) -> Self {
        Field::Select(field)
    }
}

impl From<MultiSelect> for Field {
    fn from(field: MultiSelect) -> Self {
        Field::MultiSelect(field)
    }
}

impl Field {
    pub fn title(&self) -> &str {
        match self {
            Field::Input(f) => &f.title,
            Field::Confirm(f) => &f.title,
            Field::Select(f) => &f.title,
            Field::MultiSelect(f) => &f.title,
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Field::Input(f) => f.description.as_deref(),
            Field::Confirm(f) => f.description.as_deref(),
            Field::Select(f) => f.description.as_deref(),
            Field::MultiSelect(f) => f.description.as_deref(),
        }
    }

    pub(super) fn handle_key(&mut self, key: &KeyEvent) {
        match self {
            Field::Input(f) => f.handle_key(key),
            Field::Confirm(f) => f.handle_key(key),
            Field::Select(f) => f.handle_key(key),
            Field::MultiSelect(f) => f.handle_key(key),
        }
    }

    pub(super) fn paste(&mut self, text: &str) {
        if let Field::Input(f) = self {
            f.paste(text);
        }
    }

    /// Run the field's own check on its current, uncommitted value
    pub(super) fn validate(&self) -> Result<(), String> {
        match self {
            Field::Input(f) => match &f.validator {
                Some(validator) => validator(f.input.value()),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// Write the current value through to the caller's binding
    pub(super) fn commit(&self) {
        match self {
            Field::Input(f) => f.value.set(f.input.value().to_string()),
            Field::Confirm(f) => f.value.set(f.current),
            Field::Select(f) => f.value.set(f.cursor),
            Field::MultiSelect(f) => f.value.set(f.selected.clone()),
        }
    }

    pub(super) fn hints(&self) -> Vec<KeyHint> {
        match self {
            Field::Input(_) => vec![KeyHint::new("←/→", "move")],
            Field::Confirm(_) => vec![KeyHint::new("←/→", "choose"), KeyHint::new("y/n", "yes/no")],
            Field::Select(_) => vec![KeyHint::new("↑/↓", "choose")],
            Field::MultiSelect(_) => vec![
                KeyHint::new("↑/↓", "move"),
                KeyHint::new("x", "toggle"),
                KeyHint::new("a", "all"),
            ],
        }
    }

    pub(super) fn lines(&self, focused: bool, error: Option<&str>) -> Vec<Line<'static>> {
        let bar = if focused {
            Span::styled("┃ ", Style::default().fg(DEFAULT_THEME.border_focused))
        } else {
            Span::raw("  ")
        };
        let title_style = if focused {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let mut title_spans = vec![bar.clone(), Span::styled(self.title().to_string(), title_style)];
        if error.is_some() {
            title_spans.push(Span::styled(" *", Style::default().fg(DEFAULT_THEME.error)));
        }
        let mut lines = vec![Line::from(title_spans)];

        if let Some(description) = self.description() {
            lines.push(Line::from(vec![
                bar.clone(),
                Span::styled(description.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
            ]));
        }

        let body: Vec<Line<'static>> = match self {
            Field::Input(f) => vec![f.value_line(focused)],
            Field::Confirm(f) => vec![confirm_line(f)],
            Field::Select(f) => f
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| option_line(option, i == f.cursor && focused, i == f.cursor, None))
                .collect(),
            Field::MultiSelect(f) => f
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    option_line(option, i == f.cursor && focused, f.selected[i], Some(f.selected[i]))
                })
                .collect(),
        };

        for line in body {
            let mut spans = vec![bar.clone()];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }

        if let Some(error) = error {
            lines.push(Line::from(vec![
                bar,
                Span::styled(format!("* {}", error), Style::default().fg(DEFAULT_THEME.error)),
            ]));
        }
        lines
    }
}

fn confirm_line(field: &Confirm) -> Line<'static> {
    let chosen = Style::default()
        .fg(DEFAULT_THEME.bg)
        .bg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let other = Style::default()
        .fg(DEFAULT_THEME.fg)
        .bg(DEFAULT_THEME.current_line_bg);
    let (yes, no) = if field.current { (chosen, other) } else { (other, chosen) };
    Line::from(vec![
        Span::styled(format!(" {} ", field.affirmative), yes),
        Span::raw("  "),
        Span::styled(format!(" {} ", field.negative), no),
    ])
}

fn option_line(option: &str, under_cursor: bool, highlighted: bool, toggle: Option<bool>) -> Line<'static> {
    let marker = if under_cursor { "> " } else { "  " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary))];
    if let Some(on) = toggle {
        let (mark, style) = if on {
            ("[•] ", Style::default().fg(DEFAULT_THEME.success))
        } else {
            ("[ ] ", Style::default().fg(DEFAULT_THEME.comment))
        };
        spans.push(Span::styled(mark, style));
    }
    let style = if highlighted {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    spans.push(Span::styled(option.to_string(), style));
    Line::from(spans)
}
