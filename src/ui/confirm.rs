//! Yes/no prompt shown when a finished form fails the caller's check

use crate::config::{ConfirmText, KeyMap};
use crate::runtime::{Command, Message, Model, Signal};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const PROMPT_WIDTH: u16 = 64;
const PROMPT_HEIGHT: u16 = 8;

/// Asks whether to go back to the form (`true`) or stop (`false`)
pub struct ConfirmPrompt<'a> {
    text: &'a ConfirmText,
    keys: &'a KeyMap,
    choice: bool,
    done: bool,
}

impl<'a> ConfirmPrompt<'a> {
    /// `initial` is the choice highlighted when the prompt opens
    pub fn new(text: &'a ConfirmText, keys: &'a KeyMap, initial: bool) -> Self {
        ConfirmPrompt {
            text,
            keys,
            choice: initial,
            done: false,
        }
    }

    pub fn choice(&self) -> bool {
        self.choice
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn answer(&mut self, choice: bool) -> Command {
        self.choice = choice;
        self.done = true;
        Command::Quit
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Command {
        // Leaving the prompt any other way than answering means stop
        if self.keys.quit.matches(key) || self.keys.interrupt.matches(key) {
            return self.answer(false);
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.choice = true,
            KeyCode::Right | KeyCode::Char('l') => self.choice = false,
            KeyCode::Tab | KeyCode::BackTab => self.choice = !self.choice,
            KeyCode::Char('y') | KeyCode::Char('Y') => return self.answer(true),
            KeyCode::Char('n') | KeyCode::Char('N') => return self.answer(false),
            KeyCode::Enter => return self.answer(self.choice),
            _ => {}
        }
        Command::None
    }
}

impl Model for ConfirmPrompt<'_> {
    fn update(&mut self, msg: Message) -> Command {
        if self.done {
            return Command::None;
        }
        match msg {
            Message::Key(key) => self.handle_key(&key),
            Message::Signal(Signal::Interrupt) => self.answer(false),
            Message::Resize { .. } | Message::Signal(Signal::EndOfSession) | Message::Other(_) => {
                Command::None
            }
        }
    }

    fn view(&mut self, frame: &mut Frame) {
        if self.done {
            return;
        }
        let area = centered(frame.area(), PROMPT_WIDTH, PROMPT_HEIGHT);

        let chosen = Style::default()
            .fg(DEFAULT_THEME.bg)
            .bg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD);
        let other = Style::default()
            .fg(DEFAULT_THEME.fg)
            .bg(DEFAULT_THEME.current_line_bg);
        let (yes, no) = if self.choice {
            (chosen, other)
        } else {
            (other, chosen)
        };

        let lines = vec![
            Line::styled(
                self.text.description.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled(format!(" {} ", self.text.affirmative), yes),
                Span::raw("   "),
                Span::styled(format!(" {} ", self.text.negative), no),
            ]),
        ];

        let block = Block::default()
            .title(format!(" {} ", self.text.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.error))
            .padding(Padding::new(1, 1, 1, 0));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// A `width` x `height` rect in the middle of `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
