//! Run-to-completion terminal sessions
//!
//! A session drives a [`Model`] with [`Message`]s until the model asks to
//! quit. Terminal events come from an [`EventSource`]; messages a model emits
//! for itself are queued and dispatched before the next terminal event is
//! read, so an emitted message is always handled on the following tick.
//!
//! - [`events`]: the blocking crossterm event source and a scripted one
//! - [`terminal`]: raw mode / alternate screen setup and teardown

pub mod events;
pub mod terminal;

pub use events::{CrosstermEvents, EventSource, ScriptedEvents};
pub use terminal::{run_fullscreen, TerminalGuard};

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::collections::VecDeque;
use std::io;
use tracing::debug;

/// Messages a session produces for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The user asked to cancel the whole interaction
    Interrupt,
    /// The session is about to end; components release what they hold
    EndOfSession,
}

/// Everything a model can be asked to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Signal(Signal),
    /// Any other terminal event (paste, focus, mouse)
    Other(Event),
}

impl Message {
    /// Convert a terminal event, dropping key releases and repeats
    pub fn from_event(event: Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
            Event::Key(_) => None,
            Event::Resize(width, height) => Some(Message::Resize { width, height }),
            other => Some(Message::Other(other)),
        }
    }
}

/// What a model wants the runner to do after handling a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    None,
    /// End the session after the next draw
    Quit,
    /// Dispatch this message on the next tick
    Emit(Message),
    Batch(Vec<Command>),
}

impl Command {
    pub fn is_quit(&self) -> bool {
        match self {
            Command::Quit => true,
            Command::Batch(cmds) => cmds.iter().any(Command::is_quit),
            _ => false,
        }
    }
}

/// A screen driven by a session
pub trait Model {
    fn init(&mut self) -> Command {
        Command::None
    }

    fn update(&mut self, msg: Message) -> Command;

    fn view(&mut self, frame: &mut Frame);
}

/// Run `model` until it issues [`Command::Quit`], then hand it back.
///
/// The model first receives a [`Message::Resize`] carrying the current
/// terminal size. Errors from the terminal or the event source end the
/// session immediately.
pub fn run_session<M, B, E>(mut model: M, terminal: &mut Terminal<B>, events: &mut E) -> io::Result<M>
where
    M: Model,
    B: Backend,
    E: EventSource,
{
    let mut pending = VecDeque::new();
    let mut quitting = false;

    let init = model.init();
    schedule(init, &mut pending, &mut quitting);

    let size = terminal.size()?;
    pending.push_back(Message::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal.draw(|f| model.view(f))?;

        if quitting {
            break;
        }

        let msg = match pending.pop_front() {
            Some(msg) => msg,
            None => match Message::from_event(events.next_event()?) {
                Some(msg) => msg,
                None => continue,
            },
        };

        debug!(?msg, "dispatch");
        let cmd = model.update(msg);
        schedule(cmd, &mut pending, &mut quitting);
    }

    Ok(model)
}

fn schedule(cmd: Command, pending: &mut VecDeque<Message>, quitting: &mut bool) {
    match cmd {
        Command::None => {}
        Command::Quit => *quitting = true,
        Command::Emit(msg) => pending.push_back(msg),
        Command::Batch(cmds) => {
            for cmd in cmds {
                schedule(cmd, pending, quitting);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    /// Counts keys and quits on 'q'; 'e' emits a signal for itself
    #[derive(Default)]
    struct Counter {
        keys: usize,
        signals: Vec<Signal>,
        resizes: Vec<(u16, u16)>,
    }

    impl Model for Counter {
        fn update(&mut self, msg: Message) -> Command {
            match msg {
                Message::Key(key) => {
                    self.keys += 1;
                    match key.code {
                        KeyCode::Char('q') => Command::Quit,
                        KeyCode::Char('e') => Command::Emit(Message::Signal(Signal::Interrupt)),
                        _ => Command::None,
                    }
                }
                Message::Resize { width, height } => {
                    self.resizes.push((width, height));
                    Command::None
                }
                Message::Signal(signal) => {
                    self.signals.push(signal);
                    Command::None
                }
                Message::Other(_) => Command::None,
            }
        }

        fn view(&mut self, frame: &mut Frame) {
            frame.render_widget(Paragraph::new(format!("keys: {}", self.keys)), frame.area());
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_session_runs_until_quit() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let mut events = ScriptedEvents::new([key('a'), key('e'), key('q'), key('z')]);

        let model = run_session(Counter::default(), &mut terminal, &mut events).unwrap();

        assert_eq!(model.keys, 3);
        assert_eq!(model.signals, vec![Signal::Interrupt]);
        assert_eq!(model.resizes, vec![(20, 3)]);
        // 'z' was never read
        assert_eq!(events.remaining(), 1);
    }

    #[test]
    fn test_session_fails_when_events_run_out() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let mut events = ScriptedEvents::new([key('a')]);

        let result = run_session(Counter::default(), &mut terminal, &mut events);
        assert!(result.is_err());
    }

    #[test]
    fn test_key_releases_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(Message::from_event(release), None);
        assert_eq!(
            Message::from_event(Event::Resize(10, 4)),
            Some(Message::Resize {
                width: 10,
                height: 4
            })
        );
    }

    #[test]
    fn test_batch_quit() {
        let cmd = Command::Batch(vec![Command::None, Command::Quit]);
        assert!(cmd.is_quit());
        assert!(!Command::Emit(Message::Signal(Signal::EndOfSession)).is_quit());
    }
}
