//! Sources of terminal events

use crossterm::event::{self, Event};
use std::collections::VecDeque;
use std::io;

/// Something a session can block on for its next terminal event
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal, blocking until one arrives
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Replays a fixed list of events.
///
/// Once the script is exhausted every read fails with
/// [`io::ErrorKind::UnexpectedEof`], so a session that waits for more input
/// than scripted ends instead of hanging.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        ScriptedEvents {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }
}
