//! The form screen: session state and message handling

use crate::config::ScreenConfig;
use crate::form::{FormState, FormWidget};
use crate::runtime::{Command, Message, Model, Signal};
use crate::ui::layout::{self, Chrome, PanelLayout};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::viewport::Viewport;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use tracing::{debug, info};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The form was submitted with every field valid
    Completed,
    /// The user pressed the interrupt key
    Interrupted,
    /// The session ended without a result (quit key)
    Errored,
}

/// Where the screen is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No size seen yet, so the viewport does not exist
    Initializing,
    Active,
    /// Terminal state: nothing is drawn and no message changes anything
    Quitting,
}

/// A form next to a scrollable documentation panel.
///
/// One `Screen` is one session: it is built for a fresh form and dropped
/// once the session ends.
pub struct Screen<'a, F: FormWidget> {
    form: F,
    documentation: &'a str,
    config: &'a ScreenConfig,
    viewport: Option<Viewport>,
    /// Usable width, capped at the configured maximum
    width: u16,
    /// Last terminal size seen
    size: (u16, u16),
    phase: Phase,
    outcome: Option<Outcome>,
}

impl<'a, F: FormWidget> Screen<'a, F> {
    pub fn new(mut form: F, documentation: &'a str, config: &'a ScreenConfig) -> Self {
        form.embed(config.field_width);
        Screen {
            form,
            documentation,
            config,
            viewport: None,
            width: layout::content_width(config.max_width, config.max_width),
            size: (0, 0),
            phase: Phase::Initializing,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn is_quitting(&self) -> bool {
        self.phase == Phase::Quitting
    }

    fn quit(&mut self) -> Command {
        self.phase = Phase::Quitting;
        Command::Quit
    }

    /// Heights of the strips around the form, measured from their content
    fn chrome(&self) -> Chrome {
        let errors = self.form.errors();
        let hints = self.hints();
        let percent = self.viewport.as_ref().map_or(0.0, Viewport::scroll_percent);
        Chrome {
            header: panes::header_text(&self.config.title, &errors, self.width).height() as u16,
            footer: panes::footer_text(&hints, !errors.is_empty(), self.width).height() as u16,
            doc_header: panes::doc_header_text(&self.config.doc_title, self.width).height() as u16,
            doc_footer: panes::doc_footer_text(percent, self.width).height() as u16,
        }
    }

    fn hints(&self) -> Vec<crate::config::KeyHint> {
        let mut hints = self.form.help();
        hints.extend(self.config.keys.hints());
        hints
    }

    fn layout(&self, area: Rect) -> PanelLayout {
        layout::compute(
            area,
            self.config.field_width,
            self.config.max_width,
            self.chrome(),
        )
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.width = layout::content_width(width, self.config.max_width);

        if self.viewport.is_none() {
            let panel = self.layout(Rect::new(0, 0, width, height)).viewport;
            let mut viewport = Viewport::new(panel.width, panel.height);
            viewport.y_position = panel.y;
            viewport.set_content(self.documentation);
            self.viewport = Some(viewport);
            self.phase = Phase::Active;
            info!(width, height, "documentation viewport ready");
        } else {
            self.fit_viewport();
        }
    }

    /// Match the viewport to its panel; the panel moves when the form's
    /// errors change the header height
    fn fit_viewport(&mut self) {
        let (width, height) = self.size;
        let panel = self.layout(Rect::new(0, 0, width, height)).viewport;
        if let Some(viewport) = &mut self.viewport {
            if (viewport.width(), viewport.height()) != (panel.width, panel.height) {
                viewport.set_size(panel.width, panel.height);
            }
            viewport.y_position = panel.y;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command {
        let config = self.config;
        let keys = &config.keys;
        if keys.quit.matches(&key) {
            debug!("quit key");
            self.outcome = Some(Outcome::Errored);
            return self.quit();
        }
        if keys.is_viewport_key(&key) {
            if let Some(viewport) = &mut self.viewport {
                viewport.handle_key(&key, keys);
            }
            return Command::None;
        }
        if keys.interrupt.matches(&key) {
            return Command::Emit(Message::Signal(Signal::Interrupt));
        }
        self.form.update(&Message::Key(key))
    }
}

impl<F: FormWidget> Model for Screen<'_, F> {
    fn init(&mut self) -> Command {
        self.form.init()
    }

    fn update(&mut self, msg: Message) -> Command {
        if self.is_quitting() {
            return Command::None;
        }

        let cmd = match msg {
            Message::Key(key) => {
                let cmd = self.handle_key(key);
                if self.is_quitting() {
                    return cmd;
                }
                cmd
            }
            Message::Signal(Signal::Interrupt) => {
                info!("session interrupted");
                self.outcome = Some(Outcome::Interrupted);
                return self.quit();
            }
            Message::Signal(Signal::EndOfSession) => Command::None,
            Message::Resize { width, height } => {
                self.resize(width, height);
                Command::None
            }
            other @ Message::Other(_) => self.form.update(&other),
        };
        self.fit_viewport();

        if self.form.state() == FormState::Completed {
            info!("form completed");
            self.outcome = Some(Outcome::Completed);
            if let Some(viewport) = &mut self.viewport {
                viewport.update(&Message::Signal(Signal::EndOfSession), &self.config.keys);
            }
            let quit = self.quit();
            return Command::Batch(vec![cmd, quit]);
        }
        cmd
    }

    fn view(&mut self, frame: &mut Frame) {
        if self.is_quitting() {
            return;
        }
        let Some(viewport) = &self.viewport else {
            frame.render_widget(Paragraph::new("\n  Initializing..."), frame.area());
            return;
        };

        let area = frame.area();
        let layout = self.layout(area);
        let errors = self.form.errors();
        let hints = self.hints();

        frame.render_widget(
            Paragraph::new(panes::header_text(&self.config.title, &errors, self.width)),
            layout.header,
        );
        let form_area = Rect {
            height: layout.form.height.min(self.form.height()),
            ..layout.form
        };
        self.form.render(form_area, frame.buffer_mut());
        frame.render_widget(
            Paragraph::new(panes::doc_header_text(
                &self.config.doc_title,
                layout.doc_header.width,
            )),
            layout.doc_header,
        );
        viewport.render(layout.viewport, frame.buffer_mut(), DEFAULT_THEME.doc_text());
        frame.render_widget(
            Paragraph::new(panes::doc_footer_text(
                viewport.scroll_percent(),
                layout.doc_footer.width,
            )),
            layout.doc_footer,
        );
        frame.render_widget(
            Paragraph::new(panes::footer_text(&hints, !errors.is_empty(), self.width)),
            layout.footer,
        );
    }
}
