//! Show a form until its result is usable
//!
//! Every attempt builds a brand-new form from the caller's factory, so no
//! field state survives from one attempt to the next. After each attempt the
//! caller's validity check runs against the values the form wrote into its
//! bindings; an invalid result asks the user whether to go back or stop.
//!
//! Completing the form does not by itself end the loop: an invalid result
//! sends the user back to a fresh form even though it was completed.

use crate::config::ScreenConfig;
use crate::error::{CancelReason, Cancelled, InteractError};
use crate::form::FormWidget;
use crate::runtime::{run_fullscreen, run_session, EventSource};
use crate::ui::{ConfirmPrompt, Outcome, Screen};
use ratatui::{backend::Backend, Terminal};
use tracing::{error, info, warn};

/// A form screen with its documentation and configuration
pub struct Interaction<'a> {
    documentation: &'a str,
    config: ScreenConfig,
}

impl<'a> Interaction<'a> {
    pub fn new(documentation: &'a str) -> Self {
        Interaction {
            documentation,
            config: ScreenConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Run on the real terminal.
    ///
    /// A terminal failure is fatal: it is logged, reported on stderr and the
    /// process exits with status 1. Only cancellation is returned.
    pub fn run<F, G, P>(&self, form_factory: G, is_valid: P) -> Result<(), Cancelled>
    where
        F: FormWidget,
        G: FnMut() -> F,
        P: FnMut() -> bool,
    {
        let result = run_fullscreen(|terminal, events| {
            self.run_on(terminal, events, form_factory, is_valid)
        });
        match result {
            Ok(()) => Ok(()),
            Err(InteractError::Cancelled(cancelled)) => Err(cancelled),
            Err(InteractError::Terminal(e)) => {
                error!(error = %e, "terminal failure");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Run against any terminal and event source.
    pub fn run_on<B, E, F, G, P>(
        &self,
        terminal: &mut Terminal<B>,
        events: &mut E,
        mut form_factory: G,
        mut is_valid: P,
    ) -> Result<(), InteractError>
    where
        B: Backend,
        E: EventSource,
        F: FormWidget,
        G: FnMut() -> F,
        P: FnMut() -> bool,
    {
        let mut retry = true;
        // What the last attempt settled on; `None` while nothing is settled
        let mut settled: Option<Outcome> = None;
        let mut attempt = 0;

        while retry && settled.is_none() {
            attempt += 1;
            info!(attempt, "starting form session");

            let screen = Screen::new(form_factory(), self.documentation, &self.config);
            let screen = run_session(screen, terminal, events)?;

            match screen.outcome() {
                Some(Outcome::Interrupted) => {
                    info!(attempt, "cancelled by interrupt");
                    return Err(Cancelled::new(CancelReason::Interrupted).into());
                }
                Some(Outcome::Completed) => {
                    retry = false;
                    settled = Some(Outcome::Completed);
                }
                Some(Outcome::Errored) | None => {}
            }

            if !is_valid() {
                warn!(attempt, "form result is invalid");
                retry = self.confirm_retry(terminal, events, retry)?;
                if retry {
                    settled = None;
                } else {
                    settled = Some(Outcome::Interrupted);
                }
            }
        }

        if settled == Some(Outcome::Interrupted) {
            info!(attempt, "user declined to retry");
            return Err(Cancelled::new(CancelReason::Declined).into());
        }
        info!(attempt, "interaction finished");
        Ok(())
    }

    fn confirm_retry<B, E>(
        &self,
        terminal: &mut Terminal<B>,
        events: &mut E,
        initial: bool,
    ) -> Result<bool, InteractError>
    where
        B: Backend,
        E: EventSource,
    {
        let prompt = ConfirmPrompt::new(&self.config.confirm, &self.config.keys, initial);
        let prompt = run_session(prompt, terminal, events)?;
        info!(retry = prompt.choice(), "confirmation answered");
        Ok(prompt.choice())
    }
}

/// Show the form built by `form_factory` next to `documentation` until
/// `is_valid` accepts the result, using the default configuration.
pub fn interact<F, G, P>(form_factory: G, documentation: &str, is_valid: P) -> Result<(), Cancelled>
where
    F: FormWidget,
    G: FnMut() -> F,
    P: FnMut() -> bool,
{
    Interaction::new(documentation).run(form_factory, is_valid)
}
