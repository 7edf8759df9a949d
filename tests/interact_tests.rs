// Integration tests for the retry loop

use std::cell::Cell;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use formpane::form::{Binding, Form, Input, MultiSelect};
use formpane::runtime::ScriptedEvents;
use formpane::config::ConfirmText;
use formpane::{CancelReason, InteractError, Interaction, ScreenConfig};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

const DOCS: &str = "Pick at least one program.";

#[test]
fn test_valid_result_runs_one_session() {
    let name = Binding::new(String::new());
    let built = Cell::new(0);
    let checked = Cell::new(0);
    let mut events = ScriptedEvents::new([key(KeyCode::Char('a')), key(KeyCode::Enter)]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || {
            built.set(built.get() + 1);
            Form::new(vec![Input::new("Name", &name).into()])
        },
        || {
            checked.set(checked.get() + 1);
            true
        },
    );

    assert!(result.is_ok(), "interaction failed: {:?}", result);
    assert_eq!(built.get(), 1);
    assert_eq!(checked.get(), 1);
    assert_eq!(name.get(), "a");
    assert_eq!(events.remaining(), 0);
}

#[test]
fn test_invalid_then_retry_builds_a_fresh_form() {
    let enabled = Binding::new(vec![false, false]);
    let built = Cell::new(0);
    let mut events = ScriptedEvents::new([
        // First form: submit with everything off
        key(KeyCode::Enter),
        // "take me back"
        key(KeyCode::Char('y')),
        // Second form: toggle the first program and submit
        key(KeyCode::Char('x')),
        key(KeyCode::Enter),
    ]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || {
            built.set(built.get() + 1);
            Form::new(vec![MultiSelect::new("Programs", ["a", "b"], &enabled).into()])
        },
        || enabled.borrow().iter().any(|&on| on),
    );

    assert!(result.is_ok(), "interaction failed: {:?}", result);
    assert_eq!(built.get(), 2);
    assert_eq!(enabled.get(), vec![true, false]);
    assert_eq!(events.remaining(), 0);
}

#[test]
fn test_interrupt_cancels_without_prompting() {
    let name = Binding::new(String::new());
    let checked = Cell::new(0);
    let mut events = ScriptedEvents::new([key(KeyCode::Char('a')), ctrl('c'), key(KeyCode::Enter)]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || Form::new(vec![Input::new("Name", &name).into()]),
        || {
            checked.set(checked.get() + 1);
            false
        },
    );

    match result {
        Err(InteractError::Cancelled(cancelled)) => {
            assert_eq!(cancelled.reason(), CancelReason::Interrupted);
            assert_eq!(cancelled.to_string(), "user cancelled (interrupted)");
        }
        other => panic!("expected cancellation, got {:?}", other),
    }
    assert_eq!(checked.get(), 0);
    // The trailing Enter was never read
    assert_eq!(events.remaining(), 1);
    // Unsubmitted input never reaches the binding
    assert_eq!(name.get(), "");
}

#[test]
fn test_invalid_then_stop_cancels() {
    let enabled = Binding::new(vec![false]);
    let built = Cell::new(0);
    let mut events = ScriptedEvents::new([key(KeyCode::Enter), key(KeyCode::Char('n'))]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || {
            built.set(built.get() + 1);
            Form::new(vec![MultiSelect::new("Programs", ["a"], &enabled).into()])
        },
        || enabled.borrow().iter().any(|&on| on),
    );

    match result {
        Err(InteractError::Cancelled(cancelled)) => {
            assert_eq!(cancelled.reason(), CancelReason::Declined)
        }
        other => panic!("expected cancellation, got {:?}", other),
    }
    assert_eq!(built.get(), 1);
}

#[test]
fn test_prompt_defaults_to_stop_after_completion() {
    let enabled = Binding::new(vec![false]);
    let mut events = ScriptedEvents::new([key(KeyCode::Enter), key(KeyCode::Enter)]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || Form::new(vec![MultiSelect::new("Programs", ["a"], &enabled).into()]),
        || enabled.borrow().iter().any(|&on| on),
    );

    assert!(matches!(
        result,
        Err(InteractError::Cancelled(c)) if c.reason() == CancelReason::Declined
    ));
}

#[test]
fn test_quit_key_restarts_the_form() {
    let name = Binding::new(String::new());
    let built = Cell::new(0);
    let mut events = ScriptedEvents::new([
        key(KeyCode::Char('a')),
        ctrl('q'),
        key(KeyCode::Char('b')),
        key(KeyCode::Enter),
    ]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || {
            built.set(built.get() + 1);
            Form::new(vec![Input::new("Name", &name).into()])
        },
        || true,
    );

    assert!(result.is_ok(), "interaction failed: {:?}", result);
    assert_eq!(built.get(), 2);
    // The abandoned "a" was never written
    assert_eq!(name.get(), "b");
}

#[test]
fn test_terminal_failure_is_not_retried() {
    let name = Binding::new(String::new());
    let built = Cell::new(0);
    // Script runs out before the form is submitted
    let mut events = ScriptedEvents::new([key(KeyCode::Char('a'))]);

    let result = Interaction::new(DOCS).run_on(
        &mut terminal(),
        &mut events,
        || {
            built.set(built.get() + 1);
            Form::new(vec![Input::new("Name", &name).into()])
        },
        || true,
    );

    assert!(matches!(result, Err(InteractError::Terminal(_))));
    assert_eq!(built.get(), 1);
}

#[test]
fn test_prompt_uses_configured_text() {
    let enabled = Binding::new(vec![false]);
    let confirm = ConfirmText {
        title: String::from("No samples"),
        description: String::from("select at least one sample"),
        affirmative: String::from("back"),
        negative: String::from("quit"),
    };
    let interaction =
        Interaction::new(DOCS).with_config(ScreenConfig::default().with_confirm(confirm));
    assert_eq!(interaction.config().confirm.title, "No samples");

    let mut terminal = terminal();
    // The script ends while the prompt is up
    let mut events = ScriptedEvents::new([key(KeyCode::Enter)]);
    let result = interaction.run_on(
        &mut terminal,
        &mut events,
        || Form::new(vec![MultiSelect::new("Samples", ["s1"], &enabled).into()]),
        || enabled.borrow().iter().any(|&on| on),
    );
    assert!(matches!(result, Err(InteractError::Terminal(_))));

    let buf = terminal.backend().buffer();
    let text: String = (0..buf.area.height)
        .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
        .map(|pos| buf[pos].symbol().to_string())
        .collect();
    assert!(text.contains("No samples"));
    assert!(text.contains("back"));
    assert!(text.contains("quit"));
}
