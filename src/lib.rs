//! # Introduction
//!
//! formpane shows an interactive form next to a scrollable documentation
//! panel in the terminal, and keeps showing a fresh copy of the form until
//! the values it produced pass a check supplied by the caller.
//!
//! ## Flow
//!
//! ```text
//! interact → form factory → session → screen (event loop) → outcome
//!     ↑                                                        │
//!     └──────── invalid? confirm "take me back" ←──────────────┘
//! ```
//!
//! 1. [`form`] — fields bound to caller-owned [`form::Binding`]s, behind the
//!    [`form::FormWidget`] trait.
//! 2. [`ui`] — the screen state machine, layout and rendering.
//! 3. [`runtime`] — run-to-completion sessions over a ratatui terminal.
//! 4. [`interact`] — the retry loop and the public entry point.
//! 5. [`config`], [`error`], [`logging`] — keys and sizes, error types, tracing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formpane::form::{Binding, Form, MultiSelect};
//!
//! let enabled = Binding::new(vec![true, false]);
//! let docs = String::from("Pick the programs to run.");
//! let result = formpane::interact(
//!     || Form::new(vec![MultiSelect::new("Programs", ["lint", "test"], &enabled).into()]),
//!     &docs,
//!     || enabled.borrow().iter().any(|&on| on),
//! );
//! if let Err(cancelled) = result {
//!     eprintln!("{}", cancelled);
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod interact;
pub mod logging;
pub mod runtime;
pub mod ui;

pub use config::ScreenConfig;
pub use error::{CancelReason, Cancelled, InteractError};
pub use interact::{interact, Interaction};
