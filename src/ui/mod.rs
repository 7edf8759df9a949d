//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — the form screen: session state and message handling
//! - **[`layout`]** — where the form, documentation and chrome go for a terminal size
//! - **[`panes`]** — header, footer and documentation strips
//! - **[`viewport`]** — the scrollable documentation panel
//! - **[`confirm`]** — the "go back or stop?" prompt
//! - **[`theme`]** — centralized color palette
//!
//! [`Screen`] is driven by [`crate::runtime::run_session`]; callers normally go
//! through [`crate::interact`] instead of using it directly.

pub mod app;
pub mod confirm;
pub mod layout;
pub mod panes;
pub mod theme;
pub mod viewport;

pub use app::{Outcome, Phase, Screen};
pub use confirm::ConfirmPrompt;
pub use viewport::Viewport;
