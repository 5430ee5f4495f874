//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Shows a Boyo program three ways at once: the source, the AST of the
//! statement under the cursor, and the C++ generated for it.
//!
//! - **[`app`]**: inspector state and the keyboard event loop
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] from source lines and parsed statements, then call
//! [`App::run`](app::App::run).

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
