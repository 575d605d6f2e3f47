//! tmuxdrive — drive tmux from Rust
//!
//! Every operation builds a tmux command line, runs it, and decodes the
//! delimited text tmux prints back into typed snapshots of clients,
//! sessions, windows, panes and the server.

// Error documentation is deferred - the errors are self-explanatory from types
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod client;
pub mod error;
pub mod option;
pub mod pane;
pub mod parsing;
pub mod query;
pub mod server;
pub mod session;
pub mod socket;
pub mod tmux;
pub mod vars;
pub mod window;

pub use cli::{Cli, Command, Scope};
pub use client::Client;
pub use error::{Result, TmuxError};
pub use option::{OptionScope, Options, TmuxOption};
pub use pane::{
    CaptureOptions, ChooseTreeOptions, Pane, PanePosition, PaneSplitDirection, SelectPaneOptions,
    SplitWindowOptions,
};
pub use parsing::is_valid_session_name;
pub use query::{Query, QueryOutput, Record, SEPARATOR};
pub use server::Server;
pub use session::{AttachSessionOptions, NewWindowOptions, Session};
pub use socket::{default_socket_path, Socket};
pub use tmux::{DetachClientOptions, SessionOptions, Tmux, TmuxConfig};
pub use window::{Window, WindowLayout};
