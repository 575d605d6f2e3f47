//! Entry point to the library.
//!
//! A [`Tmux`] handle holds the resolved tmux binary and, optionally, the
//! socket of the server to talk to. Every entity borrows it to issue further
//! commands.

use crate::client::{self, Client};
use crate::error::{Context, Result, TmuxError};
use crate::option::{OptionScope, Options};
use crate::pane::{self, Pane};
use crate::parsing::is_valid_session_name;
use crate::query::{Query, QueryOutput};
use crate::server::{self, Server};
use crate::session::{self, Session};
use crate::socket::Socket;
use crate::window::{self, Window};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for a [`Tmux`] handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxConfig {
    /// tmux binary, looked up on `PATH` when not absolute.
    pub program: PathBuf,
    /// Server socket (`-S`). `None` talks to the default server.
    pub socket: Option<PathBuf>,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("tmux"),
            socket: None,
        }
    }
}

/// Options for creating a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Session name (`-s`). Empty lets tmux pick one.
    pub name: String,
    /// Command run in the first window instead of the default shell.
    pub shell_command: String,
    /// Working directory (`-c`).
    pub start_directory: String,
    /// Width in cells (`-x`), zero for the default.
    pub width: u32,
    /// Height in cells (`-y`), zero for the default.
    pub height: u32,
}

/// Options for `detach-client`. A target client takes precedence over a
/// target session; with neither, the current client is detached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetachClientOptions {
    pub target_client: String,
    pub target_session: String,
}

/// Handle to a tmux server.
#[derive(Debug, Clone)]
pub struct Tmux {
    program: PathBuf,
    socket: Option<Socket>,
}

impl Tmux {
    /// Resolve the tmux binary and validate the configured socket.
    pub fn new(config: TmuxConfig) -> Result<Self> {
        let program = which::which(&config.program).map_err(TmuxError::NotInstalled)?;
        debug!("using tmux at {}", program.display());

        let socket = config
            .socket
            .map(|path| Socket::new(&program, path))
            .transpose()?;

        Ok(Self { program, socket })
    }

    /// Handle for the default server.
    pub fn default_server() -> Result<Self> {
        Self::new(TmuxConfig::default())
    }

    /// Handle for the server listening on `path`.
    pub fn with_socket(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(TmuxConfig {
            socket: Some(path.into()),
            ..TmuxConfig::default()
        })
    }

    /// Path of the tmux binary in use.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub const fn socket(&self) -> Option<&Socket> {
        self.socket.as_ref()
    }

    /// A fresh query aimed at this handle's server.
    #[must_use]
    pub fn query(&self) -> Query {
        match &self.socket {
            Some(socket) => Query::new().socket(socket.path()),
            None => Query::new(),
        }
    }

    /// Run a query with this handle's binary.
    pub fn run(&self, query: Query) -> Result<QueryOutput> {
        query.run(&self.program)
    }

    /// Run a query attached to the calling terminal.
    pub fn run_tty(&self, query: Query) -> Result<()> {
        query.run_tty(&self.program)
    }

    /// Server information.
    pub fn server_information(&self) -> Result<Server<'_>> {
        let record = self
            .run(self.query().cmd(["display-message"]).vars(server::VARS))
            .and_then(|o| o.one())
            .context("failed to get server information")?;
        Ok(Server::from_record(&record, self))
    }

    /// List all clients.
    pub fn list_clients(&self) -> Result<Vec<Client<'_>>> {
        let records = self
            .run(self.query().cmd(["list-clients"]).vars(client::VARS))
            .and_then(|o| o.collect())
            .context("failed to list clients")?;
        Ok(records
            .iter()
            .map(|r| Client::from_record(r, self))
            .collect())
    }

    /// The client running the current command, as seen by `display-message`.
    pub fn current_client(&self) -> Result<Client<'_>> {
        let record = self
            .run(self.query().cmd(["display-message"]).vars(client::VARS))
            .and_then(|o| o.one())
            .context("failed to get current client")?;
        Ok(Client::from_record(&record, self))
    }

    /// List all sessions.
    pub fn list_sessions(&self) -> Result<Vec<Session<'_>>> {
        let records = self
            .run(self.query().cmd(["list-sessions"]).vars(session::VARS))
            .and_then(|o| o.collect())
            .context("failed to list sessions")?;
        Ok(records
            .iter()
            .map(|r| Session::from_record(r, self))
            .collect())
    }

    pub(crate) fn has_session_query(&self, session: &str) -> Query {
        // `=` disables tmux's prefix and pattern matching on the name
        self.query()
            .cmd(["has-session"])
            .fargs(["-t".to_string(), format!("={session}")])
    }

    /// True if a session named exactly `session` exists.
    #[must_use]
    pub fn has_session(&self, session: &str) -> bool {
        self.run(self.has_session_query(session)).is_ok()
    }

    /// Find a session by exact name.
    pub fn session_by_name(&self, name: &str) -> Result<Option<Session<'_>>> {
        let sessions = self
            .list_sessions()
            .context("failed to get session by name")?;
        Ok(sessions.into_iter().find(|s| s.name == name))
    }

    /// Find a client by its tty.
    pub fn client_by_tty(&self, tty: &str) -> Result<Option<Client<'_>>> {
        let clients = self.list_clients()?;
        Ok(clients.into_iter().find(|c| c.tty == tty))
    }

    pub(crate) fn new_session_query(&self, options: &SessionOptions) -> Result<Query> {
        let mut q = self
            .query()
            .cmd(["new-session"])
            .fargs(["-d", "-P"])
            .vars(session::VARS);

        if !options.name.is_empty() {
            if !is_valid_session_name(&options.name) {
                return Err(TmuxError::InvalidSessionName(options.name.clone()));
            }
            q = q.fargs(["-s", options.name.as_str()]);
        }
        if !options.start_directory.is_empty() {
            q = q.fargs(["-c", options.start_directory.as_str()]);
        }
        if options.width != 0 {
            q = q.fargs(["-x".to_string(), options.width.to_string()]);
        }
        if options.height != 0 {
            q = q.fargs(["-y".to_string(), options.height.to_string()]);
        }
        if !options.shell_command.is_empty() {
            q = q.pargs([options.shell_command.as_str()]);
        }
        Ok(q)
    }

    /// Create a detached session.
    pub fn new_session(&self, options: &SessionOptions) -> Result<Session<'_>> {
        let q = self.new_session_query(options)?;
        let record = self
            .run(q)
            .and_then(|o| o.one())
            .context("failed to create session")?;
        Ok(Session::from_record(&record, self))
    }

    pub(crate) fn detach_client_query(&self, options: &DetachClientOptions) -> Query {
        let q = self.query().cmd(["detach-client"]);
        if !options.target_client.is_empty() {
            q.fargs(["-t", options.target_client.as_str()])
        } else if !options.target_session.is_empty() {
            q.fargs(["-s", options.target_session.as_str()])
        } else {
            q
        }
    }

    /// Detach the current client, a given client, or every client of a session.
    pub fn detach_client(&self, options: &DetachClientOptions) -> Result<()> {
        self.run(self.detach_client_query(options))
            .context("failed to detach client")?;
        Ok(())
    }

    /// Kill the server along with all sessions and clients.
    pub fn kill_server(&self) -> Result<()> {
        self.run(self.query().cmd(["kill-server"]))
            .context("failed to kill server")?;
        Ok(())
    }

    /// List windows across every session.
    pub fn list_all_windows(&self) -> Result<Vec<Window<'_>>> {
        let records = self
            .run(
                self.query()
                    .cmd(["list-windows"])
                    .fargs(["-a"])
                    .vars(window::VARS),
            )
            .and_then(|o| o.collect())
            .context("failed to list all windows")?;
        Ok(records
            .iter()
            .map(|r| Window::from_record(r, self))
            .collect())
    }

    /// List panes across every session.
    pub fn list_all_panes(&self) -> Result<Vec<Pane<'_>>> {
        let records = self
            .run(
                self.query()
                    .cmd(["list-panes"])
                    .fargs(["-a"])
                    .vars(pane::VARS),
            )
            .and_then(|o| o.collect())
            .context("failed to list all panes")?;
        Ok(records.iter().map(|r| Pane::from_record(r, self)).collect())
    }

    /// Find a window by id (`@N`).
    pub fn window_by_id(&self, id: &str) -> Result<Option<Window<'_>>> {
        let windows = self.list_all_windows()?;
        Ok(windows.into_iter().find(|w| w.id == id))
    }

    /// Find a pane by id (`%N`).
    pub fn pane_by_id(&self, id: &str) -> Result<Option<Pane<'_>>> {
        let panes = self.list_all_panes()?;
        Ok(panes.into_iter().find(|p| p.id == id))
    }

    /// Handle pointing at a made-up binary, for building queries in tests.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            program: PathBuf::from("/usr/bin/tmux"),
            socket: None,
        }
    }
}

impl Options for Tmux {
    fn option_target(&self) -> (&Tmux, OptionScope, Option<&str>) {
        (self, OptionScope::Server, None)
    }
}
