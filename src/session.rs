//! tmux sessions.

use crate::client::Client;
use crate::error::{Context, Result, TmuxError};
use crate::option::{OptionScope, Options};
use crate::parsing::is_valid_session_name;
use crate::query::{Query, Record};
use crate::tmux::Tmux;
use crate::vars;
use crate::window::{self, Window};
use serde::Serialize;

pub(crate) const VARS: &[&str] = &[
    vars::SESSION_ACTIVITY,
    vars::SESSION_ALERTS,
    vars::SESSION_ATTACHED,
    vars::SESSION_ATTACHED_LIST,
    vars::SESSION_CREATED,
    vars::SESSION_FORMAT,
    vars::SESSION_GROUP,
    vars::SESSION_GROUP_ATTACHED,
    vars::SESSION_GROUP_ATTACHED_LIST,
    vars::SESSION_GROUP_LIST,
    vars::SESSION_GROUP_MANY_ATTACHED,
    vars::SESSION_GROUP_SIZE,
    vars::SESSION_GROUPED,
    vars::SESSION_ID,
    vars::SESSION_LAST_ATTACHED,
    vars::SESSION_MANY_ATTACHED,
    vars::SESSION_MARKED,
    vars::SESSION_NAME,
    vars::SESSION_PATH,
    vars::SESSION_STACK,
    vars::SESSION_WINDOWS,
];

/// Snapshot of a session. `id` (`$N`) is stable; everything else is as of
/// the query that produced it.
#[derive(Debug, Clone, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Session<'t> {
    pub activity: String,
    pub alerts: String,
    pub attached: u32,
    pub attached_list: Vec<String>,
    pub created: String,
    pub format: bool,
    pub group: String,
    pub group_attached: u32,
    pub group_attached_list: Vec<String>,
    pub group_list: Vec<String>,
    pub group_many_attached: bool,
    pub group_size: u32,
    pub grouped: bool,
    pub id: String,
    pub last_attached: String,
    pub many_attached: bool,
    pub marked: bool,
    pub name: String,
    pub path: String,
    pub stack: String,
    pub windows: u32,

    #[serde(skip)]
    tmux: &'t Tmux,
}

/// Options for attaching to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachSessionOptions {
    /// New working directory for the session (`-c`).
    pub working_dir: String,
    /// Detach every other client (`-d`).
    pub detach_clients: bool,
}

/// Options for creating a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWindowOptions {
    pub start_directory: String,
    pub window_name: String,
    /// Create the window without making it current (`-d`).
    pub do_not_attach: bool,
}

impl<'t> Session<'t> {
    pub(crate) fn from_record(record: &Record, tmux: &'t Tmux) -> Self {
        Self {
            activity: record.string(vars::SESSION_ACTIVITY),
            alerts: record.string(vars::SESSION_ALERTS),
            attached: record.number(vars::SESSION_ATTACHED),
            attached_list: record.list(vars::SESSION_ATTACHED_LIST),
            created: record.string(vars::SESSION_CREATED),
            format: record.flag(vars::SESSION_FORMAT),
            group: record.string(vars::SESSION_GROUP),
            group_attached: record.number(vars::SESSION_GROUP_ATTACHED),
            group_attached_list: record.list(vars::SESSION_GROUP_ATTACHED_LIST),
            group_list: record.list(vars::SESSION_GROUP_LIST),
            group_many_attached: record.flag(vars::SESSION_GROUP_MANY_ATTACHED),
            group_size: record.number(vars::SESSION_GROUP_SIZE),
            grouped: record.flag(vars::SESSION_GROUPED),
            id: record.string(vars::SESSION_ID),
            last_attached: record.string(vars::SESSION_LAST_ATTACHED),
            many_attached: record.flag(vars::SESSION_MANY_ATTACHED),
            marked: record.flag(vars::SESSION_MARKED),
            name: record.string(vars::SESSION_NAME),
            path: record.string(vars::SESSION_PATH),
            stack: record.string(vars::SESSION_STACK),
            windows: record.number(vars::SESSION_WINDOWS),
            tmux,
        }
    }

    fn targeted(&self, command: &str) -> Query {
        self.tmux
            .query()
            .cmd([command])
            .fargs(["-t", self.name.as_str()])
    }

    /// Clients attached to this session.
    pub fn list_clients(&self) -> Result<Vec<Client<'t>>> {
        let clients = self.tmux.list_clients()?;
        Ok(clients
            .into_iter()
            .filter(|c| c.session == self.name)
            .collect())
    }

    pub(crate) fn attach_query(&self, options: &AttachSessionOptions) -> Query {
        let mut q = self.targeted("attach-session");
        if options.detach_clients {
            q = q.fargs(["-d"]);
        }
        if !options.working_dir.is_empty() {
            q = q.fargs(["-c", options.working_dir.as_str()]);
        }
        q
    }

    /// Attach the calling terminal to this session.
    ///
    /// tmux takes over stdin, stdout and stderr until it detaches or exits.
    pub fn attach(&self, options: &AttachSessionOptions) -> Result<()> {
        self.tmux
            .run_tty(self.attach_query(options))
            .context("failed to attach session")
    }

    /// Detach every client attached to this session.
    pub fn detach(&self) -> Result<()> {
        self.tmux
            .run(
                self.tmux
                    .query()
                    .cmd(["detach-client"])
                    .fargs(["-s", self.name.as_str()]),
            )
            .context("failed to detach session")?;
        Ok(())
    }

    pub fn kill(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("kill-session"))
            .context("failed to kill session")?;
        Ok(())
    }

    /// Rename the session and update this snapshot's name.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        if !is_valid_session_name(name) {
            return Err(TmuxError::InvalidSessionName(name.to_string()));
        }
        self.tmux
            .run(self.targeted("rename-session").pargs([name]))
            .context("failed to rename session")?;
        self.name = name.to_string();
        Ok(())
    }

    /// Windows in this session.
    pub fn list_windows(&self) -> Result<Vec<Window<'t>>> {
        let records = self
            .tmux
            .run(self.targeted("list-windows").vars(window::VARS))
            .and_then(|o| o.collect())
            .context("failed to list windows")?;
        Ok(records
            .iter()
            .map(|r| Window::from_record(r, self.tmux))
            .collect())
    }

    /// Find a window of this session by index.
    pub fn window_by_index(&self, index: u32) -> Result<Option<Window<'t>>> {
        let windows = self
            .list_windows()
            .context("failed to get window by index")?;
        Ok(windows.into_iter().find(|w| w.index == index))
    }

    pub(crate) fn new_window_query(&self, options: &NewWindowOptions) -> Query {
        let mut q = self
            .tmux
            .query()
            .cmd(["new-window"])
            .fargs(["-P", "-t", self.name.as_str()])
            .vars(window::VARS);
        if !options.start_directory.is_empty() {
            q = q.fargs(["-c", options.start_directory.as_str()]);
        }
        if !options.window_name.is_empty() {
            q = q.fargs(["-n", options.window_name.as_str()]);
        }
        if options.do_not_attach {
            q = q.fargs(["-d"]);
        }
        q
    }

    /// Create a window in this session.
    pub fn new_window(&self, options: &NewWindowOptions) -> Result<Window<'t>> {
        let record = self
            .tmux
            .run(self.new_window_query(options))
            .and_then(|o| o.one())
            .context("failed to create window")?;
        Ok(Window::from_record(&record, self.tmux))
    }

    pub fn next_window(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("next-window"))
            .context("failed to select next window")?;
        Ok(())
    }

    pub fn previous_window(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("previous-window"))
            .context("failed to select the previous window")?;
        Ok(())
    }
}

impl Options for Session<'_> {
    fn option_target(&self) -> (&Tmux, OptionScope, Option<&str>) {
        (self.tmux, OptionScope::Session, Some(&self.name))
    }
}
