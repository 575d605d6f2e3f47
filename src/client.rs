//! Attached tmux clients.

use crate::error::Result;
use crate::query::Record;
use crate::session::Session;
use crate::tmux::Tmux;
use crate::vars;
use serde::Serialize;

pub(crate) const VARS: &[&str] = &[
    vars::CLIENT_ACTIVITY,
    vars::CLIENT_CELL_HEIGHT,
    vars::CLIENT_CELL_WIDTH,
    vars::CLIENT_CONTROL_MODE,
    vars::CLIENT_CREATED,
    vars::CLIENT_DISCARDED,
    vars::CLIENT_FLAGS,
    vars::CLIENT_HEIGHT,
    vars::CLIENT_KEY_TABLE,
    vars::CLIENT_LAST_SESSION,
    vars::CLIENT_NAME,
    vars::CLIENT_PID,
    vars::CLIENT_PREFIX,
    vars::CLIENT_READONLY,
    vars::CLIENT_SESSION,
    vars::CLIENT_TERMNAME,
    vars::CLIENT_TERMFEATURES,
    vars::CLIENT_TERMTYPE,
    vars::CLIENT_TTY,
    vars::CLIENT_UID,
    vars::CLIENT_USER,
    vars::CLIENT_UTF8,
    vars::CLIENT_WIDTH,
    vars::CLIENT_WRITTEN,
];

/// Snapshot of a client attached to the server. `tty` identifies it.
#[derive(Debug, Clone, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Client<'t> {
    pub activity: String,
    pub cell_height: u32,
    pub cell_width: u32,
    pub control_mode: bool,
    pub created: String,
    pub discarded: String,
    pub flags: String,
    pub height: u32,
    pub key_table: String,
    pub last_session: String,
    pub name: String,
    pub pid: i32,
    pub prefix: bool,
    pub readonly: bool,
    /// Name of the attached session.
    pub session: String,
    pub termname: String,
    pub termfeatures: String,
    pub termtype: String,
    pub tty: String,
    pub uid: u32,
    pub user: String,
    pub utf8: bool,
    pub width: u32,
    pub written: String,

    #[serde(skip)]
    tmux: &'t Tmux,
}

impl<'t> Client<'t> {
    pub(crate) fn from_record(record: &Record, tmux: &'t Tmux) -> Self {
        Self {
            activity: record.string(vars::CLIENT_ACTIVITY),
            cell_height: record.number(vars::CLIENT_CELL_HEIGHT),
            cell_width: record.number(vars::CLIENT_CELL_WIDTH),
            control_mode: record.flag(vars::CLIENT_CONTROL_MODE),
            created: record.string(vars::CLIENT_CREATED),
            discarded: record.string(vars::CLIENT_DISCARDED),
            flags: record.string(vars::CLIENT_FLAGS),
            height: record.number(vars::CLIENT_HEIGHT),
            key_table: record.string(vars::CLIENT_KEY_TABLE),
            last_session: record.string(vars::CLIENT_LAST_SESSION),
            name: record.string(vars::CLIENT_NAME),
            pid: record.number(vars::CLIENT_PID),
            prefix: record.flag(vars::CLIENT_PREFIX),
            readonly: record.flag(vars::CLIENT_READONLY),
            session: record.string(vars::CLIENT_SESSION),
            termname: record.string(vars::CLIENT_TERMNAME),
            termfeatures: record.string(vars::CLIENT_TERMFEATURES),
            termtype: record.string(vars::CLIENT_TERMTYPE),
            tty: record.string(vars::CLIENT_TTY),
            uid: record.number(vars::CLIENT_UID),
            user: record.string(vars::CLIENT_USER),
            utf8: record.flag(vars::CLIENT_UTF8),
            width: record.number(vars::CLIENT_WIDTH),
            written: record.string(vars::CLIENT_WRITTEN),
            tmux,
        }
    }

    /// The session this client is attached to.
    pub fn session(&self) -> Result<Option<Session<'t>>> {
        self.tmux.session_by_name(&self.session)
    }
}
