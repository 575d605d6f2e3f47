//! Server information.

use crate::error::Result;
use crate::query::Record;
use crate::socket::Socket;
use crate::tmux::Tmux;
use crate::vars;
use serde::Serialize;

pub(crate) const VARS: &[&str] = &[
    vars::PID,
    vars::SOCKET_PATH,
    vars::START_TIME,
    vars::UID,
    vars::USER,
    vars::VERSION,
];

/// Snapshot of the running tmux server.
#[derive(Debug, Clone, Serialize)]
pub struct Server<'t> {
    pub pid: i32,
    pub socket_path: String,
    pub start_time: String,
    pub uid: u32,
    pub user: String,
    pub version: String,

    #[serde(skip)]
    tmux: &'t Tmux,
}

impl<'t> Server<'t> {
    pub(crate) fn from_record(record: &Record, tmux: &'t Tmux) -> Self {
        Self {
            pid: record.number(vars::PID),
            socket_path: record.string(vars::SOCKET_PATH),
            start_time: record.string(vars::START_TIME),
            uid: record.number(vars::UID),
            user: record.string(vars::USER),
            version: record.string(vars::VERSION),
            tmux,
        }
    }

    /// Validate the server's socket path into a [`Socket`].
    pub fn socket(&self) -> Result<Socket> {
        Socket::new(self.tmux.program(), &self.socket_path)
    }
}
