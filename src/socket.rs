//! tmux control sockets.

#![allow(unsafe_code)] // getuid() call

use crate::error::{Result, TmuxError};
use crate::query::Query;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A socket path that a running tmux server answered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Socket {
    path: PathBuf,
}

impl Socket {
    /// Validate `path` by listing clients on it with `program`.
    pub fn new(program: &Path, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if Self::is_valid(program, &path) {
            Ok(Self { path })
        } else {
            Err(TmuxError::InvalidSocket(path))
        }
    }

    /// True when `program -S path list-clients` exits zero.
    #[must_use]
    pub fn is_valid(program: &Path, path: &Path) -> bool {
        match Query::new().socket(path).cmd(["list-clients"]).run(program) {
            Ok(_) => true,
            Err(e) => {
                debug!("socket {} rejected: {}", path.display(), e);
                false
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The socket tmux uses when neither `-S` nor `-L` is given.
///
/// `$TMUX_TMPDIR/tmux-<uid>/default`, with `/tmp` when `TMUX_TMPDIR` is unset.
#[must_use]
pub fn default_socket_path() -> PathBuf {
    let base = std::env::var_os("TMUX_TMPDIR")
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| PathBuf::from("/tmp"), PathBuf::from);
    let uid = unsafe { libc::getuid() };
    base.join(format!("tmux-{uid}")).join("default")
}
