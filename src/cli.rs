//! Command-line interface for tmuxdrive.

use crate::option::OptionScope;
use crate::tmux::TmuxConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Drive tmux from the command line.
#[derive(Debug, Parser)]
#[command(name = "tmuxdrive", version)]
pub struct Cli {
    /// Path to the tmux server socket.
    #[arg(long, short = 'S', env = "TMUXDRIVE_SOCKET")]
    pub socket: Option<PathBuf>,

    /// tmux binary to run.
    #[arg(long, env = "TMUXDRIVE_TMUX", default_value = "tmux")]
    pub tmux: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Handle configuration taken from the global flags.
    #[must_use]
    pub fn config(&self) -> TmuxConfig {
        TmuxConfig {
            program: self.tmux.clone(),
            socket: self.socket.clone(),
        }
    }
}

/// Option scope on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Server,
    Session,
    Window,
    Pane,
}

impl From<Scope> for OptionScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Server => Self::Server,
            Scope::Session => Self::Session,
            Scope::Window => Self::Window,
            Scope::Pane => Self::Pane,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show server information.
    Info {
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },

    /// List clients.
    Clients {
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },

    /// List sessions.
    Sessions {
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },

    /// List windows, across all sessions unless one is given.
    Windows {
        /// Only list windows of this session.
        #[arg(long, short)]
        session: Option<String>,

        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },

    /// List panes, across all sessions unless a window is given.
    Panes {
        /// Only list panes of this window id (e.g. @3).
        #[arg(long, short)]
        window: Option<String>,

        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },

    /// Create a detached session.
    NewSession {
        /// Session name.
        #[arg(long, short)]
        name: Option<String>,

        /// Start directory.
        #[arg(long, short = 'c')]
        dir: Option<String>,

        /// Width in cells.
        #[arg(long, short = 'x')]
        width: Option<u32>,

        /// Height in cells.
        #[arg(long, short = 'y')]
        height: Option<u32>,

        /// Command to run in the first window (after --).
        #[arg(last = true)]
        cmd: Vec<String>,
    },

    /// Kill a session.
    KillSession {
        /// Session name.
        name: String,
    },

    /// Rename a session.
    RenameSession {
        /// Current name.
        name: String,

        /// New name.
        new_name: String,
    },

    /// Print the contents of a pane.
    Capture {
        /// Pane id (e.g. %7).
        pane: String,

        /// Keep colours and attributes as escape sequences.
        #[arg(long, short)]
        escapes: bool,

        /// Join wrapped lines.
        #[arg(long, short)]
        join: bool,
    },

    /// Attach this terminal to a session.
    Attach {
        /// Session name.
        name: String,

        /// Detach other clients.
        #[arg(long, short)]
        detach_others: bool,
    },

    /// Set an option.
    SetOption {
        /// Option scope.
        #[arg(long, value_enum, default_value = "session")]
        scope: Scope,

        /// Target session name, window id or pane id.
        #[arg(long, short)]
        target: Option<String>,

        key: String,

        value: String,
    },

    /// Show options, or a single option.
    ShowOptions {
        /// Option scope.
        #[arg(long, value_enum, default_value = "session")]
        scope: Scope,

        /// Target session name, window id or pane id.
        #[arg(long, short)]
        target: Option<String>,

        key: Option<String>,
    },

    /// Unset an option.
    UnsetOption {
        /// Option scope.
        #[arg(long, value_enum, default_value = "session")]
        scope: Scope,

        /// Target session name, window id or pane id.
        #[arg(long, short)]
        target: Option<String>,

        key: String,
    },

    /// Kill the tmux server.
    KillServer,

    /// Print the default tmux socket path.
    SocketPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_about_comes_from_doc_comment() {
        let about = Cli::command()
            .get_about()
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(about.starts_with("Drive tmux from the command line"), "{about}");
    }

    #[test]
    fn test_parse_new_session() {
        let cli = Cli::try_parse_from([
            "tmuxdrive", "new-session", "--name", "work", "-x", "120", "--", "htop", "-d", "5",
        ])
        .expect("parse");
        match cli.command {
            Command::NewSession {
                name, width, cmd, ..
            } => {
                assert_eq!(name.as_deref(), Some("work"));
                assert_eq!(width, Some(120));
                assert_eq!(cmd, vec!["htop", "-d", "5"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::try_parse_from([
            "tmuxdrive", "--tmux", "/opt/tmux", "-S", "/tmp/s", "sessions",
        ])
        .expect("parse");
        let config = cli.config();
        assert_eq!(config.program, PathBuf::from("/opt/tmux"));
        assert_eq!(config.socket, Some(PathBuf::from("/tmp/s")));
    }

    #[test]
    fn test_scope_defaults_to_session() {
        let cli = Cli::try_parse_from(["tmuxdrive", "show-options"]).expect("parse");
        match cli.command {
            Command::ShowOptions { scope, target, key } => {
                assert_eq!(OptionScope::from(scope), OptionScope::Session);
                assert!(target.is_none());
                assert!(key.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
