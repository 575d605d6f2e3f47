//! tmuxdrive — drive tmux from the command line

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use tmuxdrive::{
    default_socket_path, AttachSessionOptions, CaptureOptions, Cli, Command, OptionScope,
    Options, Scope, SessionOptions, Tmux,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("tmuxdrive=debug")
    } else {
        EnvFilter::new("tmuxdrive=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", describe(e.as_ref()));
        std::process::exit(1);
    }
}

/// Render an error with its chain of causes.
fn describe(e: &dyn Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[allow(clippy::too_many_lines)] // Command dispatch function, splitting would reduce clarity
fn run(cli: &Cli) -> CliResult {
    // Only commands that talk to a server resolve the binary and socket.
    let connect = || Tmux::new(cli.config());

    match &cli.command {
        Command::Info { json } => {
            let tmux = connect()?;
            let server = tmux.server_information()?;
            if *json {
                return print_json(&server);
            }
            println!("version:    {}", server.version);
            println!("pid:        {}", server.pid);
            println!("socket:     {}", server.socket_path);
            println!("user:       {} ({})", server.user, server.uid);
            println!("start time: {}", server.start_time);
        }

        Command::Clients { json } => {
            let tmux = connect()?;
            let clients = tmux.list_clients()?;
            if *json {
                return print_json(&clients);
            }
            for c in &clients {
                println!("{}\t{}\t{}x{}\t{}", c.tty, c.session, c.width, c.height, c.termname);
            }
        }

        Command::Sessions { json } => {
            let tmux = connect()?;
            let sessions = tmux.list_sessions()?;
            if *json {
                return print_json(&sessions);
            }
            for s in &sessions {
                let attached = if s.attached > 0 { " (attached)" } else { "" };
                println!("{}\t{}\t{} windows{}", s.id, s.name, s.windows, attached);
            }
        }

        Command::Windows { session, json } => {
            let tmux = connect()?;
            let windows = match session {
                Some(name) => tmux
                    .session_by_name(name)?
                    .ok_or_else(|| format!("session not found: {name}"))?
                    .list_windows()?,
                None => tmux.list_all_windows()?,
            };
            if *json {
                return print_json(&windows);
            }
            for w in &windows {
                let active = if w.active { "*" } else { "" };
                println!("{}\t{}:{}{}\t{} panes", w.id, w.index, w.name, active, w.panes);
            }
        }

        Command::Panes { window, json } => {
            let tmux = connect()?;
            let panes = match window {
                Some(id) => tmux
                    .window_by_id(id)?
                    .ok_or_else(|| format!("window not found: {id}"))?
                    .list_panes()?,
                None => tmux.list_all_panes()?,
            };
            if *json {
                return print_json(&panes);
            }
            for p in &panes {
                let active = if p.active { "*" } else { "" };
                println!(
                    "{}\t{}{}\t{}x{}\t{}\t{}",
                    p.id, p.index, active, p.width, p.height, p.current_command, p.current_path
                );
            }
        }

        Command::NewSession {
            name,
            dir,
            width,
            height,
            cmd,
        } => {
            let tmux = connect()?;
            let session = tmux.new_session(&SessionOptions {
                name: name.clone().unwrap_or_default(),
                shell_command: cmd.join(" "),
                start_directory: dir.clone().unwrap_or_default(),
                width: width.unwrap_or_default(),
                height: height.unwrap_or_default(),
            })?;
            println!("{}\t{}", session.id, session.name);
        }

        Command::KillSession { name } => {
            let tmux = connect()?;
            tmux.session_by_name(name)?
                .ok_or_else(|| format!("session not found: {name}"))?
                .kill()?;
        }

        Command::RenameSession { name, new_name } => {
            let tmux = connect()?;
            tmux.session_by_name(name)?
                .ok_or_else(|| format!("session not found: {name}"))?
                .rename(new_name)?;
        }

        Command::Capture {
            pane,
            escapes,
            join,
        } => {
            let tmux = connect()?;
            let text = tmux
                .pane_by_id(pane)?
                .ok_or_else(|| format!("pane not found: {pane}"))?
                .capture(CaptureOptions {
                    escape_attributes: *escapes,
                    preserve_and_join: *join,
                    ..CaptureOptions::default()
                })?;
            print!("{text}");
        }

        Command::Attach {
            name,
            detach_others,
        } => {
            let tmux = connect()?;
            tmux.session_by_name(name)?
                .ok_or_else(|| format!("session not found: {name}"))?
                .attach(&AttachSessionOptions {
                    detach_clients: *detach_others,
                    ..AttachSessionOptions::default()
                })?;
        }

        Command::SetOption {
            scope,
            target,
            key,
            value,
        } => {
            let tmux = connect()?;
            with_options(&tmux, *scope, target.as_deref(), |o| o.set_option(key, value))?;
        }

        Command::ShowOptions { scope, target, key } => {
            let tmux = connect()?;
            with_options(&tmux, *scope, target.as_deref(), |o| {
                let options: Vec<_> = match key {
                    Some(key) => o.option(key)?.into_iter().collect(),
                    None => o.options()?,
                };
                for option in options {
                    println!("{} {}", option.key, option.value);
                }
                Ok(())
            })?;
        }

        Command::UnsetOption { scope, target, key } => {
            let tmux = connect()?;
            with_options(&tmux, *scope, target.as_deref(), |o| o.delete_option(key))?;
        }

        Command::KillServer => connect()?.kill_server()?,

        Command::SocketPath => println!("{}", default_socket_path().display()),
    }

    Ok(())
}

/// Resolve the owner of options at `scope` and hand it to `f`.
fn with_options<F>(tmux: &Tmux, scope: Scope, target: Option<&str>, f: F) -> CliResult
where
    F: FnOnce(&dyn Options) -> tmuxdrive::Result<()>,
{
    let scope = OptionScope::from(scope);
    let require_target =
        || target.ok_or_else(|| format!("--target is required for {scope:?} options"));

    match scope {
        OptionScope::Server => f(tmux)?,
        OptionScope::Session => {
            let name = require_target()?;
            let session = tmux
                .session_by_name(name)?
                .ok_or_else(|| format!("session not found: {name}"))?;
            f(&session)?;
        }
        OptionScope::Window => {
            let id = require_target()?;
            let window = tmux
                .window_by_id(id)?
                .ok_or_else(|| format!("window not found: {id}"))?;
            f(&window)?;
        }
        OptionScope::Pane => {
            let id = require_target()?;
            let pane = tmux
                .pane_by_id(id)?
                .ok_or_else(|| format!("pane not found: {id}"))?;
            f(&pane)?;
        }
    }
    Ok(())
}
