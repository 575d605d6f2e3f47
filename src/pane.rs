//! tmux panes.

use crate::error::{Context, Result};
use crate::option::{OptionScope, Options};
use crate::query::{Query, Record};
use crate::tmux::Tmux;
use crate::vars;
use serde::Serialize;

pub(crate) const VARS: &[&str] = &[
    vars::PANE_ACTIVE,
    vars::PANE_AT_BOTTOM,
    vars::PANE_AT_LEFT,
    vars::PANE_AT_RIGHT,
    vars::PANE_AT_TOP,
    vars::PANE_BG,
    vars::PANE_BOTTOM,
    vars::PANE_CURRENT_COMMAND,
    vars::PANE_CURRENT_PATH,
    vars::PANE_DEAD,
    vars::PANE_DEAD_SIGNAL,
    vars::PANE_DEAD_STATUS,
    vars::PANE_DEAD_TIME,
    vars::PANE_FG,
    vars::PANE_FORMAT,
    vars::PANE_HEIGHT,
    vars::PANE_ID,
    vars::PANE_IN_MODE,
    vars::PANE_INDEX,
    vars::PANE_INPUT_OFF,
    vars::PANE_LAST,
    vars::PANE_LEFT,
    vars::PANE_MARKED,
    vars::PANE_MARKED_SET,
    vars::PANE_MODE,
    vars::PANE_PATH,
    vars::PANE_PID,
    vars::PANE_PIPE,
    vars::PANE_RIGHT,
    vars::PANE_SEARCH_STRING,
    vars::PANE_START_COMMAND,
    vars::PANE_START_PATH,
    vars::PANE_SYNCHRONIZED,
    vars::PANE_TABS,
    vars::PANE_TITLE,
    vars::PANE_TOP,
    vars::PANE_TTY,
    vars::PANE_UNSEEN_CHANGES,
    vars::PANE_WIDTH,
];

/// Snapshot of a pane. `id` (`%N`) is stable.
#[derive(Debug, Clone, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Pane<'t> {
    pub active: bool,
    pub at_bottom: bool,
    pub at_left: bool,
    pub at_right: bool,
    pub at_top: bool,
    pub bg: String,
    pub bottom: String,
    pub current_command: String,
    pub current_path: String,
    pub dead: bool,
    pub dead_signal: i32,
    pub dead_status: i32,
    pub dead_time: String,
    pub fg: String,
    pub format: bool,
    pub height: u32,
    pub id: String,
    pub in_mode: bool,
    pub index: u32,
    pub input_off: bool,
    pub last: bool,
    pub left: String,
    pub marked: bool,
    pub marked_set: bool,
    pub mode: String,
    pub path: String,
    pub pid: i32,
    pub pipe: bool,
    pub right: String,
    pub search_string: String,
    pub start_command: String,
    pub start_path: String,
    pub synchronized: bool,
    pub tabs: String,
    pub title: String,
    pub top: String,
    pub tty: String,
    pub unseen_changes: bool,
    pub width: u32,

    #[serde(skip)]
    tmux: &'t Tmux,
}

/// Neighbour to select relative to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanePosition {
    Up,
    Right,
    Down,
    Left,
}

impl PanePosition {
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Up => "-U",
            Self::Right => "-R",
            Self::Down => "-D",
            Self::Left => "-L",
        }
    }
}

/// Direction of a `split-window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSplitDirection {
    /// Side by side (`-h`).
    Horizontal,
    /// Stacked (`-v`).
    Vertical,
}

impl PaneSplitDirection {
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Horizontal => "-h",
            Self::Vertical => "-v",
        }
    }
}

/// Options for `select-pane`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectPaneOptions {
    /// Select the neighbour in this direction instead of the pane itself.
    pub target_position: Option<PanePosition>,
}

/// Options for `split-window`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitWindowOptions {
    pub split_direction: Option<PaneSplitDirection>,
    pub start_directory: String,
    pub shell_command: String,
}

/// Options for `choose-tree`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChooseTreeOptions {
    pub sessions_collapsed: bool,
    pub windows_collapsed: bool,
}

/// Options for `capture-pane`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CaptureOptions {
    /// Keep text and background attributes as escape sequences (`-e`).
    pub escape_attributes: bool,
    /// Octal-escape non-printable characters (`-C`).
    pub escape_non_printables: bool,
    /// Drop trailing positions with no character (`-T`).
    pub ignore_trailing: bool,
    /// Keep trailing spaces at line ends (`-N`).
    pub preserve_trailing: bool,
    /// Keep trailing spaces and join wrapped lines (`-J`).
    pub preserve_and_join: bool,
}

impl<'t> Pane<'t> {
    pub(crate) fn from_record(record: &Record, tmux: &'t Tmux) -> Self {
        Self {
            active: record.flag(vars::PANE_ACTIVE),
            at_bottom: record.flag(vars::PANE_AT_BOTTOM),
            at_left: record.flag(vars::PANE_AT_LEFT),
            at_right: record.flag(vars::PANE_AT_RIGHT),
            at_top: record.flag(vars::PANE_AT_TOP),
            bg: record.string(vars::PANE_BG),
            bottom: record.string(vars::PANE_BOTTOM),
            current_command: record.string(vars::PANE_CURRENT_COMMAND),
            current_path: record.string(vars::PANE_CURRENT_PATH),
            dead: record.flag(vars::PANE_DEAD),
            dead_signal: record.number(vars::PANE_DEAD_SIGNAL),
            dead_status: record.number(vars::PANE_DEAD_STATUS),
            dead_time: record.string(vars::PANE_DEAD_TIME),
            fg: record.string(vars::PANE_FG),
            format: record.flag(vars::PANE_FORMAT),
            height: record.number(vars::PANE_HEIGHT),
            id: record.string(vars::PANE_ID),
            in_mode: record.flag(vars::PANE_IN_MODE),
            index: record.number(vars::PANE_INDEX),
            input_off: record.flag(vars::PANE_INPUT_OFF),
            last: record.flag(vars::PANE_LAST),
            left: record.string(vars::PANE_LEFT),
            marked: record.flag(vars::PANE_MARKED),
            marked_set: record.flag(vars::PANE_MARKED_SET),
            mode: record.string(vars::PANE_MODE),
            path: record.string(vars::PANE_PATH),
            pid: record.number(vars::PANE_PID),
            pipe: record.flag(vars::PANE_PIPE),
            right: record.string(vars::PANE_RIGHT),
            search_string: record.string(vars::PANE_SEARCH_STRING),
            start_command: record.string(vars::PANE_START_COMMAND),
            start_path: record.string(vars::PANE_START_PATH),
            synchronized: record.flag(vars::PANE_SYNCHRONIZED),
            tabs: record.string(vars::PANE_TABS),
            title: record.string(vars::PANE_TITLE),
            top: record.string(vars::PANE_TOP),
            tty: record.string(vars::PANE_TTY),
            unseen_changes: record.flag(vars::PANE_UNSEEN_CHANGES),
            width: record.number(vars::PANE_WIDTH),
            tmux,
        }
    }

    fn targeted(&self, command: &str) -> Query {
        self.tmux
            .query()
            .cmd([command])
            .fargs(["-t", self.id.as_str()])
    }

    pub fn kill(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("kill-pane"))
            .context("failed to kill pane")?;
        Ok(())
    }

    pub(crate) fn select_query(&self, options: SelectPaneOptions) -> Query {
        let q = self.targeted("select-pane");
        match options.target_position {
            Some(position) => q.fargs([position.flag()]),
            None => q,
        }
    }

    /// Make this pane (or a neighbour of it) the active pane.
    pub fn select(&self, options: SelectPaneOptions) -> Result<()> {
        self.tmux
            .run(self.select_query(options))
            .context("failed to select pane")?;
        Ok(())
    }

    pub(crate) fn split_query(&self, options: &SplitWindowOptions) -> Query {
        let mut q = self
            .targeted("split-window")
            .fargs(["-P"])
            .vars(VARS);
        if let Some(direction) = options.split_direction {
            q = q.fargs([direction.flag()]);
        }
        if !options.start_directory.is_empty() {
            q = q.fargs(["-c", options.start_directory.as_str()]);
        }
        if !options.shell_command.is_empty() {
            q = q.pargs([options.shell_command.as_str()]);
        }
        q
    }

    /// Split this pane, returning the new one.
    pub fn split(&self, options: &SplitWindowOptions) -> Result<Pane<'t>> {
        let record = self
            .tmux
            .run(self.split_query(options))
            .and_then(|o| o.one())
            .context("failed to split pane")?;
        Ok(Pane::from_record(&record, self.tmux))
    }

    pub(crate) fn choose_tree_query(&self, options: ChooseTreeOptions) -> Query {
        let mut q = self.targeted("choose-tree");
        if options.sessions_collapsed {
            q = q.fargs(["-s"]);
        }
        if options.windows_collapsed {
            q = q.fargs(["-w"]);
        }
        q
    }

    /// Put this pane into tree mode.
    pub fn choose_tree(&self, options: ChooseTreeOptions) -> Result<()> {
        self.tmux
            .run(self.choose_tree_query(options))
            .context("failed to put the pane in choose tree mode")?;
        Ok(())
    }

    pub(crate) fn capture_query(&self, options: CaptureOptions) -> Query {
        let mut q = self.targeted("capture-pane").fargs(["-p"]);
        let flags = [
            (options.escape_attributes, "-e"),
            (options.escape_non_printables, "-C"),
            (options.ignore_trailing, "-T"),
            (options.preserve_trailing, "-N"),
            (options.preserve_and_join, "-J"),
        ];
        for (enabled, flag) in flags {
            if enabled {
                q = q.fargs([flag]);
            }
        }
        q
    }

    /// Capture the visible contents of the pane as text.
    pub fn capture(&self, options: CaptureOptions) -> Result<String> {
        let output = self
            .tmux
            .run(self.capture_query(options))
            .context("failed to capture pane")?;
        Ok(output.into_raw())
    }
}

impl Options for Pane<'_> {
    fn option_target(&self) -> (&Tmux, OptionScope, Option<&str>) {
        (self.tmux, OptionScope::Pane, Some(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(tmux: &Tmux) -> Pane<'_> {
        let record: Record = [
            (vars::PANE_ACTIVE, "1"),
            (vars::PANE_AT_TOP, "1"),
            (vars::PANE_CURRENT_COMMAND, "zsh"),
            (vars::PANE_CURRENT_PATH, "/home/dev"),
            (vars::PANE_DEAD, "0"),
            (vars::PANE_DEAD_STATUS, ""),
            (vars::PANE_HEIGHT, "24"),
            (vars::PANE_ID, "%7"),
            (vars::PANE_INDEX, "1"),
            (vars::PANE_PID, "9001"),
            (vars::PANE_TITLE, "dev@box"),
            (vars::PANE_TTY, "/dev/pts/9"),
            (vars::PANE_WIDTH, "80"),
        ]
        .into_iter()
        .collect();
        Pane::from_record(&record, tmux)
    }

    #[test]
    fn test_decode_pane() {
        let tmux = Tmux::for_tests();
        let p = pane(&tmux);
        assert!(p.active);
        assert!(p.at_top);
        assert!(!p.at_bottom);
        assert_eq!(p.current_command, "zsh");
        assert!(!p.dead);
        assert_eq!(p.dead_status, 0);
        assert_eq!(p.height, 24);
        assert_eq!(p.id, "%7");
        assert_eq!(p.index, 1);
        assert_eq!(p.pid, 9001);
        assert_eq!(p.tty, "/dev/pts/9");
        assert_eq!(p.width, 80);
    }

    #[test]
    fn test_select_query() {
        let tmux = Tmux::for_tests();
        let p = pane(&tmux);
        assert_eq!(
            p.select_query(SelectPaneOptions::default()).render(),
            vec!["select-pane", "-t", "%7"]
        );
        assert_eq!(
            p.select_query(SelectPaneOptions {
                target_position: Some(PanePosition::Left),
            })
            .render(),
            vec!["select-pane", "-t", "%7", "-L"]
        );
    }

    #[test]
    fn test_split_query() {
        let tmux = Tmux::for_tests();
        let args = pane(&tmux)
            .split_query(&SplitWindowOptions {
                split_direction: Some(PaneSplitDirection::Horizontal),
                start_directory: "/srv".into(),
                shell_command: "tail -f log".into(),
            })
            .render();
        assert_eq!(
            &args[..8],
            ["split-window", "-t", "%7", "-P", "-h", "-c", "/srv", "-F"]
        );
        assert!(args[8].starts_with("'#{pane_active}"));
        assert_eq!(args[9], "tail -f log");
        assert_eq!(args.len(), 10);
    }

    #[test]
    fn test_choose_tree_query() {
        let tmux = Tmux::for_tests();
        assert_eq!(
            pane(&tmux)
                .choose_tree_query(ChooseTreeOptions {
                    sessions_collapsed: true,
                    windows_collapsed: true,
                })
                .render(),
            vec!["choose-tree", "-t", "%7", "-s", "-w"]
        );
    }

    #[test]
    fn test_capture_query_each_flag_once() {
        let tmux = Tmux::for_tests();
        let p = pane(&tmux);
        assert_eq!(
            p.capture_query(CaptureOptions::default()).render(),
            vec!["capture-pane", "-t", "%7", "-p"]
        );

        let all = p
            .capture_query(CaptureOptions {
                escape_attributes: true,
                escape_non_printables: true,
                ignore_trailing: true,
                preserve_trailing: true,
                preserve_and_join: true,
            })
            .render();
        assert_eq!(
            all,
            vec!["capture-pane", "-t", "%7", "-p", "-e", "-C", "-T", "-N", "-J"]
        );

        let join_only = p
            .capture_query(CaptureOptions {
                preserve_and_join: true,
                ..CaptureOptions::default()
            })
            .render();
        assert_eq!(join_only, vec!["capture-pane", "-t", "%7", "-p", "-J"]);
    }

    #[test]
    fn test_capture_has_no_format_template() {
        let tmux = Tmux::for_tests();
        let args = pane(&tmux).capture_query(CaptureOptions::default()).render();
        assert!(!args.iter().any(|a| a == "-F"));
    }
}
