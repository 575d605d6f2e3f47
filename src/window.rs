//! tmux windows.

use crate::client::Client;
use crate::error::{Context, Result};
use crate::option::{OptionScope, Options};
use crate::pane::{self, Pane};
use crate::query::{Query, Record};
use crate::session::Session;
use crate::tmux::Tmux;
use crate::vars;
use serde::Serialize;
use std::fmt;

pub(crate) const VARS: &[&str] = &[
    vars::WINDOW_ACTIVE,
    vars::WINDOW_ACTIVE_CLIENTS,
    vars::WINDOW_ACTIVE_CLIENTS_LIST,
    vars::WINDOW_ACTIVE_SESSIONS,
    vars::WINDOW_ACTIVE_SESSIONS_LIST,
    vars::WINDOW_ACTIVITY,
    vars::WINDOW_ACTIVITY_FLAG,
    vars::WINDOW_BELL_FLAG,
    vars::WINDOW_BIGGER,
    vars::WINDOW_CELL_HEIGHT,
    vars::WINDOW_CELL_WIDTH,
    vars::WINDOW_END_FLAG,
    vars::WINDOW_FLAGS,
    vars::WINDOW_FORMAT,
    vars::WINDOW_HEIGHT,
    vars::WINDOW_ID,
    vars::WINDOW_INDEX,
    vars::WINDOW_LAST_FLAG,
    vars::WINDOW_LAYOUT,
    vars::WINDOW_LINKED,
    vars::WINDOW_LINKED_SESSIONS,
    vars::WINDOW_LINKED_SESSIONS_LIST,
    vars::WINDOW_MARKED_FLAG,
    vars::WINDOW_NAME,
    vars::WINDOW_OFFSET_X,
    vars::WINDOW_OFFSET_Y,
    vars::WINDOW_PANES,
    vars::WINDOW_RAW_FLAGS,
    vars::WINDOW_SILENCE_FLAG,
    vars::WINDOW_STACK_INDEX,
    vars::WINDOW_START_FLAG,
    vars::WINDOW_VISIBLE_LAYOUT,
    vars::WINDOW_WIDTH,
    vars::WINDOW_ZOOMED_FLAG,
];

/// Snapshot of a window. `id` (`@N`) is stable.
#[derive(Debug, Clone, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Window<'t> {
    pub active: bool,
    pub active_clients: u32,
    pub active_clients_list: Vec<String>,
    pub active_sessions: u32,
    pub active_sessions_list: Vec<String>,
    pub activity: String,
    pub activity_flag: bool,
    pub bell_flag: bool,
    pub bigger: bool,
    pub cell_height: u32,
    pub cell_width: u32,
    pub end_flag: bool,
    pub flags: String,
    pub format: bool,
    pub height: u32,
    pub id: String,
    pub index: u32,
    pub last_flag: bool,
    pub layout: String,
    pub linked: bool,
    pub linked_sessions: u32,
    pub linked_sessions_list: Vec<String>,
    pub marked_flag: bool,
    pub name: String,
    pub offset_x: u32,
    pub offset_y: u32,
    pub panes: u32,
    pub raw_flags: String,
    pub silence_flag: bool,
    pub stack_index: u32,
    pub start_flag: bool,
    pub visible_layout: String,
    pub width: u32,
    pub zoomed_flag: bool,

    #[serde(skip)]
    tmux: &'t Tmux,
}

/// Preset window layouts for `select-layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLayout {
    EvenHorizontal,
    EvenVertical,
    MainHorizontal,
    MainVertical,
    Tiled,
}

impl WindowLayout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EvenHorizontal => "even-horizontal",
            Self::EvenVertical => "even-vertical",
            Self::MainHorizontal => "main-horizontal",
            Self::MainVertical => "main-vertical",
            Self::Tiled => "tiled",
        }
    }
}

impl fmt::Display for WindowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'t> Window<'t> {
    pub(crate) fn from_record(record: &Record, tmux: &'t Tmux) -> Self {
        Self {
            active: record.flag(vars::WINDOW_ACTIVE),
            active_clients: record.number(vars::WINDOW_ACTIVE_CLIENTS),
            active_clients_list: record.list(vars::WINDOW_ACTIVE_CLIENTS_LIST),
            active_sessions: record.number(vars::WINDOW_ACTIVE_SESSIONS),
            active_sessions_list: record.list(vars::WINDOW_ACTIVE_SESSIONS_LIST),
            activity: record.string(vars::WINDOW_ACTIVITY),
            activity_flag: record.flag(vars::WINDOW_ACTIVITY_FLAG),
            bell_flag: record.flag(vars::WINDOW_BELL_FLAG),
            bigger: record.flag(vars::WINDOW_BIGGER),
            cell_height: record.number(vars::WINDOW_CELL_HEIGHT),
            cell_width: record.number(vars::WINDOW_CELL_WIDTH),
            end_flag: record.flag(vars::WINDOW_END_FLAG),
            flags: record.string(vars::WINDOW_FLAGS),
            format: record.flag(vars::WINDOW_FORMAT),
            height: record.number(vars::WINDOW_HEIGHT),
            id: record.string(vars::WINDOW_ID),
            index: record.number(vars::WINDOW_INDEX),
            last_flag: record.flag(vars::WINDOW_LAST_FLAG),
            layout: record.string(vars::WINDOW_LAYOUT),
            linked: record.flag(vars::WINDOW_LINKED),
            linked_sessions: record.number(vars::WINDOW_LINKED_SESSIONS),
            linked_sessions_list: record.list(vars::WINDOW_LINKED_SESSIONS_LIST),
            marked_flag: record.flag(vars::WINDOW_MARKED_FLAG),
            name: record.string(vars::WINDOW_NAME),
            offset_x: record.number(vars::WINDOW_OFFSET_X),
            offset_y: record.number(vars::WINDOW_OFFSET_Y),
            panes: record.number(vars::WINDOW_PANES),
            raw_flags: record.string(vars::WINDOW_RAW_FLAGS),
            silence_flag: record.flag(vars::WINDOW_SILENCE_FLAG),
            stack_index: record.number(vars::WINDOW_STACK_INDEX),
            start_flag: record.flag(vars::WINDOW_START_FLAG),
            visible_layout: record.string(vars::WINDOW_VISIBLE_LAYOUT),
            width: record.number(vars::WINDOW_WIDTH),
            zoomed_flag: record.flag(vars::WINDOW_ZOOMED_FLAG),
            tmux,
        }
    }

    fn targeted(&self, command: &str) -> Query {
        self.tmux
            .query()
            .cmd([command])
            .fargs(["-t", self.id.as_str()])
    }

    /// Panes in this window.
    pub fn list_panes(&self) -> Result<Vec<Pane<'t>>> {
        let records = self
            .tmux
            .run(self.targeted("list-panes").vars(pane::VARS))
            .and_then(|o| o.collect())
            .context("failed to list panes")?;
        Ok(records
            .iter()
            .map(|r| Pane::from_record(r, self.tmux))
            .collect())
    }

    pub fn kill(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("kill-window"))
            .context("failed to kill window")?;
        Ok(())
    }

    /// Rename the window and update this snapshot's name.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.tmux
            .run(self.targeted("rename-window").pargs([name]))
            .context("failed to rename window")?;
        self.name = name.to_string();
        Ok(())
    }

    /// Make this window current in its session.
    pub fn select(&self) -> Result<()> {
        self.tmux
            .run(self.targeted("select-window"))
            .context("failed to select window")?;
        Ok(())
    }

    pub fn select_layout(&self, layout: WindowLayout) -> Result<()> {
        self.tmux
            .run(self.targeted("select-layout").pargs([layout.as_str()]))
            .context("failed to select layout")?;
        Ok(())
    }

    pub(crate) fn move_query(&self, target_session: &str, target_index: u32) -> Query {
        self.tmux
            .query()
            .cmd(["move-window"])
            .fargs(["-s", self.id.as_str()])
            .fargs(["-t".to_string(), format!("{target_session}:{target_index}")])
    }

    /// Move this window to `target_session:target_index`.
    ///
    /// Fails if a window already exists at the destination.
    pub fn move_to(&self, target_session: &str, target_index: u32) -> Result<()> {
        self.tmux
            .run(self.move_query(target_session, target_index))
            .context("failed to move window")?;
        Ok(())
    }

    /// Find a pane of this window by index.
    pub fn pane_by_index(&self, index: u32) -> Result<Option<Pane<'t>>> {
        let panes = self
            .list_panes()
            .context("failed to get pane by index")?;
        Ok(panes.into_iter().find(|p| p.index == index))
    }

    /// Sessions this window is linked into.
    pub fn list_linked_sessions(&self) -> Result<Vec<Session<'t>>> {
        self.sessions_named(&self.linked_sessions_list)
    }

    /// Sessions in which this window is the current window.
    pub fn list_active_sessions(&self) -> Result<Vec<Session<'t>>> {
        self.sessions_named(&self.active_sessions_list)
    }

    /// Clients currently viewing this window.
    pub fn list_active_clients(&self) -> Result<Vec<Client<'t>>> {
        let clients = self.tmux.list_clients()?;
        Ok(clients
            .into_iter()
            .filter(|c| self.active_clients_list.contains(&c.tty))
            .collect())
    }

    // Names that no longer resolve (or the empty placeholder of an empty
    // list) are skipped.
    fn sessions_named(&self, names: &[String]) -> Result<Vec<Session<'t>>> {
        let sessions = self.tmux.list_sessions()?;
        Ok(names
            .iter()
            .filter_map(|name| sessions.iter().find(|s| &s.name == name).cloned())
            .collect())
    }
}

impl Options for Window<'_> {
    fn option_target(&self) -> (&Tmux, OptionScope, Option<&str>) {
        (self.tmux, OptionScope::Window, Some(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(tmux: &Tmux) -> Window<'_> {
        let record: Record = [
            (vars::WINDOW_ACTIVE, "1"),
            (vars::WINDOW_ACTIVE_CLIENTS, "1"),
            (vars::WINDOW_ACTIVE_CLIENTS_LIST, "/dev/pts/1"),
            (vars::WINDOW_ACTIVE_SESSIONS_LIST, "work"),
            (vars::WINDOW_FLAGS, "*Z"),
            (vars::WINDOW_HEIGHT, "49"),
            (vars::WINDOW_ID, "@5"),
            (vars::WINDOW_INDEX, "2"),
            (vars::WINDOW_LAYOUT, "c1d2,200x49,0,0,7"),
            (vars::WINDOW_LINKED_SESSIONS_LIST, "work,scratch"),
            (vars::WINDOW_NAME, "vim"),
            (vars::WINDOW_PANES, "3"),
            (vars::WINDOW_SILENCE_FLAG, "0"),
            (vars::WINDOW_WIDTH, "200"),
            (vars::WINDOW_ZOOMED_FLAG, "1"),
        ]
        .into_iter()
        .collect();
        Window::from_record(&record, tmux)
    }

    #[test]
    fn test_decode_window() {
        let tmux = Tmux::for_tests();
        let w = window(&tmux);
        assert!(w.active);
        assert_eq!(w.active_clients_list, vec!["/dev/pts/1"]);
        assert_eq!(w.active_sessions, 0);
        assert_eq!(w.flags, "*Z");
        assert_eq!(w.id, "@5");
        assert_eq!(w.index, 2);
        assert_eq!(w.linked_sessions_list, vec!["work", "scratch"]);
        assert_eq!(w.panes, 3);
        assert!(!w.silence_flag);
        assert_eq!(w.width, 200);
        assert!(w.zoomed_flag);
        assert!(!w.bell_flag);
    }

    #[test]
    fn test_move_query() {
        let tmux = Tmux::for_tests();
        assert_eq!(
            window(&tmux).move_query("work", 10).render(),
            vec!["move-window", "-s", "@5", "-t", "work:10"]
        );
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(WindowLayout::EvenHorizontal.as_str(), "even-horizontal");
        assert_eq!(WindowLayout::EvenVertical.as_str(), "even-vertical");
        assert_eq!(WindowLayout::MainHorizontal.as_str(), "main-horizontal");
        assert_eq!(WindowLayout::MainVertical.as_str(), "main-vertical");
        assert_eq!(WindowLayout::Tiled.to_string(), "tiled");
    }

    #[test]
    fn test_serializes_without_handle() {
        let tmux = Tmux::for_tests();
        let json = serde_json::to_value(window(&tmux)).expect("serialize");
        assert_eq!(json["id"], "@5");
        assert_eq!(json["linked_sessions_list"][1], "scratch");
        assert!(json.get("tmux").is_none());
    }
}
