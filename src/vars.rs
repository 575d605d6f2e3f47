//! tmux format variable names.
//!
//! Only the variables decoded by the entity types are listed here. See the
//! FORMATS section of tmux(1) for the full reference.

// Server
pub const PID: &str = "pid";
pub const SOCKET_PATH: &str = "socket_path";
pub const START_TIME: &str = "start_time";
pub const UID: &str = "uid";
pub const USER: &str = "user";
pub const VERSION: &str = "version";

// Client
pub const CLIENT_ACTIVITY: &str = "client_activity";
pub const CLIENT_CELL_HEIGHT: &str = "client_cell_height";
pub const CLIENT_CELL_WIDTH: &str = "client_cell_width";
pub const CLIENT_CONTROL_MODE: &str = "client_control_mode";
pub const CLIENT_CREATED: &str = "client_created";
pub const CLIENT_DISCARDED: &str = "client_discarded";
pub const CLIENT_FLAGS: &str = "client_flags";
pub const CLIENT_HEIGHT: &str = "client_height";
pub const CLIENT_KEY_TABLE: &str = "client_key_table";
pub const CLIENT_LAST_SESSION: &str = "client_last_session";
pub const CLIENT_NAME: &str = "client_name";
pub const CLIENT_PID: &str = "client_pid";
pub const CLIENT_PREFIX: &str = "client_prefix";
pub const CLIENT_READONLY: &str = "client_readonly";
pub const CLIENT_SESSION: &str = "client_session";
pub const CLIENT_TERMFEATURES: &str = "client_termfeatures";
pub const CLIENT_TERMNAME: &str = "client_termname";
pub const CLIENT_TERMTYPE: &str = "client_termtype";
pub const CLIENT_TTY: &str = "client_tty";
pub const CLIENT_UID: &str = "client_uid";
pub const CLIENT_USER: &str = "client_user";
pub const CLIENT_UTF8: &str = "client_utf8";
pub const CLIENT_WIDTH: &str = "client_width";
pub const CLIENT_WRITTEN: &str = "client_written";

// Session
pub const SESSION_ACTIVITY: &str = "session_activity";
pub const SESSION_ALERTS: &str = "session_alerts";
pub const SESSION_ATTACHED: &str = "session_attached";
pub const SESSION_ATTACHED_LIST: &str = "session_attached_list";
pub const SESSION_CREATED: &str = "session_created";
pub const SESSION_FORMAT: &str = "session_format";
pub const SESSION_GROUP: &str = "session_group";
pub const SESSION_GROUP_ATTACHED: &str = "session_group_attached";
pub const SESSION_GROUP_ATTACHED_LIST: &str = "session_group_attached_list";
pub const SESSION_GROUP_LIST: &str = "session_group_list";
pub const SESSION_GROUP_MANY_ATTACHED: &str = "session_group_many_attached";
pub const SESSION_GROUP_SIZE: &str = "session_group_size";
pub const SESSION_GROUPED: &str = "session_grouped";
pub const SESSION_ID: &str = "session_id";
pub const SESSION_LAST_ATTACHED: &str = "session_last_attached";
pub const SESSION_MANY_ATTACHED: &str = "session_many_attached";
pub const SESSION_MARKED: &str = "session_marked";
pub const SESSION_NAME: &str = "session_name";
pub const SESSION_PATH: &str = "session_path";
pub const SESSION_STACK: &str = "session_stack";
pub const SESSION_WINDOWS: &str = "session_windows";

// Window
pub const WINDOW_ACTIVE: &str = "window_active";
pub const WINDOW_ACTIVE_CLIENTS: &str = "window_active_clients";
pub const WINDOW_ACTIVE_CLIENTS_LIST: &str = "window_active_clients_list";
pub const WINDOW_ACTIVE_SESSIONS: &str = "window_active_sessions";
pub const WINDOW_ACTIVE_SESSIONS_LIST: &str = "window_active_sessions_list";
pub const WINDOW_ACTIVITY: &str = "window_activity";
pub const WINDOW_ACTIVITY_FLAG: &str = "window_activity_flag";
pub const WINDOW_BELL_FLAG: &str = "window_bell_flag";
pub const WINDOW_BIGGER: &str = "window_bigger";
pub const WINDOW_CELL_HEIGHT: &str = "window_cell_height";
pub const WINDOW_CELL_WIDTH: &str = "window_cell_width";
pub const WINDOW_END_FLAG: &str = "window_end_flag";
pub const WINDOW_FLAGS: &str = "window_flags";
pub const WINDOW_FORMAT: &str = "window_format";
pub const WINDOW_HEIGHT: &str = "window_height";
pub const WINDOW_ID: &str = "window_id";
pub const WINDOW_INDEX: &str = "window_index";
pub const WINDOW_LAST_FLAG: &str = "window_last_flag";
pub const WINDOW_LAYOUT: &str = "window_layout";
pub const WINDOW_LINKED: &str = "window_linked";
pub const WINDOW_LINKED_SESSIONS: &str = "window_linked_sessions";
pub const WINDOW_LINKED_SESSIONS_LIST: &str = "window_linked_sessions_list";
pub const WINDOW_MARKED_FLAG: &str = "window_marked_flag";
pub const WINDOW_NAME: &str = "window_name";
pub const WINDOW_OFFSET_X: &str = "window_offset_x";
pub const WINDOW_OFFSET_Y: &str = "window_offset_y";
pub const WINDOW_PANES: &str = "window_panes";
pub const WINDOW_RAW_FLAGS: &str = "window_raw_flags";
pub const WINDOW_SILENCE_FLAG: &str = "window_silence_flag";
pub const WINDOW_STACK_INDEX: &str = "window_stack_index";
pub const WINDOW_START_FLAG: &str = "window_start_flag";
pub const WINDOW_VISIBLE_LAYOUT: &str = "window_visible_layout";
pub const WINDOW_WIDTH: &str = "window_width";
pub const WINDOW_ZOOMED_FLAG: &str = "window_zoomed_flag";

// Pane
pub const PANE_ACTIVE: &str = "pane_active";
pub const PANE_AT_BOTTOM: &str = "pane_at_bottom";
pub const PANE_AT_LEFT: &str = "pane_at_left";
pub const PANE_AT_RIGHT: &str = "pane_at_right";
pub const PANE_AT_TOP: &str = "pane_at_top";
pub const PANE_BG: &str = "pane_bg";
pub const PANE_BOTTOM: &str = "pane_bottom";
pub const PANE_CURRENT_COMMAND: &str = "pane_current_command";
pub const PANE_CURRENT_PATH: &str = "pane_current_path";
pub const PANE_DEAD: &str = "pane_dead";
pub const PANE_DEAD_SIGNAL: &str = "pane_dead_signal";
pub const PANE_DEAD_STATUS: &str = "pane_dead_status";
pub const PANE_DEAD_TIME: &str = "pane_dead_time";
pub const PANE_FG: &str = "pane_fg";
pub const PANE_FORMAT: &str = "pane_format";
pub const PANE_HEIGHT: &str = "pane_height";
pub const PANE_ID: &str = "pane_id";
pub const PANE_IN_MODE: &str = "pane_in_mode";
pub const PANE_INDEX: &str = "pane_index";
pub const PANE_INPUT_OFF: &str = "pane_input_off";
pub const PANE_LAST: &str = "pane_last";
pub const PANE_LEFT: &str = "pane_left";
pub const PANE_MARKED: &str = "pane_marked";
pub const PANE_MARKED_SET: &str = "pane_marked_set";
pub const PANE_MODE: &str = "pane_mode";
pub const PANE_PATH: &str = "pane_path";
pub const PANE_PID: &str = "pane_pid";
pub const PANE_PIPE: &str = "pane_pipe";
pub const PANE_RIGHT: &str = "pane_right";
pub const PANE_SEARCH_STRING: &str = "pane_search_string";
pub const PANE_START_COMMAND: &str = "pane_start_command";
pub const PANE_START_PATH: &str = "pane_start_path";
pub const PANE_SYNCHRONIZED: &str = "pane_synchronized";
pub const PANE_TABS: &str = "pane_tabs";
pub const PANE_TITLE: &str = "pane_title";
pub const PANE_TOP: &str = "pane_top";
pub const PANE_TTY: &str = "pane_tty";
pub const PANE_UNSEEN_CHANGES: &str = "pane_unseen_changes";
pub const PANE_WIDTH: &str = "pane_width";
