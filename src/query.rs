//! Query builder and result parser.
//!
//! A [`Query`] collects the pieces of one tmux invocation and renders them
//! into an argument list without touching any process. [`Query::run`] and
//! [`Query::run_tty`] are the only places a real process is spawned.
//!
//! Variables are requested through tmux's format templating: each name is
//! wrapped as `#{name}` and the names are joined with [`SEPARATOR`]. The
//! output then holds one line per entity, which [`QueryOutput::collect`]
//! splits back into [`Record`]s. A value that contains the separator itself
//! misaligns the fields and is reported as malformed output.

use crate::error::{Result, TmuxError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Field separator placed between variables in the format template.
pub const SEPARATOR: &str = "-:-";

/// The only command whose format flag is `-p` rather than `-F`.
const DISPLAY_MESSAGE: &str = "display-message";

/// One tmux invocation under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    socket: Option<PathBuf>,
    command: Vec<String>,
    flag_args: Vec<String>,
    positional_args: Vec<String>,
    variables: Vec<String>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target the server listening on `path` (`-S`).
    #[must_use]
    pub fn socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.socket = Some(path.into());
        self
    }

    /// Append command tokens.
    #[must_use]
    pub fn cmd<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Append flag arguments. Duplicates are kept in order.
    #[must_use]
    pub fn fargs<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flag_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append positional arguments, rendered after all flags.
    #[must_use]
    pub fn pargs<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positional_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Request output variables, replacing any earlier request.
    #[must_use]
    pub fn vars(mut self, names: &[&str]) -> Self {
        self.variables = names.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// The variables this query asks tmux to print.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Render the argument list passed to the tmux binary.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(
            self.command.len() + self.flag_args.len() + self.positional_args.len() + 4,
        );
        if let Some(socket) = &self.socket {
            out.push("-S".to_string());
            out.push(socket.to_string_lossy().into_owned());
        }
        out.extend(self.command.iter().cloned());
        out.extend(self.flag_args.iter().cloned());

        if let Some(template) = self.template() {
            out.push(self.format_flag().to_string());
            out.push(template);
        }

        out.extend(self.positional_args.iter().cloned());
        out
    }

    fn template(&self) -> Option<String> {
        if self.variables.is_empty() {
            return None;
        }
        let joined = self
            .variables
            .iter()
            .map(|v| format!("#{{{v}}}"))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        Some(format!("'{joined}'"))
    }

    fn format_flag(&self) -> &'static str {
        if self.command.first().is_some_and(|c| c == DISPLAY_MESSAGE) {
            "-p"
        } else {
            "-F"
        }
    }

    fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(self.render());
        cmd
    }

    /// Run the query, capturing its output.
    pub fn run(self, program: &Path) -> Result<QueryOutput> {
        let args = self.render();
        debug!("{} {}", program.display(), args.join(" "));

        let output = self
            .command(program)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TmuxError::Launch {
                program: program.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("tmux {} failed: {}", args.join(" "), stderr);
            return Err(TmuxError::ExternalProcess {
                status: output.status.code(),
                stderr,
            });
        }

        Ok(QueryOutput {
            result: String::from_utf8_lossy(&output.stdout).into_owned(),
            variables: self.variables,
        })
    }

    /// Run the query attached to the calling terminal.
    ///
    /// Blocks until tmux exits. Nothing is captured, so a failure carries the
    /// exit status only.
    pub fn run_tty(self, program: &Path) -> Result<()> {
        debug!("{} {} (tty)", program.display(), self.render().join(" "));

        let status = self
            .command(program)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| TmuxError::Launch {
                program: program.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(TmuxError::ExternalProcess {
                status: status.code(),
                stderr: String::new(),
            })
        }
    }
}

/// Captured output of a finished query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    result: String,
    variables: Vec<String>,
}

impl QueryOutput {
    /// Pair raw text with the variables that were used to request it.
    #[must_use]
    pub fn new(result: impl Into<String>, variables: &[&str]) -> Self {
        Self {
            result: result.into(),
            variables: variables.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Parse every non-empty line into a record.
    pub fn collect(&self) -> Result<Vec<Record>> {
        self.result
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line))
            .collect()
    }

    /// Parse the first record.
    pub fn one(&self) -> Result<Record> {
        self.collect()?
            .into_iter()
            .next()
            .ok_or(TmuxError::EmptyOutput)
    }

    /// The unparsed output.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.result
    }

    /// Consume the output, keeping the unparsed text.
    #[must_use]
    pub fn into_raw(self) -> String {
        self.result
    }

    fn parse_line(&self, line: &str) -> Result<Record> {
        let stripped = line.trim_matches('\'');
        let values: Vec<&str> = stripped.split(SEPARATOR).collect();

        if values.len() != self.variables.len() {
            return Err(TmuxError::MalformedOutput {
                expected: self.variables.len(),
                actual: values.len(),
                line: line.to_string(),
            });
        }

        let fields = self
            .variables
            .iter()
            .zip(values)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        Ok(Record { fields })
    }
}

/// One decoded output line, keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Value of a variable, empty when it was not requested.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Boolean variable (`"1"` is true).
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        crate::parsing::is_one(self.get(key))
    }

    /// Numeric variable, zero when unparsable.
    #[must_use]
    pub fn number<T>(&self, key: &str) -> T
    where
        T: std::str::FromStr + Default,
    {
        crate::parsing::parse_number(self.get(key))
    }

    /// Comma-separated list variable.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        crate::parsing::parse_list(self.get(key))
    }

    /// Owned copy of a string variable.
    #[must_use]
    pub fn string(&self, key: &str) -> String {
        self.get(key).to_string()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_list_sessions() {
        let q = Query::new()
            .cmd(["list-sessions"])
            .vars(&["session_name", "session_id"]);
        assert_eq!(
            q.render(),
            vec!["list-sessions", "-F", "'#{session_name}-:-#{session_id}'"]
        );
    }

    #[test]
    fn test_render_display_message_uses_p() {
        let q = Query::new()
            .cmd(["display-message"])
            .vars(&["session_name", "session_id"]);
        assert_eq!(
            q.render(),
            vec!["display-message", "-p", "'#{session_name}-:-#{session_id}'"]
        );
    }

    #[test]
    fn test_render_display_message_behind_socket() {
        let q = Query::new()
            .socket("/tmp/tmux-1000/default")
            .cmd(["display-message"])
            .vars(&["pid"]);
        assert_eq!(
            q.render(),
            vec!["-S", "/tmp/tmux-1000/default", "display-message", "-p", "'#{pid}'"]
        );
    }

    #[test]
    fn test_render_order() {
        let q = Query::new()
            .cmd(["new-session"])
            .socket("/tmp/sock")
            .pargs(["'htop'"])
            .fargs(["-d", "-P"])
            .vars(&["session_id"])
            .fargs(["-s", "work"]);
        assert_eq!(
            q.render(),
            vec![
                "-S", "/tmp/sock", "new-session", "-d", "-P", "-s", "work", "-F",
                "'#{session_id}'", "'htop'"
            ]
        );
    }

    #[test]
    fn test_render_without_vars_has_no_format_flag() {
        let q = Query::new().cmd(["kill-window"]).fargs(["-t", "@1"]);
        assert_eq!(q.render(), vec!["kill-window", "-t", "@1"]);
    }

    #[test]
    fn test_vars_last_call_wins() {
        let q = Query::new()
            .cmd(["list-panes"])
            .vars(&["pane_id", "pane_index"])
            .vars(&["pane_title"]);
        assert_eq!(q.variables(), ["pane_title"]);
        assert_eq!(q.render(), vec!["list-panes", "-F", "'#{pane_title}'"]);
    }

    #[test]
    fn test_duplicate_flags_are_kept() {
        let q = Query::new()
            .cmd(["attach-session"])
            .fargs(["-d"])
            .fargs(["-t", "a"])
            .fargs(["-d"]);
        assert_eq!(q.render(), vec!["attach-session", "-d", "-t", "a", "-d"]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let q = Query::new().cmd(["list-windows"]).vars(&["window_id"]);
        assert_eq!(q.render(), q.render());
    }

    #[test]
    fn test_collect_two_sessions() {
        let out = QueryOutput::new(
            "'main-:-$0'\n'work-:-$1'\n",
            &["session_name", "session_id"],
        );
        let records = out.collect().expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("session_name"), "main");
        assert_eq!(records[0].get("session_id"), "$0");
        assert_eq!(records[1].get("session_name"), "work");
        assert_eq!(records[1].get("session_id"), "$1");
    }

    #[test]
    fn test_collect_unquoted_lines() {
        let out = QueryOutput::new("a-:-b\n", &["x", "y"]);
        let record = out.one().expect("parse");
        assert_eq!(record.get("x"), "a");
        assert_eq!(record.get("y"), "b");
    }

    #[test]
    fn test_collect_skips_blank_lines() {
        let out = QueryOutput::new("\n'a'\n\n'b'\n", &["x"]);
        let records = out.collect().expect("parse");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_collect_empty_output() {
        let out = QueryOutput::new("", &["x"]);
        assert!(out.collect().expect("parse").is_empty());
        assert!(matches!(out.one(), Err(TmuxError::EmptyOutput)));
    }

    #[test]
    fn test_field_count_mismatch() {
        let out = QueryOutput::new("'a-:-b-:-c'\n", &["x", "y"]);
        let err = out.collect().expect_err("should fail");
        assert!(matches!(
            err,
            TmuxError::MalformedOutput {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_mismatch_on_later_line_fails_whole_parse() {
        let out = QueryOutput::new("'a-:-b'\n'c'\n", &["x", "y"]);
        assert!(out.collect().is_err());
    }

    #[test]
    fn test_separator_in_value_misaligns() {
        let out = QueryOutput::new("'we-:-ird-:-$3'\n", &["session_name", "session_id"]);
        assert!(out.one().expect_err("collision").is_malformed_output());
    }

    #[test]
    fn test_raw_is_verbatim() {
        let out = QueryOutput::new("  line one\nline two\n", &[]);
        assert_eq!(out.raw(), "  line one\nline two\n");
    }

    #[test]
    fn test_record_coercions() {
        let record: Record = [("a", "1"), ("n", "12"), ("l", "x,y"), ("e", "")]
            .into_iter()
            .collect();
        assert!(record.flag("a"));
        assert!(!record.flag("e"));
        assert_eq!(record.number::<u32>("n"), 12);
        assert_eq!(record.number::<u32>("e"), 0);
        assert_eq!(record.list("l"), vec!["x", "y"]);
        assert_eq!(record.list("e"), vec![""]);
        assert_eq!(record.get("missing"), "");
    }

    fn field() -> impl Strategy<Value = String> {
        // No '-', ':' or quotes, so a value can never form the separator.
        "[a-zA-Z0-9 _$@%#/,.]{0,12}".prop_filter("no separator", |s| !s.contains(SEPARATOR))
    }

    proptest! {
        #[test]
        fn prop_round_trip(values in prop::collection::vec(field(), 1..8)) {
            let names: Vec<String> = (0..values.len()).map(|i| format!("v{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let line = format!("'{}'\n", values.join(SEPARATOR));

            let record = QueryOutput::new(line, &refs).one().expect("parse");
            prop_assert_eq!(record.len(), values.len());
            for (name, value) in names.iter().zip(&values) {
                prop_assert_eq!(record.get(name), value.as_str());
            }
        }

        #[test]
        fn prop_count_mismatch_fails(
            values in prop::collection::vec(field(), 1..8),
            extra in 1usize..4,
        ) {
            let names: Vec<String> = (0..values.len() + extra).map(|i| format!("v{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let line = format!("'{}'\n", values.join(SEPARATOR));

            let err = QueryOutput::new(line, &refs).collect().expect_err("mismatch");
            prop_assert!(err.is_malformed_output());
        }
    }
}
