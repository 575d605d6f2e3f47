//! tmux options.
//!
//! Options live at four scopes. Reads go through `show-options`, whose output
//! is a plain `key value` listing rather than the delimited record format.

use crate::error::{Context, Result};
use crate::query::Query;
use crate::tmux::Tmux;
use serde::Serialize;

/// A single option as printed by `show-options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TmuxOption {
    pub key: String,
    /// Value exactly as tmux printed it, including any quoting.
    pub value: String,
}

impl TmuxOption {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Where an option is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionScope {
    Server,
    Session,
    Window,
    Pane,
}

impl OptionScope {
    /// Scope flag for `set-option`/`show-options`. Session options take none.
    #[must_use]
    pub const fn flag(self) -> Option<&'static str> {
        match self {
            Self::Server => Some("-s"),
            Self::Session => None,
            Self::Window => Some("-w"),
            Self::Pane => Some("-p"),
        }
    }
}

/// Parse a `show-options` listing.
///
/// Each line is split on its first space; lines without one are skipped.
#[must_use]
pub fn parse_options(raw: &str) -> Vec<TmuxOption> {
    raw.lines()
        .filter_map(|line| line.split_once(' '))
        .map(|(key, value)| TmuxOption::new(key, value))
        .collect()
}

fn scoped(tmux: &Tmux, command: &str, scope: OptionScope, target: Option<&str>) -> Query {
    let mut q = tmux.query().cmd([command]);
    if let Some(flag) = scope.flag() {
        q = q.fargs([flag]);
    }
    if let Some(target) = target {
        q = q.fargs(["-t", target]);
    }
    q
}

pub(crate) fn set_query(
    tmux: &Tmux,
    scope: OptionScope,
    target: Option<&str>,
    key: &str,
    value: &str,
) -> Query {
    scoped(tmux, "set-option", scope, target).pargs([key, value])
}

pub(crate) fn unset_query(
    tmux: &Tmux,
    scope: OptionScope,
    target: Option<&str>,
    key: &str,
) -> Query {
    scoped(tmux, "set-option", scope, target)
        .fargs(["-u"])
        .pargs([key])
}

pub(crate) fn show_query(
    tmux: &Tmux,
    scope: OptionScope,
    target: Option<&str>,
    key: Option<&str>,
) -> Query {
    let q = scoped(tmux, "show-options", scope, target);
    match key {
        // -q: an unset option prints nothing instead of failing
        Some(key) => q.fargs(["-q"]).pargs([key]),
        None => q,
    }
}

/// Option access for anything that owns options.
///
/// Implementors only say where their options live; reading and writing is
/// shared.
pub trait Options {
    /// Handle, scope and `-t` target used for option commands.
    fn option_target(&self) -> (&Tmux, OptionScope, Option<&str>);

    /// Set an option.
    fn set_option(&self, key: &str, value: &str) -> Result<()> {
        let (tmux, scope, target) = self.option_target();
        tmux.run(set_query(tmux, scope, target, key, value))
            .context("failed to set option")?;
        Ok(())
    }

    /// Read a single option, `None` when tmux prints nothing for it.
    fn option(&self, key: &str) -> Result<Option<TmuxOption>> {
        let (tmux, scope, target) = self.option_target();
        let output = tmux
            .run(show_query(tmux, scope, target, Some(key)))
            .context("failed to get option")?;
        Ok(parse_options(output.raw())
            .into_iter()
            .find(|o| o.key == key))
    }

    /// Read every option set at this scope.
    fn options(&self) -> Result<Vec<TmuxOption>> {
        let (tmux, scope, target) = self.option_target();
        let output = tmux
            .run(show_query(tmux, scope, target, None))
            .context("failed to list options")?;
        Ok(parse_options(output.raw()))
    }

    /// Unset an option so it falls back to its inherited value.
    fn delete_option(&self, key: &str) -> Result<()> {
        let (tmux, scope, target) = self.option_target();
        tmux.run(unset_query(tmux, scope, target, key))
            .context("failed to delete option")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_splits_on_first_space() {
        let raw = "status-left \"[#S] \"\nmouse on\nbase-index 1\n";
        let options = parse_options(raw);
        assert_eq!(
            options,
            vec![
                TmuxOption::new("status-left", "\"[#S] \""),
                TmuxOption::new("mouse", "on"),
                TmuxOption::new("base-index", "1"),
            ]
        );
    }

    #[test]
    fn test_parse_options_skips_lines_without_value() {
        let options = parse_options("\nlonely\nkey value\n");
        assert_eq!(options, vec![TmuxOption::new("key", "value")]);
    }

    #[test]
    fn test_scope_flags() {
        let tmux = Tmux::for_tests();
        assert_eq!(
            set_query(&tmux, OptionScope::Server, None, "escape-time", "0").render(),
            vec!["set-option", "-s", "escape-time", "0"]
        );
        assert_eq!(
            set_query(&tmux, OptionScope::Session, Some("work"), "mouse", "on").render(),
            vec!["set-option", "-t", "work", "mouse", "on"]
        );
        assert_eq!(
            show_query(&tmux, OptionScope::Window, Some("@3"), Some("mode-keys")).render(),
            vec!["show-options", "-w", "-t", "@3", "-q", "mode-keys"]
        );
        assert_eq!(
            unset_query(&tmux, OptionScope::Pane, Some("%7"), "remain-on-exit").render(),
            vec!["set-option", "-p", "-t", "%7", "-u", "remain-on-exit"]
        );
        assert_eq!(
            show_query(&tmux, OptionScope::Session, Some("$0"), None).render(),
            vec!["show-options", "-t", "$0"]
        );
    }
}
