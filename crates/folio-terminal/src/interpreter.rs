//! Command interpreter state machine

use chrono::{DateTime, FixedOffset};
use folio_content::{ContentProvider, PortfolioContent};
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::command::Command;
use crate::completion::{complete, Completion};
use crate::config::TerminalConfig;
use crate::effect::Effect;
use crate::error::ParseError;
use crate::history::{CommandHistory, Recall};
use crate::output::{LineStyle, OutputLine};

/// Result of submitting one line
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Lines appended to the output, starting with the prompt echo
    pub lines: Vec<OutputLine>,
    /// Side effects for the page to perform
    pub effects: Vec<Effect>,
    /// The output buffer was wiped before `lines` were appended
    pub cleared: bool,
}

impl Submission {
    pub(crate) fn push(&mut self, text: impl Into<String>, style: LineStyle) {
        self.lines.push(OutputLine::new(text, style));
    }

    pub(crate) fn plain(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::plain(text));
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(OutputLine::blank());
    }

    pub(crate) fn effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
        self.cleared = true;
    }
}

/// Terminal session: output buffer, input line, history and command dispatch
pub struct Interpreter {
    pub(crate) config: TerminalConfig,
    pub(crate) content: Box<dyn ContentProvider>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) started: DateTime<FixedOffset>,
    history: CommandHistory,
    output: Vec<OutputLine>,
    input: String,
    matrix_active: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(TerminalConfig::default())
    }
}

impl Interpreter {
    /// Session with the built-in portfolio content and the system clock
    pub fn new(config: TerminalConfig) -> Self {
        Self::with_parts(config, Box::new(PortfolioContent::default()), Box::new(SystemClock))
    }

    pub fn with_parts(config: TerminalConfig, content: Box<dyn ContentProvider>, clock: Box<dyn Clock>) -> Self {
        let started = clock.now();
        info!(user = %config.user, host = %config.host, "terminal session started");
        Self {
            config,
            content,
            clock,
            started,
            history: CommandHistory::new(),
            output: Vec::new(),
            input: String::new(),
            matrix_active: false,
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn prompt(&self) -> String {
        self.config.prompt()
    }

    /// Everything printed since the last `clear`
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Current contents of the input line
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Track typing into the input line
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Seconds since the session started
    pub fn uptime_secs(&self) -> i64 {
        (self.clock.now() - self.started).num_seconds()
    }

    /// Run one line of input
    pub fn submit(&mut self, raw: &str) -> Submission {
        let line = raw.trim();
        self.history.push(line);
        self.input.clear();

        let mut out = Submission::default();
        out.lines.push(OutputLine::echo(&self.prompt(), line));

        match Command::parse(line) {
            Ok(invocation) => {
                debug!(command = invocation.command.name(), "run");
                self.run(invocation.command, &invocation.args, &mut out);
            }
            Err(ParseError::Empty) => {}
            Err(ParseError::UnknownCommand(name)) => {
                debug!(command = %name, "unknown command");
                out.push(format!("bash: {}: command not found", name), LineStyle::Error);
                out.plain("Type help to see available commands.");
            }
        }

        if out.cleared {
            self.output.clear();
        }
        self.output.extend(out.lines.iter().cloned());
        out
    }

    /// Up/Down arrow: step through history and update the input line
    ///
    /// Returns the new input line, or `None` when already at a boundary.
    pub fn recall(&mut self, direction: Recall) -> Option<&str> {
        let line = self.history.recall(direction)?.to_string();
        self.input = line;
        Some(&self.input)
    }

    /// Tab: complete a partial command name
    ///
    /// A unique match replaces the input line; several matches are printed
    /// on one line and the input is left unchanged.
    pub fn autocomplete(&mut self, partial: &str) -> Completion {
        let completion = complete(partial);
        match &completion {
            Completion::Replace(name) => self.input = name.clone(),
            Completion::Candidates(names) => self.output.push(OutputLine::plain(names.join("  "))),
            Completion::NoMatch => {}
        }
        completion
    }

    pub fn is_matrix_active(&self) -> bool {
        self.matrix_active
    }

    pub(crate) fn start_matrix(&mut self) {
        self.matrix_active = true;
    }

    /// Escape while the matrix overlay is up; returns whether it was running
    pub fn stop_matrix(&mut self) -> bool {
        std::mem::take(&mut self.matrix_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn interpreter() -> (Interpreter, ManualClock) {
        let start = DateTime::parse_from_rfc3339("2024-03-07T09:05:00+00:00").unwrap();
        let clock = ManualClock::new(start);
        let term = Interpreter::with_parts(
            TerminalConfig::default(),
            Box::new(PortfolioContent::default()),
            Box::new(clock.clone()),
        );
        (term, clock)
    }

    #[test]
    fn test_empty_submission_only_echoes() {
        let (mut term, _) = interpreter();
        let out = term.submit("   ");
        assert_eq!(out.lines, vec![OutputLine::echo("MrFawsDK@portfolio:~$ ", "")]);
        assert!(term.history().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let (mut term, _) = interpreter();
        let out = term.submit("frobnicate");

        assert_eq!(out.lines.len(), 3);
        assert_eq!(out.lines[1].text, "bash: frobnicate: command not found");
        assert_eq!(out.lines[1].style, LineStyle::Error);
        assert_eq!(term.history().entries(), &["frobnicate"]);
    }

    #[test]
    fn test_echo_keeps_original_case() {
        let (mut term, _) = interpreter();
        let out = term.submit("  WhoAmI ");
        assert_eq!(out.lines[0].text, "MrFawsDK@portfolio:~$ WhoAmI");
        assert_eq!(out.lines[1].text, "MrFawsDK");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let (mut term, _) = interpreter();
        term.submit("whoami");
        term.submit("pwd");
        assert_eq!(term.output().len(), 4);

        let out = term.submit("clear");
        assert!(out.cleared);
        assert!(term.output().is_empty());
        assert_eq!(term.history().len(), 3);
    }

    #[test]
    fn test_recall_updates_input() {
        let (mut term, _) = interpreter();
        term.submit("help");
        term.submit("about");

        assert_eq!(term.recall(Recall::Up), Some("about"));
        assert_eq!(term.recall(Recall::Up), Some("help"));
        assert_eq!(term.recall(Recall::Up), None);
        assert_eq!(term.input(), "help");

        term.recall(Recall::Down);
        assert_eq!(term.recall(Recall::Down), Some(""));
        assert_eq!(term.input(), "");
    }

    #[test]
    fn test_autocomplete() {
        let (mut term, _) = interpreter();
        term.set_input("sk");
        assert_eq!(term.autocomplete("sk"), Completion::Replace("skills".to_string()));
        assert_eq!(term.input(), "skills");

        term.set_input("p");
        assert!(matches!(term.autocomplete("p"), Completion::Candidates(_)));
        assert_eq!(term.input(), "p");
        assert_eq!(term.output().last().unwrap().text, "projects  pwd");

        let before = term.output().len();
        assert_eq!(term.autocomplete("zz"), Completion::NoMatch);
        assert_eq!(term.output().len(), before);
    }

    #[test]
    fn test_uptime_follows_clock() {
        let (mut term, clock) = interpreter();
        clock.advance_secs(3725);
        assert_eq!(term.uptime_secs(), 3725);
        assert_eq!(term.submit("uptime").lines[1].text, "up 1:02:05");
    }
}
