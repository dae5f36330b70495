//! Terminal Command Parsing
//!
//! Type-safe command representation for terminal input.

use crate::error::ParseError;

/// Command from the fixed command table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Resume,
    Clear,
    Matrix,
    Exit,
    Ls,
    Whoami,
    Pwd,
    Date,
    Uptime,
    Neofetch,
    Github,
    Linkedin,
    Email,
}

/// All commands in table order; `help` and autocomplete list them this way
pub const COMMANDS: &[Command] = &[
    Command::Help,
    Command::About,
    Command::Skills,
    Command::Projects,
    Command::Contact,
    Command::Resume,
    Command::Clear,
    Command::Matrix,
    Command::Exit,
    Command::Ls,
    Command::Whoami,
    Command::Pwd,
    Command::Date,
    Command::Uptime,
    Command::Neofetch,
    Command::Github,
    Command::Linkedin,
    Command::Email,
];

/// A parsed command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub args: Vec<String>,
}

impl Command {
    /// Name typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::Resume => "resume",
            Command::Clear => "clear",
            Command::Matrix => "matrix",
            Command::Exit => "exit",
            Command::Ls => "ls",
            Command::Whoami => "whoami",
            Command::Pwd => "pwd",
            Command::Date => "date",
            Command::Uptime => "uptime",
            Command::Neofetch => "neofetch",
            Command::Github => "github",
            Command::Linkedin => "linkedin",
            Command::Email => "email",
        }
    }

    /// One-line description shown by `help`
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this help menu",
            Command::About => "Display information about MrFawsDK",
            Command::Skills => "List technical skills and proficiency levels",
            Command::Projects => "Show portfolio projects",
            Command::Contact => "Get contact information",
            Command::Resume => "Download CV/Resume",
            Command::Clear => "Clear the terminal screen",
            Command::Matrix => "Enter the Matrix (Easter egg)",
            Command::Exit => "Return to main portfolio",
            Command::Ls => "List directory contents",
            Command::Whoami => "Display current user",
            Command::Pwd => "Show current directory path",
            Command::Date => "Display current date and time",
            Command::Uptime => "Show system uptime",
            Command::Neofetch => "Display system information",
            Command::Github => "Open GitHub profile",
            Command::Linkedin => "Open LinkedIn profile",
            Command::Email => "Open email client",
        }
    }

    /// Help row, name padded to a fixed column
    pub fn usage(&self) -> String {
        format!("  {:<12} - {}", self.name(), self.description())
    }

    /// Find a command by exact (lowercase) name
    pub fn lookup(name: &str) -> Option<Command> {
        COMMANDS.iter().copied().find(|c| c.name() == name)
    }

    /// Parse a command line into an Invocation.
    ///
    /// The line is lowercased before splitting, so `HELP` and `help` are the
    /// same command.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_terminal::{Command, ParseError};
    ///
    /// let inv = Command::parse("Skills").unwrap();
    /// assert_eq!(inv.command, Command::Skills);
    ///
    /// assert_eq!(
    ///     Command::parse("frobnicate"),
    ///     Err(ParseError::UnknownCommand("frobnicate".to_string()))
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Invocation, ParseError> {
        let lowered = line.to_lowercase();
        let mut words = lowered.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let command = Command::lookup(name).ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;
        Ok(Invocation {
            command,
            args: words.map(str::to_string).collect(),
        })
    }
}
