//! Command interpreter for the Folio OS terminal page
//!
//! A typed line is matched against a fixed command table; handlers print
//! portfolio content as styled output lines and may ask the page to perform
//! a side effect (open a link, start a download, leave the page).
//!
//! - [`command`]: the command table and parser
//! - [`history`]: Up/Down recall
//! - [`completion`]: Tab completion
//! - [`clock`]: injectable time source for `date` and `uptime`
//! - [`konami`]: the Konami code easter egg
//!
//! ## Example
//!
//! ```rust
//! use folio_terminal::{Interpreter, Recall, TerminalConfig};
//!
//! let mut term = Interpreter::new(TerminalConfig::default());
//!
//! let out = term.submit("frobnicate");
//! assert_eq!(out.lines[1].text, "bash: frobnicate: command not found");
//!
//! term.submit("whoami");
//! assert_eq!(term.recall(Recall::Up), Some("whoami"));
//! ```

pub mod command;
pub mod history;
pub mod completion;
pub mod clock;
pub mod konami;
pub mod output;
pub mod effect;

mod config;
mod error;
mod handlers;
mod interpreter;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use command::{Command, Invocation, COMMANDS};
pub use history::{CommandHistory, Recall};
pub use completion::{complete, Completion};
pub use clock::{format_date, format_uptime, Clock, ManualClock, SystemClock};
pub use konami::{KonamiDetector, KONAMI_SEQUENCE};
pub use output::{LineStyle, OutputLine};
pub use effect::Effect;

pub use config::TerminalConfig;
pub use error::{ParseError, TerminalError};
pub use interpreter::{Interpreter, Submission};
