//! Terminal output lines

use serde::Serialize;

/// Colour class of an output line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Plain,
    /// Echo of a submitted line behind the prompt
    Prompt,
    Error,
    Warning,
    Info,
    Success,
}

/// One line of terminal output
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    /// Empty spacer line
    pub fn blank() -> Self {
        Self::plain("")
    }

    /// Prompt followed by the submitted text
    pub fn echo(prompt: &str, input: &str) -> Self {
        Self::new(format!("{}{}", prompt, input), LineStyle::Prompt)
    }
}
