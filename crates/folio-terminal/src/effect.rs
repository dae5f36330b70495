//! Side effects requested by commands

use serde::Serialize;

/// External action for the host page; returned to the caller, never awaited
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Open a URL in a new tab
    OpenUrl { url: String },
    /// Open a file for download
    Download { url: String },
    /// Leave the terminal for another page
    Navigate { url: String },
    /// Hand an address to the mail client
    Mailto { address: String },
    /// Start the falling-characters overlay
    Matrix,
}

impl Effect {
    /// URL the page should visit for this effect, if any
    pub fn href(&self) -> Option<String> {
        match self {
            Effect::OpenUrl { url } | Effect::Download { url } | Effect::Navigate { url } => Some(url.clone()),
            Effect::Mailto { address } => Some(format!("mailto:{}", address)),
            Effect::Matrix => None,
        }
    }
}
