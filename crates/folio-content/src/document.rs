//! Structured window content

use serde::Serialize;
use crate::types::{ContactInfo, FileEntry, InfoRow, Project, Skill};

/// Content of one app window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    /// Append a section (builder style)
    pub fn section(mut self, heading: Option<&str>, body: Block) -> Self {
        self.sections.push(Section {
            heading: heading.map(str::to_string),
            body,
        });
        self
    }
}

/// A headed block inside a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<String>,
    pub body: Block,
}

/// Body of a section
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Block {
    Paragraphs(Vec<String>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Contact(ContactInfo),
    Rows(Vec<InfoRow>),
    Files(Vec<FileEntry>),
    /// Button that asks the host page to open a link
    Link { label: String, url: String },
    /// Placeholder for an interactive widget rendered by the page (calculator, notepad)
    Widget(String),
}
