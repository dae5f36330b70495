//! Portfolio records

use serde::{Deserialize, Serialize};

/// Portfolio owner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub experience_years: u32,
    pub location: String,
    pub passion: String,
    /// Free-form biography paragraphs
    pub summary: Vec<String>,
}

/// A skill and its proficiency (0-100)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}

/// A portfolio project
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

impl Project {
    /// Technologies joined for one-line display
    pub fn tech_line(&self) -> String {
        self.tech.join(", ")
    }
}

/// Contact details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
    pub availability: String,
}

/// External link targets
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub github_url: String,
    pub linkedin_url: String,
    pub resume_url: String,
    /// Landing page of the portfolio collection
    pub home_url: String,
}

/// Entry kind in the fake home directory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Directory,
    File,
}

/// Entry in the fake home directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
    pub size: u32,
}

impl FileEntry {
    /// Unix permission string for `ls -l` style listings
    pub fn mode(&self) -> &'static str {
        match self.kind {
            FileKind::Directory => "drwxr-xr-x",
            FileKind::File => "-rw-r--r--",
        }
    }

    /// Display name, with a trailing slash for directories
    pub fn display_name(&self) -> String {
        match self.kind {
            FileKind::Directory => format!("{}/", self.name),
            FileKind::File => self.name.clone(),
        }
    }
}

/// Label/value row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}
