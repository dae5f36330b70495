//! Portfolio content for Folio OS
//!
//! The desktop windows and the terminal commands both present the same
//! biographical data. This crate owns that data as plain structs and exposes
//! it through the [`ContentProvider`] capability, so neither state machine
//! embeds markup. Templating is left to the page.
//!
//! - [`types`]: profile, skills, projects, contact and file listing records
//! - [`document`]: the `{ title, sections }` shape handed to window content
//! - [`portfolio`]: the built-in [`PortfolioContent`] provider

pub mod types;
pub mod document;
mod portfolio;

pub use document::{Block, Document, Section};
pub use portfolio::PortfolioContent;
pub use types::{ContactInfo, FileEntry, FileKind, InfoRow, Links, Profile, Project, Skill};

/// Errors raised while loading content
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content JSON could not be parsed
    #[error("invalid content JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A skill level outside 0-100
    #[error("skill {name:?} has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

/// Source of portfolio data keyed by app or command name
pub trait ContentProvider {
    /// Owner profile
    fn profile(&self) -> &Profile;

    /// Skills with proficiency percentages
    fn skills(&self) -> &[Skill];

    /// Portfolio projects
    fn projects(&self) -> &[Project];

    /// Contact details
    fn contact(&self) -> &ContactInfo;

    /// External links (profiles, CV, home page)
    fn links(&self) -> &Links;

    /// Fake home directory listing
    fn files(&self) -> &[FileEntry];

    /// Rows shown by the system information screens
    fn system_info(&self) -> &[InfoRow];

    /// Structured document for a desktop app window
    fn app_document(&self, key: &str) -> Option<Document>;
}
