//! Built-in portfolio data

use serde::{Deserialize, Serialize};
use crate::document::{Block, Document};
use crate::types::{ContactInfo, FileEntry, FileKind, InfoRow, Links, Profile, Project, Skill};
use crate::{ContentError, ContentProvider};

/// Content provider backed by in-memory records
///
/// `Default` holds the data shipped with the portfolio pages; a page can
/// swap it for its own through [`PortfolioContent::from_json`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub links: Links,
    pub files: Vec<FileEntry>,
    pub system_info: Vec<InfoRow>,
}

impl PortfolioContent {
    /// Parse and validate content from JSON
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check value ranges serde cannot express
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }
}

fn project(title: &str, description: &str, tech: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
    }
}

fn entry(name: &str, kind: FileKind, size: u32) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        kind,
        size,
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "MrFawsDK".to_string(),
                role: "Full-Stack Web Developer & Designer".to_string(),
                experience_years: 5,
                location: "Denmark".to_string(),
                passion: "Creating modern, interactive web solutions".to_string(),
                summary: vec![
                    "I am a dedicated web developer with expertise in both frontend and backend development.".to_string(),
                    "My passion lies in transforming creative ideas into functional, user-friendly websites and applications.".to_string(),
                    "I specialize in modern web technologies and love exploring new tools and frameworks.".to_string(),
                ],
            },
            skills: vec![
                Skill::new("HTML5", 95),
                Skill::new("CSS3", 90),
                Skill::new("JavaScript", 88),
                Skill::new("React", 85),
                Skill::new("Node.js", 80),
                Skill::new("PHP", 82),
                Skill::new("MySQL", 78),
                Skill::new("Git", 85),
                Skill::new("WordPress", 90),
                Skill::new("Figma", 75),
            ],
            projects: vec![
                project(
                    "Portfolio Universe",
                    "A collection of different portfolio styles, from terminal interface to modern timeline design.",
                    &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
                ),
                project(
                    "E-Commerce Platform",
                    "Full-stack e-commerce solution with payment integration, inventory management, and admin dashboard.",
                    &["React", "Node.js", "MongoDB", "Stripe API"],
                ),
                project(
                    "Blog Platform",
                    "Modern blog platform with dynamic content, comment system, and responsive design.",
                    &["React", "Node.js", "MongoDB", "Express"],
                ),
                project(
                    "Task Management App",
                    "Collaborative task management application with real-time updates and team features.",
                    &["Vue.js", "Firebase", "Vuex", "PWA"],
                ),
                project(
                    "Weather Dashboard",
                    "Interactive weather dashboard with forecasts, maps, and location-based services.",
                    &["JavaScript", "OpenWeather API", "Chart.js"],
                ),
            ],
            contact: ContactInfo {
                email: "contact@mrfawsdk.com".to_string(),
                github: "github.com/mrfawsdk".to_string(),
                linkedin: "linkedin.com/in/mrfawsdk".to_string(),
                location: "Denmark, Europe".to_string(),
                availability: "Available for freelance projects and collaborations".to_string(),
            },
            links: Links {
                github_url: "https://github.com/mrfawsdk".to_string(),
                linkedin_url: "#".to_string(),
                resume_url: "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf".to_string(),
                home_url: "../index.html".to_string(),
            },
            files: vec![
                entry("projects", FileKind::Directory, 4096),
                entry("skills", FileKind::Directory, 4096),
                entry("resume.pdf", FileKind::File, 1024),
                entry("contact.txt", FileKind::File, 512),
                entry("about.md", FileKind::File, 256),
            ],
            system_info: vec![
                InfoRow::new("OS", "Portfolio Linux x86_64"),
                InfoRow::new("Host", "Web Developer Workstation"),
                InfoRow::new("Kernel", "WebDev 5.15.0-portfolio"),
                InfoRow::new("Packages", "HTML, CSS, JS, React"),
                InfoRow::new("Shell", "/bin/portfolio"),
                InfoRow::new("Terminal", "WebTerminal"),
                InfoRow::new("CPU", "Brain (2 cores) @ 3.4GHz"),
                InfoRow::new("Memory", "Ideas (∞GB)"),
                InfoRow::new("Theme", "Terminal Green"),
            ],
        }
    }
}

impl ContentProvider for PortfolioContent {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn files(&self) -> &[FileEntry] {
        &self.files
    }

    fn system_info(&self) -> &[InfoRow] {
        &self.system_info
    }

    fn app_document(&self, key: &str) -> Option<Document> {
        let doc = match key {
            "about" => Document::new(&self.profile.name)
                .section(Some(&self.profile.role), Block::Paragraphs(self.profile.summary.clone()))
                .section(
                    Some("Location"),
                    Block::Paragraphs(vec![self.contact.location.clone()]),
                ),
            "projects" => Document::new("My Projects")
                .section(None, Block::Projects(self.projects.clone())),
            "skills" => Document::new("Technical Skills")
                .section(None, Block::Skills(self.skills.clone())),
            "contact" => Document::new("Contact Information")
                .section(None, Block::Contact(self.contact.clone())),
            "resume" => Document::new("Resume").section(
                None,
                Block::Link {
                    label: "Download Resume".to_string(),
                    url: self.links.resume_url.clone(),
                },
            ),
            "browser" => Document::new("Web Browser").section(
                None,
                Block::Link {
                    label: "Visit Portfolio".to_string(),
                    url: self.links.home_url.clone(),
                },
            ),
            "calculator" => Document::new("Calculator").section(None, Block::Widget("calculator".to_string())),
            "notepad" => Document::new("Notepad").section(Some("File: Untitled.txt"), Block::Widget("notepad".to_string())),
            "settings" => Document::new("Settings")
                .section(Some("Personalization"), Block::Widget("personalization".to_string()))
                .section(Some("Display"), Block::Widget("display".to_string()))
                .section(Some("Sound"), Block::Widget("sound".to_string()))
                .section(
                    Some("About"),
                    Block::Rows(vec![
                        InfoRow::new("OS", "MrFawsDK OS v2.0.1"),
                        InfoRow::new("Browser", "Portfolio Desktop Environment"),
                        InfoRow::new("Developer", &self.profile.name),
                    ]),
                ),
            "file-manager" => Document::new("File Manager")
                .section(None, Block::Files(self.files.clone())),
            _ => return None,
        };
        Some(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = PortfolioContent::default();
        assert_eq!(content.profile().name, "MrFawsDK");
        assert_eq!(content.skills().len(), 10);
        assert_eq!(content.projects().len(), 5);
        assert_eq!(content.files().len(), 5);
    }

    #[test]
    fn test_app_documents_for_known_apps() {
        let content = PortfolioContent::default();
        let keys = [
            "about", "projects", "skills", "contact", "resume",
            "browser", "calculator", "notepad", "settings", "file-manager",
        ];
        for key in keys {
            let doc = content.app_document(key);
            assert!(doc.is_some(), "missing document for {}", key);
            assert!(!doc.unwrap().sections.is_empty());
        }
    }

    #[test]
    fn test_app_document_unknown_key() {
        let content = PortfolioContent::default();
        assert!(content.app_document("minesweeper").is_none());
    }

    #[test]
    fn test_from_json_overrides_default() {
        let mut custom = PortfolioContent::default();
        custom.profile.name = "Someone Else".to_string();
        custom.skills.truncate(2);

        let json = serde_json::to_string(&custom).unwrap();
        let loaded = PortfolioContent::from_json(&json).unwrap();

        assert_eq!(loaded.profile().name, "Someone Else");
        assert_eq!(loaded.skills().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_skill_over_hundred() {
        let mut custom = PortfolioContent::default();
        custom.skills[0].level = 150;
        let json = serde_json::to_string(&custom).unwrap();

        match PortfolioContent::from_json(&json) {
            Err(ContentError::SkillLevelOutOfRange { level, .. }) => assert_eq!(level, 150),
            other => panic!("expected out of range error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = PortfolioContent::from_json("{ not json");
        assert!(matches!(result, Err(ContentError::InvalidJson(_))));
    }

    #[test]
    fn test_document_serializes_tagged_blocks() {
        let content = PortfolioContent::default();
        let doc = content.app_document("resume").unwrap();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["title"], "Resume");
        assert_eq!(json["sections"][0]["body"]["type"], "link");
        assert_eq!(json["sections"][0]["body"]["data"]["label"], "Download Resume");
    }
}
