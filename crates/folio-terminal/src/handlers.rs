//! Command handlers
//!
//! Each handler appends lines to the submission and, for commands that
//! leave the terminal, requests an [`Effect`].

use folio_content::FileKind;

use crate::clock::{format_date, format_uptime};
use crate::command::{Command, COMMANDS};
use crate::effect::Effect;
use crate::interpreter::{Interpreter, Submission};
use crate::output::LineStyle;

/// Inner width of the `about` box
const BOX_WIDTH: usize = 58;

/// Cells in a skill bar
const BAR_CELLS: usize = 20;

const NEOFETCH_LOGO: &[&str] = &[
    "                   -`",
    "                  .o+`",
    "                 `ooo/",
    "                `+oooo:",
    "               `+oooooo:",
    "               -+oooooo+:",
    "             `/:-:++oooo+:",
    "            `/++++/+++++++:",
    "           `/++++++++++++++:",
    "          `/+++ooooooooo+++/",
    "         ./ooosssso++osssssso+`",
    "        .oossssso-````/ossssss+`",
    "       -osssssso.      :ssssssso.",
    "      :osssssss/        osssso+++.",
];

/// Levels above 100 draw a full bar
fn skill_bar(level: u8) -> String {
    let filled = (usize::from(level.min(100)) * BAR_CELLS + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

impl Interpreter {
    pub(crate) fn run(&mut self, command: Command, _args: &[String], out: &mut Submission) {
        match command {
            Command::Help => self.cmd_help(out),
            Command::About => self.cmd_about(out),
            Command::Skills => self.cmd_skills(out),
            Command::Projects => self.cmd_projects(out),
            Command::Contact => self.cmd_contact(out),
            Command::Resume => self.cmd_resume(out),
            Command::Clear => out.clear(),
            Command::Matrix => {
                self.start_matrix();
                out.effect(Effect::Matrix);
            }
            Command::Exit => self.cmd_exit(out),
            Command::Ls => self.cmd_ls(out),
            Command::Whoami => out.plain(self.config.user.clone()),
            Command::Pwd => out.plain(self.config.working_dir()),
            Command::Date => out.plain(format_date(&self.clock.now())),
            Command::Uptime => out.plain(format_uptime(self.uptime_secs())),
            Command::Neofetch => self.cmd_neofetch(out),
            Command::Github => {
                out.blank();
                out.push("Opening GitHub profile...", LineStyle::Success);
                out.effect(Effect::OpenUrl { url: self.content.links().github_url.clone() });
            }
            Command::Linkedin => {
                out.blank();
                out.push("Opening LinkedIn profile...", LineStyle::Success);
                out.effect(Effect::OpenUrl { url: self.content.links().linkedin_url.clone() });
            }
            Command::Email => {
                out.blank();
                out.push("Opening email client...", LineStyle::Success);
                out.effect(Effect::Mailto { address: self.content.contact().email.clone() });
            }
        }
    }

    fn cmd_help(&self, out: &mut Submission) {
        out.blank();
        out.push("Available Commands:", LineStyle::Warning);
        out.blank();
        for command in COMMANDS {
            out.plain(command.usage());
        }
        out.blank();
        out.plain("Tip: Use TAB for auto-completion, UP/DOWN arrows for command history");
    }

    fn cmd_about(&self, out: &mut Submission) {
        let profile = self.content.profile();
        let rows = [
            format!("Name: {}", profile.name),
            format!("Role: {}", profile.role),
            format!("Experience: {}+ years", profile.experience_years),
            format!("Location: {}", profile.location),
            format!("Passion: {}", profile.passion),
        ];

        out.blank();
        out.push(format!("About {}:", profile.name), LineStyle::Info);
        out.blank();
        out.plain(format!("╔{}╗", "═".repeat(BOX_WIDTH)));
        for row in &rows {
            out.plain(format!("║  {:<width$}║", row, width = BOX_WIDTH - 2));
        }
        out.plain(format!("╚{}╝", "═".repeat(BOX_WIDTH)));
        out.blank();
        for paragraph in &profile.summary {
            out.plain(paragraph.clone());
        }
    }

    fn cmd_skills(&self, out: &mut Submission) {
        out.blank();
        out.push("Technical Skills:", LineStyle::Success);
        out.blank();
        for skill in self.content.skills() {
            out.plain(format!("{:<12} {} {:>3}%", skill.name, skill_bar(skill.level), skill.level));
        }
    }

    fn cmd_projects(&self, out: &mut Submission) {
        out.blank();
        out.push("Portfolio Projects:", LineStyle::Warning);
        out.blank();
        for (index, project) in self.content.projects().iter().enumerate() {
            out.push(format!("{}. {}", index + 1, project.title), LineStyle::Info);
            out.plain(project.description.clone());
            out.plain(format!("Technologies: {}", project.tech_line()));
            out.blank();
        }
    }

    fn cmd_contact(&self, out: &mut Submission) {
        let contact = self.content.contact();
        out.blank();
        out.push("Contact Information:", LineStyle::Info);
        out.blank();
        for (label, value) in [
            ("Email:", &contact.email),
            ("GitHub:", &contact.github),
            ("LinkedIn:", &contact.linkedin),
            ("Location:", &contact.location),
            ("Status:", &contact.availability),
        ] {
            out.plain(format!("{:<10} {}", label, value));
        }
        out.blank();
        out.plain("Feel free to reach out for collaborations or project inquiries!");
    }

    fn cmd_resume(&self, out: &mut Submission) {
        out.blank();
        out.push("Initiating CV download...", LineStyle::Success);
        out.plain("Please wait while we prepare your download...");
        out.push("✓ Download started!", LineStyle::Success);
        out.effect(Effect::Download { url: self.content.links().resume_url.clone() });
    }

    fn cmd_exit(&self, out: &mut Submission) {
        out.blank();
        out.push("Exiting terminal...", LineStyle::Warning);
        out.plain("Goodbye! Thanks for visiting my portfolio.");
        out.effect(Effect::Navigate { url: self.content.links().home_url.clone() });
    }

    fn cmd_ls(&self, out: &mut Submission) {
        let files = self.content.files();
        // 1K blocks, rounded up per entry
        let blocks: u32 = files.iter().map(|f| f.size.div_ceil(1024)).sum();
        let login = &self.config.login;

        out.blank();
        out.plain(format!("total {}", blocks));
        for file in files {
            let (links, style) = match file.kind {
                FileKind::Directory => (2, LineStyle::Info),
                FileKind::File => (1, LineStyle::Plain),
            };
            out.push(
                format!(
                    "{}  {} {} {} {:>4} Jan  1 12:00 {}",
                    file.mode(),
                    links,
                    login,
                    login,
                    file.size,
                    file.display_name()
                ),
                style,
            );
        }
    }

    fn cmd_neofetch(&self, out: &mut Submission) {
        let header = format!("{}@{}", self.config.login, self.config.host);
        let mut info = vec![header.clone(), "-".repeat(header.chars().count())];

        let rows = self.content.system_info();
        let split = rows.len().min(3);
        info.extend(rows[..split].iter().map(|r| format!("{}: {}", r.label, r.value)));
        info.push(format!("Uptime: {} seconds", self.uptime_secs()));
        info.extend(rows[split..].iter().map(|r| format!("{}: {}", r.label, r.value)));

        out.blank();
        out.push("System Information:", LineStyle::Info);
        out.blank();
        let height = NEOFETCH_LOGO.len().max(info.len());
        for i in 0..height {
            let logo = NEOFETCH_LOGO.get(i).copied().unwrap_or("");
            let text = info.get(i).map(String::as_str).unwrap_or("");
            out.plain(format!("{:<38}{}", logo, text).trim_end().to_string());
        }
    }
}
