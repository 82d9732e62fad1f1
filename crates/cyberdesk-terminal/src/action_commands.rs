//! Action commands: download, linkedin, github, website.
//!
//! These commands only describe the side effect; the host carries it out when
//! it receives [`CommandOutput::OpenLink`] or [`CommandOutput::Download`].

use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::error::Result;
use cyberdesk_types::profile::Profile;

use crate::commands::non_blank;
use crate::interpreter::{Category, Command, CommandOutput, CommandRegistry, Environment};

/// Register the download command and, when the profile has contact details,
/// the external link commands.
pub fn register_action_commands(reg: &mut CommandRegistry, profile: &Profile, config: &DeskConfig) {
    reg.register(Box::new(DownloadCmd {
        href: config.resume_pdf.clone(),
        file_name: config.resume_file_name.clone(),
    }));

    let Some(contact) = &profile.contact else {
        return;
    };
    reg.register(Box::new(OpenLinkCmd {
        name: "linkedin",
        description: "Open LinkedIn profile",
        target: "LinkedIn profile",
        missing: "LinkedIn profile",
        url: contact.linkedin.clone(),
    }));
    reg.register(Box::new(OpenLinkCmd {
        name: "github",
        description: "Open GitHub profile",
        target: "GitHub profile",
        missing: "GitHub profile",
        url: contact.github.clone(),
    }));
    reg.register(Box::new(OpenLinkCmd {
        name: "website",
        description: "Open personal website",
        target: "website",
        missing: "Website",
        url: contact.website.clone(),
    }));
}

// ---------------------------------------------------------------------------
// download
// ---------------------------------------------------------------------------

struct DownloadCmd {
    href: String,
    file_name: String,
}

impl Command for DownloadCmd {
    fn name(&self) -> &str {
        "download"
    }
    fn description(&self) -> &str {
        "Download resume PDF"
    }
    fn usage(&self) -> &str {
        "download"
    }
    fn category(&self) -> Category {
        Category::Action
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Download {
            href: self.href.clone(),
            file_name: self.file_name.clone(),
            notice: format!(
                "Initiating download...\n{} downloaded successfully!",
                self.file_name
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// linkedin / github / website
// ---------------------------------------------------------------------------

struct OpenLinkCmd {
    name: &'static str,
    description: &'static str,
    /// Used in "Opening <target> in new tab...".
    target: &'static str,
    /// Used in "<missing> URL not configured.".
    missing: &'static str,
    url: String,
}

impl Command for OpenLinkCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> Category {
        Category::Action
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        match non_blank(Some(self.url.as_str())) {
            Some(url) => Ok(CommandOutput::OpenLink {
                url: url.trim().to_string(),
                notice: format!("Opening {} in new tab...", self.target),
            }),
            None => Ok(CommandOutput::Text(format!(
                "{} URL not configured.",
                self.missing
            ))),
        }
    }
}
