//! Resume commands: intro, skills, experience, education, contact, projects,
//! certs.
//!
//! Each command keeps its own copy of the profile section it renders; the
//! registry is rebuilt whenever the profile changes.

use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::error::Result;
use cyberdesk_types::profile::{
    Certification, Contact, Education, Experience, Intro, OrderedMap, Profile, Project,
};

use crate::commands::{bullet, non_blank, section_heading};
use crate::interpreter::{Category, Command, CommandOutput, CommandRegistry, Environment};

/// Register a command for every resume section present in the profile.
pub fn register_resume_commands(reg: &mut CommandRegistry, profile: &Profile, config: &DeskConfig) {
    let rule = config.rule_width;
    if let Some(intro) = &profile.intro {
        reg.register(Box::new(IntroCmd {
            intro: intro.clone(),
        }));
    }
    if let Some(skills) = &profile.skills {
        reg.register(Box::new(SkillsCmd {
            skills: skills.clone(),
            rule,
        }));
    }
    if let Some(experience) = &profile.experience {
        reg.register(Box::new(ExperienceCmd {
            items: experience.clone(),
            rule,
        }));
    }
    if let Some(education) = &profile.education {
        reg.register(Box::new(EducationCmd {
            items: education.clone(),
            rule,
        }));
    }
    if let Some(contact) = &profile.contact {
        reg.register(Box::new(ContactCmd {
            contact: contact.clone(),
            rule,
        }));
    }
    if let Some(projects) = profile.projects.as_ref().filter(|p| !p.is_empty()) {
        reg.register(Box::new(ProjectsCmd {
            items: projects.clone(),
            rule,
        }));
    }
    if let Some(certs) = profile.certifications.as_ref().filter(|c| !c.is_empty()) {
        reg.register(Box::new(CertsCmd {
            items: certs.clone(),
            rule,
        }));
    }
}

/// Drop the trailing blank lines every section leaves behind.
fn finish(out: String) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(out.trim_end().to_string()))
}

// ---------------------------------------------------------------------------
// intro
// ---------------------------------------------------------------------------

struct IntroCmd {
    intro: Intro,
}

impl Command for IntroCmd {
    fn name(&self) -> &str {
        "intro"
    }
    fn description(&self) -> &str {
        "About me"
    }
    fn usage(&self) -> &str {
        "intro"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = String::new();
        let (lines, values) = match &self.intro {
            Intro::Lines(lines) => (lines.as_slice(), &[][..]),
            Intro::Block(block) => (block.lines.as_slice(), block.values.as_slice()),
        };
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        if !values.is_empty() {
            out.push_str("\nCore values:\n");
            for value in values {
                out.push_str(&bullet(value));
            }
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd {
    skills: OrderedMap<Vec<String>>,
    rule: usize,
}

impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = section_heading("TECHNICAL SKILLS", self.rule);
        for (category, skills) in self.skills.iter() {
            out.push_str(&format!("{category}:\n"));
            for skill in skills {
                out.push_str(&bullet(skill));
            }
            out.push('\n');
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

struct ExperienceCmd {
    items: Vec<Experience>,
    rule: usize,
}

impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work experience"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = section_heading("WORK EXPERIENCE", self.rule);
        for exp in &self.items {
            match non_blank(exp.title()) {
                Some(title) => out.push_str(&format!("{} - {title}\n", exp.company)),
                None => out.push_str(&format!("{}\n", exp.company)),
            }

            let when = match &exp.dates {
                Some(dates) => {
                    let start = dates.start.as_ref().map(ToString::to_string);
                    let end = dates
                        .end
                        .as_ref()
                        .map(ToString::to_string)
                        .filter(|end| !end.trim().is_empty());
                    Some(format!(
                        "{} - {}",
                        start.unwrap_or_default(),
                        end.as_deref().unwrap_or("Present")
                    ))
                },
                None => exp.period.clone(),
            };
            if let Some(when) = when {
                out.push_str(&when);
                if let Some(location) = non_blank(exp.location.as_deref()) {
                    out.push_str(&format!(" | {location}"));
                }
                out.push('\n');
            }

            if let Some(kind) = non_blank(exp.employment_type.as_deref()) {
                out.push_str(&format!("({})\n", kind.trim()));
            }
            out.push('\n');

            for item in exp.highlights() {
                out.push_str(&bullet(item));
            }
            out.push('\n');
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

struct EducationCmd {
    items: Vec<Education>,
    rule: usize,
}

impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "Education background"
    }
    fn usage(&self) -> &str {
        "education"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = section_heading("EDUCATION", self.rule);
        for edu in &self.items {
            out.push_str(&format!("{}\n{}\n", edu.school(), edu.degree));

            let mut when = match (&edu.graduation_year, &edu.period) {
                (Some(year), _) => format!("Graduated: {year}"),
                (None, Some(period)) => period.clone(),
                (None, None) => String::new(),
            };
            if let Some(location) = non_blank(edu.location.as_deref()) {
                when.push_str(&format!(" | {location}"));
            }
            out.push_str(&when);
            out.push_str("\n\n");

            if !edu.highlights.is_empty() {
                for item in &edu.highlights {
                    out.push_str(&bullet(item));
                }
                out.push('\n');
            }
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd {
    contact: Contact,
    rule: usize,
}

impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Contact information"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let c = &self.contact;
        let mut out = section_heading("CONTACT INFORMATION", self.rule);
        for (label, value) in [
            ("Email:", &c.email),
            ("Phone:", &c.phone),
            ("Location:", &c.location),
            ("Website:", &c.website),
            ("LinkedIn:", &c.linkedin),
            ("GitHub:", &c.github),
        ] {
            out.push_str(&format!("{label:<9} {value}\n"));
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd {
    items: Vec<Project>,
    rule: usize,
}

impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "View personal projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = section_heading("PROJECTS", self.rule);
        for project in &self.items {
            out.push_str(&format!(
                "{}\n{}\n\n",
                project.name,
                project.summary().unwrap_or("")
            ));
            if !project.stack().is_empty() {
                out.push_str(&format!("Tech: {}\n", project.stack().join(", ")));
            }
            if !project.links.is_empty() {
                for link in &project.links {
                    if let Some(url) = non_blank(link.url.as_deref()) {
                        out.push_str(&format!("{}: {url}\n", link.label));
                    }
                }
            } else if let Some(url) = non_blank(project.link.as_deref()) {
                out.push_str(&format!("Link: {url}\n"));
            }
            out.push('\n');
        }
        finish(out)
    }
}

// ---------------------------------------------------------------------------
// certs
// ---------------------------------------------------------------------------

struct CertsCmd {
    items: Vec<Certification>,
    rule: usize,
}

impl Command for CertsCmd {
    fn name(&self) -> &str {
        "certs"
    }
    fn description(&self) -> &str {
        "View certifications"
    }
    fn usage(&self) -> &str {
        "certs"
    }
    fn category(&self) -> Category {
        Category::Resume
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = section_heading("CERTIFICATIONS", self.rule);
        for cert in &self.items {
            out.push_str(&format!("• {}", cert.name));
            if let Some(issuer) = non_blank(cert.issuer.as_deref()) {
                out.push_str(&format!(" ({issuer})"));
            }
            if let Some(year) = &cert.year {
                out.push_str(&format!(" - {year}"));
            }
            out.push('\n');
        }
        finish(out)
    }
}
