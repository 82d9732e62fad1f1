//! Profile record: the data source behind the resume terminal.
//!
//! The record is loaded from JSON. Every section is optional, and a few
//! records carry both the current field names and the older ones
//! (`position` for `title`, `institution` for `school`, and so on). Both are
//! kept; accessors prefer the current name. Explicit `null`s read as empty.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::{DeskError, Result};

/// The complete profile record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub identity: Option<Identity>,
    /// Older top-level display name.
    pub name: Option<String>,
    /// Older top-level headline.
    pub title: Option<String>,
    pub contact: Option<Contact>,
    pub terminal: Option<TerminalSection>,
    pub intro: Option<Intro>,
    pub skills: Option<OrderedMap<Vec<String>>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
}

/// The `terminal` block: prompt override, suggestions, aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalSection {
    pub prompt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_commands: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub aliases: OrderedMap<String>,
}

/// Intro text: either the structured block or a bare list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Intro {
    Lines(Vec<String>),
    Block(IntroBlock),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroBlock {
    pub short: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub lines: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// One job. `position` and `description` are the older spellings of
/// `title` and `highlights`; use the accessors to read either.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub title: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub dates: Option<DateRange>,
    pub period: Option<String>,
    pub employment_type: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub description: Option<Vec<String>>,
}

impl Experience {
    /// `title`, else `position`. Blank values count as missing.
    pub fn title(&self) -> Option<&str> {
        first_non_empty(&self.title, &self.position)
    }

    /// `highlights`, else `description`.
    pub fn highlights(&self) -> &[String] {
        self.highlights
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<TextOrNumber>,
    pub end: Option<TextOrNumber>,
}

/// One school. `institution` is the older spelling of `school`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: Option<String>,
    pub institution: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    pub location: Option<String>,
    pub graduation_year: Option<TextOrNumber>,
    pub period: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

impl Education {
    /// `school`, else `institution`, else empty.
    pub fn school(&self) -> &str {
        first_non_empty(&self.school, &self.institution).unwrap_or_default()
    }
}

/// One project. `description` and `tech` are the older spellings of
/// `summary` and `stack`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub stack: Option<Vec<String>>,
    pub tech: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<ProjectLink>,
    pub link: Option<String>,
}

impl Project {
    /// `summary`, else `description`.
    pub fn summary(&self) -> Option<&str> {
        first_non_empty(&self.summary, &self.description)
    }

    /// `stack`, else `tech`.
    pub fn stack(&self) -> &[String] {
        self.stack
            .as_deref()
            .or(self.tech.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectLink {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub issuer: Option<String>,
    pub year: Option<TextOrNumber>,
}

/// Accept an explicit `null` wherever a field has a default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_non_empty<'a>(current: &'a Option<String>, legacy: &'a Option<String>) -> Option<&'a str> {
    [current, legacy]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .find(|v| !v.is_empty())
}

/// A scalar that profiles write either as a string or as a number (years).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl Profile {
    /// Parse a profile from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            DeskError::Profile(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// The record used when no profile could be loaded.
    pub fn fallback() -> Self {
        Self {
            identity: Some(Identity {
                name: Some("User".to_string()),
                handle: Some("user".to_string()),
                headline: Some("Developer".to_string()),
                location: Some("Earth".to_string()),
            }),
            contact: Some(Contact {
                email: "contact@example.com".to_string(),
                phone: "N/A".to_string(),
                location: "Earth".to_string(),
                ..Contact::default()
            }),
            terminal: Some(TerminalSection {
                prompt: Some("user@portfolio $".to_string()),
                suggested_commands: vec!["help".to_string()],
                aliases: OrderedMap::new(),
            }),
            intro: Some(Intro::Block(IntroBlock {
                short: Some("Resume data not found.".to_string()),
                lines: vec!["Resume data not found.".to_string()],
                values: Vec::new(),
            })),
            skills: Some(OrderedMap::new()),
            experience: Some(Vec::new()),
            education: Some(Vec::new()),
            projects: Some(Vec::new()),
            certifications: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Alias table from the terminal block (empty if absent).
    pub fn aliases(&self) -> &[(String, String)] {
        self.terminal
            .as_ref()
            .map(|t| t.aliases.as_slice())
            .unwrap_or(&[])
    }

    /// Suggested commands from the terminal block (empty if absent).
    pub fn suggested_commands(&self) -> &[String] {
        self.terminal
            .as_ref()
            .map(|t| t.suggested_commands.as_slice())
            .unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Ordered map: JSON object that keeps its source key order.
// ---------------------------------------------------------------------------

/// A string-keyed map that preserves the order keys appear in the source.
///
/// A repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace a value, keeping the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn as_slice(&self) -> &[(String, V)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = OrderedMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "identity": { "name": "Ada Lovelace", "handle": "ada", "headline": "Analyst" },
        "contact": { "email": "ada@example.com", "github": "https://github.com/ada" },
        "terminal": {
            "prompt": "ada@engine $",
            "suggestedCommands": ["help", "skills"],
            "aliases": { "sk": "skills", "exp": "experience", "gh": "github" }
        },
        "intro": { "lines": ["Hello."], "values": ["Rigor"] },
        "skills": { "Languages": ["Go", "Rust"], "Tools": ["git"], "Cloud": ["aws"] },
        "experience": [
            { "company": "Engines Ltd", "position": "Programmer", "period": "1842",
              "description": ["Wrote note G"] }
        ],
        "education": [ { "institution": "Home", "degree": "Mathematics", "graduationYear": 1835 } ],
        "projects": [ { "name": "Note G", "description": "Bernoulli numbers", "tech": ["cards"] } ],
        "certifications": [ { "name": "FRS", "year": "1840" } ],
        "unknownSection": true
    }"#;

    #[test]
    fn parses_full_profile() {
        let p = Profile::from_json_str(SAMPLE).unwrap();
        let id = p.identity.as_ref().unwrap();
        assert_eq!(id.handle.as_deref(), Some("ada"));
        assert_eq!(p.contact.as_ref().unwrap().linkedin, "");
        assert_eq!(p.suggested_commands(), ["help", "skills"]);
    }

    #[test]
    fn older_field_names_are_accepted() {
        let p = Profile::from_json_str(SAMPLE).unwrap();
        let exp = &p.experience.as_ref().unwrap()[0];
        assert_eq!(exp.title(), Some("Programmer"));
        assert_eq!(exp.highlights(), ["Wrote note G"]);
        let edu = &p.education.as_ref().unwrap()[0];
        assert_eq!(edu.school(), "Home");
        assert_eq!(edu.graduation_year, Some(TextOrNumber::Integer(1835)));
        let proj = &p.projects.as_ref().unwrap()[0];
        assert_eq!(proj.summary(), Some("Bernoulli numbers"));
        assert_eq!(proj.stack(), ["cards"]);
    }

    #[test]
    fn current_and_older_names_together_prefer_current() {
        let p = Profile::from_json_str(
            r#"{
                "experience": [ { "company": "A", "title": "T", "position": "P",
                                  "highlights": ["h"], "description": ["d"] } ],
                "education": [ { "school": "S", "institution": "I" } ],
                "projects": [ { "name": "X", "summary": "s", "description": "d",
                                "stack": ["rust"], "tech": ["go"] } ]
            }"#,
        )
        .unwrap();
        let exp = &p.experience.as_ref().unwrap()[0];
        assert_eq!(exp.title(), Some("T"));
        assert_eq!(exp.highlights(), ["h"]);
        assert_eq!(p.education.as_ref().unwrap()[0].school(), "S");
        let proj = &p.projects.as_ref().unwrap()[0];
        assert_eq!(proj.summary(), Some("s"));
        assert_eq!(proj.stack(), ["rust"]);
    }

    #[test]
    fn empty_current_name_falls_back_to_older() {
        let p = Profile::from_json_str(
            r#"{ "experience": [ { "company": "A", "title": "", "position": "P" } ] }"#,
        )
        .unwrap();
        assert_eq!(p.experience.as_ref().unwrap()[0].title(), Some("P"));
    }

    #[test]
    fn date_range_accepts_numbers() {
        let p = Profile::from_json_str(
            r#"{ "experience": [ { "company": "A", "dates": { "start": 2020, "end": "2022" } } ] }"#,
        )
        .unwrap();
        let dates = p.experience.as_ref().unwrap()[0].dates.clone().unwrap();
        assert_eq!(dates.start, Some(TextOrNumber::Integer(2020)));
        assert_eq!(dates.end, Some(TextOrNumber::Text("2022".into())));
    }

    #[test]
    fn explicit_nulls_read_as_empty() {
        let p = Profile::from_json_str(
            r#"{
                "contact": { "email": null, "github": "gh" },
                "terminal": { "suggestedCommands": null, "aliases": null },
                "projects": [ { "name": "X", "links": null, "tech": null } ],
                "education": [ { "school": "S", "highlights": null } ]
            }"#,
        )
        .unwrap();
        assert_eq!(p.contact.as_ref().unwrap().email, "");
        assert!(p.suggested_commands().is_empty());
        assert!(p.aliases().is_empty());
        let proj = &p.projects.as_ref().unwrap()[0];
        assert!(proj.links.is_empty());
        assert!(proj.stack().is_empty());
        assert!(p.education.as_ref().unwrap()[0].highlights.is_empty());
    }

    #[test]
    fn skills_keep_source_order() {
        let p = Profile::from_json_str(SAMPLE).unwrap();
        let keys: Vec<&str> = p.skills.as_ref().unwrap().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Languages", "Tools", "Cloud"]);
    }

    #[test]
    fn aliases_keep_source_order() {
        let p = Profile::from_json_str(SAMPLE).unwrap();
        let names: Vec<&str> = p.aliases().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["sk", "exp", "gh"]);
    }

    #[test]
    fn intro_accepts_bare_lines() {
        let p = Profile::from_json_str(r#"{ "intro": ["one", "two"] }"#).unwrap();
        match p.intro {
            Some(Intro::Lines(lines)) => assert_eq!(lines, vec!["one", "two"]),
            other => panic!("expected bare lines, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_a_valid_profile() {
        let p = Profile::from_json_str("{}").unwrap();
        assert!(p.identity.is_none());
        assert!(p.skills.is_none());
        assert!(p.aliases().is_empty());
        assert!(p.suggested_commands().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Profile::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DeskError::Json(_)));
    }

    #[test]
    fn missing_file_is_a_profile_error() {
        let err = Profile::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DeskError::Profile(_)));
    }

    #[test]
    fn fallback_profile_shape() {
        let p = Profile::fallback();
        assert_eq!(
            p.terminal.as_ref().unwrap().prompt.as_deref(),
            Some("user@portfolio $")
        );
        assert_eq!(p.suggested_commands(), ["help"]);
        assert!(p.projects.as_ref().unwrap().is_empty());
    }

    #[test]
    fn text_or_number_display() {
        assert_eq!(TextOrNumber::Integer(2020).to_string(), "2020");
        assert_eq!(TextOrNumber::Text("2019".into()).to_string(), "2019");
    }

    #[test]
    fn ordered_map_repeated_key_keeps_first_slot() {
        let mut m = OrderedMap::new();
        m.insert("a", 1);
        m.insert("b", 2);
        m.insert("a", 3);
        assert_eq!(m.as_slice(), &[("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ordered_map_preserves_key_order(
                keys in proptest::collection::hash_set("[a-z]{1,8}", 0..12),
            ) {
                let keys: Vec<String> = keys.into_iter().collect();
                let body: Vec<String> = keys
                    .iter()
                    .enumerate()
                    .map(|(i, k)| format!("\"{k}\": {i}"))
                    .collect();
                let json = format!("{{{}}}", body.join(","));
                let map: OrderedMap<u32> = serde_json::from_str(&json).unwrap();
                let parsed: Vec<&str> = map.iter().map(|(k, _)| k).collect();
                let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
