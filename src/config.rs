use chrono_tz::Tz;
use log::Level;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::scroll::sections::Section;

const SITE_JSON: &str = include_str!("../site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    ParseError(String),
    #[error("site configuration declares no sections")]
    NoSections,
    #[error("section at position {0} has an empty id")]
    EmptySectionId(usize),
    #[error("section id `{0}` is declared more than once")]
    DuplicateSection(String),
    #[error("visibility threshold {0} must be within (0, 1]")]
    InvalidThreshold(f64),
    #[error("scroll duration must be positive, got {0}ms")]
    InvalidDuration(f64),
    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),
}

/// Tuning for the scroll engine. Every field falls back to its default when
/// omitted from `site.json`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub visibility_threshold: f64,
    pub duration_ms: f64,
    pub header_offset: f64,
    pub indicator_margin: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            duration_ms: 220.0,
            header_offset: 0.0,
            indicator_margin: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub timezone: Tz,
    pub x: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub company: String,
    pub tagline: String,
    pub contact: Contact,
    pub sections: Vec<Section>,
    pub scroll: ScrollSettings,
}

#[derive(Deserialize)]
struct RawSection {
    id: String,
    label: String,
}

#[derive(Deserialize)]
struct RawContact {
    email: String,
    location: String,
    #[serde(default = "default_timezone")]
    timezone: String,
    x: String,
    github: String,
}

#[derive(Deserialize)]
struct RawSiteConfig {
    company: String,
    tagline: String,
    contact: RawContact,
    sections: Vec<RawSection>,
    #[serde(default)]
    scroll: ScrollSettings,
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

impl SiteConfig {
    /// Loads the configuration embedded at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        raw.validate()
    }

    /// Load the embedded configuration, or log why it was rejected and use
    /// the built-in layout.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Falling back to default site configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn first_section(&self) -> &Section {
        // validation guarantees at least one section
        &self.sections[0]
    }
}

impl RawSiteConfig {
    fn validate(self) -> Result<SiteConfig, ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }

        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(self.sections.len());
        for (index, raw) in self.sections.into_iter().enumerate() {
            let id = raw.id.trim().to_string();
            if id.is_empty() {
                return Err(ConfigError::EmptySectionId(index));
            }
            if !seen.insert(id.clone()) {
                return Err(ConfigError::DuplicateSection(id));
            }
            sections.push(Section::new(id, raw.label, index));
        }

        let scroll = self.scroll;
        if !(scroll.visibility_threshold > 0.0 && scroll.visibility_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(scroll.visibility_threshold));
        }
        if !(scroll.duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(scroll.duration_ms));
        }

        let timezone = self
            .contact
            .timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.contact.timezone.clone()))?;

        Ok(SiteConfig {
            company: self.company,
            tagline: self.tagline,
            contact: Contact {
                email: self.contact.email,
                location: self.contact.location,
                timezone,
                x: self.contact.x,
                github: self.contact.github,
            },
            sections,
            scroll,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let sections = [
            ("home", "Home"),
            ("about", "About"),
            ("mission", "Mission"),
            ("ethos", "Ethos"),
            ("promise", "Promise"),
            ("connect", "Connect"),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (id, label))| Section::new(id, label, index))
        .collect();

        Self {
            company: "Unsigned Research".to_string(),
            tagline: "Science-backed Proprietary Trading".to_string(),
            contact: Contact {
                email: "enquiries@unsigned-research.com".to_string(),
                location: "London, United Kingdom".to_string(),
                timezone: chrono_tz::Europe::London,
                x: "https://x.com/unsignedre".to_string(),
                github: "https://github.com/Unsigned-Research".to_string(),
            },
            sections,
            scroll: ScrollSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "company": "Acme",
        "tagline": "Trading",
        "contact": { "email": "a@b.c", "location": "Here", "x": "x", "github": "gh" },
        "sections": [ { "id": "home", "label": "Home" }, { "id": "about", "label": "About" } ]
    }"#;

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.sections.len(), 6);
        assert_eq!(config.first_section().id, "home");
        assert_eq!(config.scroll.header_offset, 0.0);
        assert_eq!(config.contact.timezone, chrono_tz::Europe::London);
    }

    #[test]
    fn embedded_config_matches_default_layout() {
        let loaded = SiteConfig::load().unwrap();
        assert_eq!(loaded.sections, SiteConfig::default().sections);
    }

    #[test]
    fn order_index_follows_declaration_order() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        let indices: Vec<_> = config.sections.iter().map(|s| s.order_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn omitted_scroll_settings_use_defaults() {
        let config = SiteConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.scroll, ScrollSettings::default());
        assert_eq!(config.contact.timezone, chrono_tz::Europe::London);
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let json = MINIMAL.replace(r#""id": "about""#, r#""id": "home""#);
        assert_eq!(
            SiteConfig::from_json(&json),
            Err(ConfigError::DuplicateSection("home".to_string()))
        );
    }

    #[test]
    fn rejects_empty_section_list() {
        let json = r#"{
            "company": "Acme", "tagline": "t",
            "contact": { "email": "a", "location": "b", "x": "x", "github": "g" },
            "sections": []
        }"#;
        assert_eq!(SiteConfig::from_json(json), Err(ConfigError::NoSections));
    }

    #[test]
    fn rejects_blank_section_id() {
        let json = MINIMAL.replace(r#""id": "about""#, r#""id": "  ""#);
        assert_eq!(SiteConfig::from_json(&json), Err(ConfigError::EmptySectionId(1)));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let json = MINIMAL.replace(
            r#""sections""#,
            r#""scroll": { "visibility_threshold": 1.5 }, "sections""#,
        );
        assert_eq!(SiteConfig::from_json(&json), Err(ConfigError::InvalidThreshold(1.5)));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let json = MINIMAL.replace(r#""x": "x""#, r#""timezone": "Mars/Olympus", "x": "x""#);
        assert_eq!(
            SiteConfig::from_json(&json),
            Err(ConfigError::UnknownTimezone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
