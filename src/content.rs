use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
    Cyan,
    Yellow,
}

impl Accent {
    pub fn heading(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-600 dark:text-blue-400",
            Accent::Purple => "text-purple-600 dark:text-purple-400",
            Accent::Green => "text-green-600 dark:text-green-400",
            Accent::Orange => "text-orange-600 dark:text-orange-400",
            Accent::Cyan => "text-cyan-600 dark:text-cyan-400",
            Accent::Yellow => "text-yellow-600 dark:text-yellow-400",
        }
    }

    /// Border and hover treatment for a skill chip.
    pub fn chip(self) -> &'static str {
        match self {
            Accent::Blue => "border-blue-200 dark:border-blue-800 group-hover:border-blue-300 dark:group-hover:border-blue-700 group-hover:bg-blue-50 dark:group-hover:bg-blue-900/20",
            Accent::Purple => "border-purple-200 dark:border-purple-800 group-hover:border-purple-300 dark:group-hover:border-purple-700 group-hover:bg-purple-50 dark:group-hover:bg-purple-900/20",
            Accent::Green => "border-green-200 dark:border-green-800 group-hover:border-green-300 dark:group-hover:border-green-700 group-hover:bg-green-50 dark:group-hover:bg-green-900/20",
            Accent::Orange => "border-orange-200 dark:border-orange-800 group-hover:border-orange-300 dark:group-hover:border-orange-700 group-hover:bg-orange-50 dark:group-hover:bg-orange-900/20",
            Accent::Cyan => "border-cyan-200 dark:border-cyan-800 group-hover:border-cyan-300 dark:group-hover:border-cyan-700 group-hover:bg-cyan-50 dark:group-hover:bg-cyan-900/20",
            Accent::Yellow => "border-yellow-200 dark:border-yellow-800 group-hover:border-yellow-300 dark:group-hover:border-yellow-700 group-hover:bg-yellow-50 dark:group-hover:bg-yellow-900/20",
        }
    }

    /// Outline badge colours.
    pub fn badge(self) -> &'static str {
        match self {
            Accent::Blue => "border-blue-200 text-blue-700 dark:border-blue-800 dark:text-blue-400",
            Accent::Purple => {
                "border-purple-200 text-purple-700 dark:border-purple-800 dark:text-purple-400"
            }
            Accent::Green => {
                "border-green-200 text-green-700 dark:border-green-800 dark:text-green-400"
            }
            Accent::Orange => {
                "border-orange-200 text-orange-700 dark:border-orange-800 dark:text-orange-400"
            }
            Accent::Cyan => "border-cyan-200 text-cyan-700 dark:border-cyan-800 dark:text-cyan-400",
            Accent::Yellow => {
                "border-yellow-200 text-yellow-700 dark:border-yellow-800 dark:text-yellow-400"
            }
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Accent::Blue => "bg-gradient-to-r from-blue-500 to-blue-600",
            Accent::Purple => "bg-gradient-to-r from-purple-500 to-purple-600",
            Accent::Green => "bg-gradient-to-r from-green-500 to-green-600",
            Accent::Orange => "bg-gradient-to-r from-orange-500 to-orange-600",
            Accent::Cyan => "bg-gradient-to-r from-cyan-500 to-cyan-600",
            Accent::Yellow => "bg-gradient-to-r from-yellow-500 to-yellow-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub availability: String,
    pub freelance: String,
    pub splash_caption: String,
    pub bio: Vec<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub resume_url: String,
    pub avatar: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Headline counter on the about section, e.g. "5+ Projects Completed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: i32,
    pub description: String,
    pub accent: Accent,
    pub icon: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub overlay_title: String,
    pub overlay_caption: String,
    pub summary: String,
    pub image: String,
    pub tags: Vec<Tag>,
    pub code_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub typewriter_skills: Vec<String>,
    pub skill_groups: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub featured_project: Project,
}

impl Portfolio {
    pub fn load(file: &str) -> Result<Self, ContentError> {
        let content = Assets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
        Self::parse(file, &content.data)
    }

    pub fn parse(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::Parse {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> i32 {
    let build_time_str = env!("BUILD_TIME");
    match DateTime::parse_from_rfc3339(build_time_str) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}
