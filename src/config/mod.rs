//! Configuration module for Classdesk.
//!
//! Structured configuration loading from environment variables, with an
//! optional `portal.toml` overlay and CLI overrides applied on top.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_SCHOOL_NAME: &str = "Sunrise Public School";
pub const DEFAULT_DATA_SEED: u64 = 7;
pub const DEFAULT_UI_SCALE: f32 = 1.0;

/// Which page the portal opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartView {
    SavedAssessments,
    SavedQuizzes,
    CreateAssessment,
    CreateAiAssessment,
    Library,
    Reports,
    PaperReview,
}

impl StartView {
    /// Stable name used by env vars, the CLI and the prefs file.
    pub fn name(&self) -> &'static str {
        match self {
            StartView::SavedAssessments => "saved-assessments",
            StartView::SavedQuizzes => "saved-quizzes",
            StartView::CreateAssessment => "create-assessment",
            StartView::CreateAiAssessment => "ai-assessment",
            StartView::Library => "library",
            StartView::Reports => "reports",
            StartView::PaperReview => "paper-review",
        }
    }
}

impl FromStr for StartView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saved-assessments" => Ok(StartView::SavedAssessments),
            "saved-quizzes" => Ok(StartView::SavedQuizzes),
            "create-assessment" => Ok(StartView::CreateAssessment),
            "ai-assessment" => Ok(StartView::CreateAiAssessment),
            "library" => Ok(StartView::Library),
            "reports" => Ok(StartView::Reports),
            "paper-review" => Ok(StartView::PaperReview),
            _ => anyhow::bail!(
                "Invalid view name: {}. Must be one of 'saved-assessments', 'saved-quizzes', \
                 'create-assessment', 'ai-assessment', 'library', 'reports', 'paper-review'",
                s
            ),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub school_name: String,
    pub data_seed: u64,
    pub ui_scale: f32,
    pub start_view: StartView,
}

/// Shape of the optional `portal.toml` overlay file.
#[derive(Debug, Default, Deserialize)]
pub struct PortalFileConfig {
    pub school_name: Option<String>,
    pub data_seed: Option<u64>,
    pub ui_scale: Option<f32>,
    pub start_view: Option<String>,
}

impl PortalConfig {
    /// Load configuration from environment variables, falling back to
    /// built-in defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let school_name = env::var("PORTAL_SCHOOL_NAME")
            .unwrap_or_else(|_| DEFAULT_SCHOOL_NAME.to_string());

        let data_seed = env::var("PORTAL_DATA_SEED")
            .unwrap_or_else(|_| DEFAULT_DATA_SEED.to_string())
            .parse::<u64>()
            .context("PORTAL_DATA_SEED must be an unsigned integer")?;

        let ui_scale = env::var("PORTAL_UI_SCALE")
            .unwrap_or_else(|_| DEFAULT_UI_SCALE.to_string())
            .parse::<f32>()
            .context("PORTAL_UI_SCALE must be a number")?;

        let start_view_str =
            env::var("PORTAL_START_VIEW").unwrap_or_else(|_| "saved-assessments".to_string());
        let start_view = StartView::from_str(&start_view_str)?;

        Ok(Self {
            school_name,
            data_seed,
            ui_scale,
            start_view,
        })
    }

    /// Merge a `portal.toml` overlay over the current values. A missing
    /// file is fine; a present but unreadable or malformed one is not.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let file: PortalFileConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(name) = file.school_name {
            self.school_name = name;
        }
        if let Some(seed) = file.data_seed {
            self.data_seed = seed;
        }
        if let Some(scale) = file.ui_scale {
            self.ui_scale = scale;
        }
        if let Some(view) = file.start_view {
            self.start_view = StartView::from_str(&view)
                .with_context(|| format!("Invalid start_view in {}", path.display()))?;
        }

        Ok(())
    }
}
