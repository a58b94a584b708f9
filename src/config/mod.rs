//! Workspace configuration
//!
//! An optional `docs-authoring.yaml` at the workspace root tunes which
//! directories are skipped and where authoring templates live. A missing
//! file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error};

/// Configuration filename, looked up in the workspace root
pub const CONFIG_FILE: &str = "docs-authoring.yaml";

/// Default template directory, relative to the workspace root
pub const DEFAULT_TEMPLATE_DIR: &str = ".docs-authoring/templates";

fn default_exclude() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string()]
}

fn default_name_key() -> String {
    "title".to_string()
}

/// Template lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Directory scanned for templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Front-matter key holding a template's display name
    #[serde(default = "default_name_key")]
    pub name_key: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            directory: None,
            name_key: default_name_key(),
        }
    }
}

/// Contents of `docs-authoring.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Directory names skipped when walking the workspace
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub templates: TemplateConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            templates: TemplateConfig::default(),
        }
    }
}

impl DocsConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(Self::parse(content)?)
    }

    fn parse(content: &str) -> serde_yaml::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from a workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;

        Self::parse(&content)
            .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Template directory resolved against the workspace root
    pub fn template_dir(&self, workspace_root: &Path) -> PathBuf {
        match &self.templates.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => workspace_root.join(dir),
            None => workspace_root.join(DEFAULT_TEMPLATE_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = DocsConfig::load(temp.path()).unwrap();
        assert_eq!(config, DocsConfig::default());
        assert_eq!(config.exclude, vec![".git", "node_modules"]);
        assert_eq!(config.templates.name_key, "title");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = DocsConfig::from_yaml("templates:\n  directory: tpl\n").unwrap();
        assert_eq!(config.exclude, default_exclude());
        assert_eq!(config.templates.directory, Some(PathBuf::from("tpl")));
        assert_eq!(config.templates.name_key, "title");
    }

    #[test]
    fn test_exclude_override() {
        let config = DocsConfig::from_yaml("exclude: [build]\n").unwrap();
        assert_eq!(config.exclude, vec!["build"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "excludes: [a]\n").unwrap();
        assert!(matches!(
            DocsConfig::load(temp.path()),
            Err(DocsError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_template_dir_resolution() {
        let root = Path::new("/work");
        let mut config = DocsConfig::default();
        assert_eq!(
            config.template_dir(root),
            PathBuf::from("/work/.docs-authoring/templates")
        );
        config.templates.directory = Some(PathBuf::from("tpl"));
        assert_eq!(config.template_dir(root), PathBuf::from("/work/tpl"));
    }
}
