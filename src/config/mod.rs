//! Configuration loading for per-table view defaults
//!
//! Dashboards declare each table's defaults (sort spec, search keys, page
//! size) in YAML and hand the resulting [`ViewOptions`] to
//! [`TableView::with_options`](crate::view::TableView::with_options).

use crate::core::path::FieldPath;
use crate::core::sort::SortIntent;
use crate::view::{PageParams, ViewOptions};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Defaults for one table
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewConfig {
    /// Sort spec in `field:asc` / `field:desc` form
    pub sort: Option<String>,

    /// Dotted field paths eligible for searching
    pub search_keys: Vec<String>,

    /// Initial search query
    pub search_query: Option<String>,

    /// Rows per page
    pub page_limit: Option<usize>,
}

impl ViewConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Construction defaults for a view
    pub fn options(&self) -> ViewOptions {
        ViewOptions {
            default_sort: self
                .sort
                .as_deref()
                .map(SortIntent::parse)
                .unwrap_or_default(),
            search_keys: self
                .search_keys
                .iter()
                .map(|key| FieldPath::new(key.as_str()))
                .collect(),
            search_query: self.search_query.clone().unwrap_or_default(),
        }
    }

    /// First-page parameters honoring the configured page size
    pub fn page_params(&self) -> PageParams {
        match self.page_limit {
            Some(limit) => PageParams::new(1, limit),
            None => PageParams::default(),
        }
    }
}

/// Named view configurations for a whole dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TablesConfig {
    #[serde(default)]
    pub tables: HashMap<String, ViewConfig>,
}

impl TablesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Look up the configuration of one table
    pub fn view(&self, name: &str) -> Option<&ViewConfig> {
        self.tables.get(name)
    }
}
