use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::error::ConfigError;
use crate::seed;
use crate::view::{SeverityFilter, SortOrder};

pub const CONFIG_PATH_ENV: &str = "INCIDENT_DASHBOARD_CONFIG";
pub const FILTER_ENV: &str = "INCIDENT_DASHBOARD_FILTER";
pub const SORT_ENV: &str = "INCIDENT_DASHBOARD_SORT";
pub const SEED_ENV: &str = "INCIDENT_DASHBOARD_SEED";

/// Startup settings for a dashboard session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_filter: SeverityFilter,
    pub default_sort: SortOrder,
    /// JSON seed file; the built-in mock incidents are used when unset.
    pub seed_path: Option<PathBuf>,
    pub form_open_on_start: bool,
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File named by `INCIDENT_DASHBOARD_CONFIG` (if any), then per-key
    /// environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(raw) = lookup(FILTER_ENV) {
            config.default_filter = raw.parse().map_err(|source| ConfigError::Value {
                key: FILTER_ENV.into(),
                source,
            })?;
        }
        if let Some(raw) = lookup(SORT_ENV) {
            config.default_sort = raw.parse().map_err(|source| ConfigError::Value {
                key: SORT_ENV.into(),
                source,
            })?;
        }
        if let Some(raw) = lookup(SEED_ENV) {
            config.seed_path = Some(PathBuf::from(raw));
        }

        debug!(?config, "dashboard config resolved");
        Ok(config)
    }

    /// Builds the session's dashboard from the configured seed and view.
    pub fn build_dashboard(&self) -> Result<Dashboard, ConfigError> {
        let incidents = match &self.seed_path {
            Some(path) => seed::load_seed(path)?,
            None => seed::mock_incidents(),
        };
        let mut dashboard = Dashboard::with_view(incidents, self.default_filter, self.default_sort);
        if self.form_open_on_start {
            dashboard.toggle_form();
        }
        Ok(dashboard)
    }
}
