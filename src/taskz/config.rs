use crate::error::{Result, TaskzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Configuration for taskz, stored in the app directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// Name or absolute path of the task data file
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for TaskzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl TaskzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskzError::Io)?;
        let config: TaskzConfig =
            serde_json::from_str(&content).map_err(TaskzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskzError::Serialization)?;
        fs::write(config_path, content).map_err(TaskzError::Io)?;
        Ok(())
    }

    /// Resolve the configured data file against the app directory.
    /// Absolute paths are used as-is.
    pub fn data_path(&self, app_dir: &Path) -> PathBuf {
        let configured = Path::new(&self.data_file);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            app_dir.join(configured)
        }
    }
}
