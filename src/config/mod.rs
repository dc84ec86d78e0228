use crate::errors::{AppError, AppResult};
use crate::models::City;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-city data file names, resolved against `Config::data_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityFiles {
    #[serde(default = "default_chicago")]
    pub chicago: String,
    #[serde(default = "default_new_york_city")]
    pub new_york_city: String,
    #[serde(default = "default_washington")]
    pub washington: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub files: CityFiles,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_trip_separator")]
    pub trip_separator: String,
}

fn default_chicago() -> String {
    "chicago.csv".to_string()
}
fn default_new_york_city() -> String {
    "new_york_city.csv".to_string()
}
fn default_washington() -> String {
    "washington.csv".to_string()
}
fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_trip_separator() -> String {
    " to ".to_string()
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: default_chicago(),
            new_york_city: default_new_york_city(),
            washington: default_washington(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: CityFiles::default(),
            page_size: default_page_size(),
            trip_separator: default_trip_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.bikeshare`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Data file backing `city`.
    pub fn source_for(&self, city: City) -> PathBuf {
        let file = match city {
            City::Chicago => &self.files.chicago,
            City::NewYorkCity => &self.files.new_york_city,
            City::Washington => &self.files.washington,
        };
        Path::new(&self.data_dir).join(file)
    }
}
