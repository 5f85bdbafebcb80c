use serde::Deserialize;
use std::path::PathBuf;

use crate::input::CoordinateOrder;

fn default_verbose() -> bool {
    false
}

fn default_bounds() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Ring file to load when no input is given on the command line
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub order: CoordinateOrder,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_bounds")]
    pub bounds: bool,
}

impl FileConfig {
    /// Load the first config file that exists and parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("linkedgeo.toml"));
    paths.push(PathBuf::from(".linkedgeo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("linkedgeo").join("config.toml"));
        paths.push(config_dir.join("linkedgeo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".linkedgeo.toml"));
        paths.push(home.join(".config").join("linkedgeo").join("config.toml"));
    }

    paths
}
