use crate::geometry::{hex::GridGeometry, Size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file.
///
/// Falls back to the working directory when the platform has no config directory.
pub fn path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("hexboard")
        .join("config.toml")
}

/// Sizes the board is laid out from.
///
/// These normally come from the rendered bounds of a hex sprite and of the background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Bounds of a single hex.
    pub hex: Size,

    /// Bounds of the ground the board is laid on.
    pub ground: Size,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            hex: Size::new(1.0, 1.0),
            ground: Size::new(10.0, 10.0),
        }
    }
}

impl GridConfig {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        log::debug!("saving grid configuration to {}", path.display());
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("loading grid configuration from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        toml::from_str(&data).map_err(Into::into)
    }

    /// Geometry described by this configuration.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.hex, self.ground)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hexboard-{}-{}", std::process::id(), name))
            .join("config.toml")
    }

    #[test]
    fn test_parse() {
        let config: GridConfig = toml::from_str(
            r#"
            [hex]
            width = 0.5
            height = 0.75

            [ground]
            width = 12.0
            height = 9.0
            "#,
        )
        .unwrap();
        assert_eq!(config.hex, Size::new(0.5, 0.75));
        assert_eq!(config.ground, Size::new(12.0, 9.0));
        assert_eq!(config.geometry().grid_size().columns_in_full_row, 24);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let config = GridConfig {
            hex: Size::new(2.0, 3.0),
            ground: Size::new(40.0, 30.0),
        };
        config.save_to(&path).unwrap();
        let loaded = GridConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = GridConfig::load_from(scratch_path("missing")).unwrap_err();
        assert!(matches!(err, Error::CouldNotLoad(_)));
    }

    #[test]
    fn test_malformed() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "hex = 5").unwrap();
        let err = GridConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_default_geometry() {
        let dimensions = GridConfig::default().geometry().grid_size();
        assert_eq!(dimensions.columns_in_full_row, 10);
        assert_eq!(dimensions.row_count, 5);
    }
}
