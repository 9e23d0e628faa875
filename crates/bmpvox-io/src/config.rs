use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::IoError;
use crate::slices::Threshold;

/// Run settings loadable from TOML. Missing keys take the command-line
/// defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Folder holding the slice bitmaps.
    pub input: PathBuf,
    /// Base name for node files; the group index and `.txt` are appended.
    pub nodes: String,
    /// Base name for element files.
    pub indices: String,
    /// Optional group box file.
    pub boxes: PathBuf,
    pub threshold: i16,
    pub negate: bool,
    pub silent: bool,
    /// Grid buckets per axis as a multiple of the slice width.
    pub key_dim_scale: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            nodes: "nodes.txt".to_string(),
            indices: "indices.txt".to_string(),
            boxes: PathBuf::from("boxes.txt"),
            threshold: 128,
            negate: false,
            silent: false,
            key_dim_scale: 1.2,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, IoError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn threshold(&self) -> Threshold {
        Threshold {
            level: self.threshold,
            negate: self.negate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(RunConfig::from_toml_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn partial_toml_overrides_given_keys() {
        let cfg = RunConfig::from_toml_str(
            r#"
            input = "scans/femur"
            threshold = 90
            negate = true
            key_dim_scale = 2.0
        "#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("scans/femur"));
        assert_eq!(cfg.threshold().level, 90);
        assert!(cfg.threshold().negate);
        assert_eq!(cfg.key_dim_scale, 2.0);
        assert_eq!(cfg.nodes, "nodes.txt");
    }

    #[test]
    fn unknown_types_are_errors() {
        assert!(matches!(
            RunConfig::from_toml_str("threshold = \"high\""),
            Err(IoError::Config(_))
        ));
    }
}
