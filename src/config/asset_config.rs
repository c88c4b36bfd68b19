// src/config/asset_config.rs
//! Locations of the static assets loaded once at startup

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Paths to models, scaler parameters and lookup tables
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssetPaths {
    #[serde(default = "defaults::character_model")]
    pub character_model: PathBuf,

    #[serde(default = "defaults::quality_model")]
    pub quality_model: PathBuf,

    #[serde(default = "defaults::character_scaler")]
    pub character_scaler: PathBuf,

    #[serde(default = "defaults::quality_scaler")]
    pub quality_scaler: PathBuf,

    #[serde(default = "defaults::character_config")]
    pub character_config: PathBuf,

    /// Ordered label list; the built-in training order is used when unset
    #[serde(default)]
    pub vocabulary: Option<PathBuf>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            character_model: defaults::character_model(),
            quality_model: defaults::quality_model(),
            character_scaler: defaults::character_scaler(),
            quality_scaler: defaults::quality_scaler(),
            character_config: defaults::character_config(),
            vocabulary: None,
        }
    }
}

impl AssetPaths {
    /// Resolve every relative path against `base`
    pub fn rooted_at(&self, base: &std::path::Path) -> Self {
        let join = |p: &PathBuf| if p.is_absolute() { p.clone() } else { base.join(p) };
        Self {
            character_model: join(&self.character_model),
            quality_model: join(&self.quality_model),
            character_scaler: join(&self.character_scaler),
            quality_scaler: join(&self.quality_scaler),
            character_config: join(&self.character_config),
            vocabulary: self.vocabulary.as_ref().map(join),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_rooted_at_keeps_absolute_paths() {
        let mut assets = AssetPaths::default();
        assets.quality_model = PathBuf::from("/opt/models/q.onnx");
        assets.vocabulary = Some(PathBuf::from("labels.json"));

        let rooted = assets.rooted_at(Path::new("/srv/app"));
        assert_eq!(rooted.quality_model, PathBuf::from("/opt/models/q.onnx"));
        assert_eq!(rooted.character_scaler, Path::new("/srv/app").join(&assets.character_scaler));
        assert_eq!(rooted.vocabulary, Some(PathBuf::from("/srv/app/labels.json")));
    }
}
