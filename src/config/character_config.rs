// src/config/character_config.rs
//! Expected-character table: label → canonical glyph and stroke count

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::constants::evaluation::DEFAULT_STROKE_COUNT;
use crate::error::{EvalResult, IntoEvalError};

/// Metadata for one trainable character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterMeta {
    /// Canonical Sinhala glyph
    pub symbol: String,
    /// Expected number of strokes
    #[serde(rename = "strokes", alias = "stroke_count", alias = "strokeCount")]
    pub stroke_count: u32,
}

/// Read-only character table, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterConfig {
    entries: HashMap<String, CharacterMeta>,
}

impl CharacterConfig {
    pub fn new(entries: HashMap<String, CharacterMeta>) -> Self {
        Self { entries }
    }

    /// Parse the JSON table form `{ "<label>": { "symbol": .., "strokes": .. } }`
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).asset_err(path)?;
        let config = Self::from_json_str(&content).asset_err(path)?;
        info!(path = %path.display(), characters = config.len(), "loaded character configuration");
        Ok(config)
    }

    pub fn get(&self, label: &str) -> Option<&CharacterMeta> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbol for an identified label, or the label itself when absent
    pub fn symbol_for(&self, label: &str) -> String {
        self.entries
            .get(label)
            .map(|meta| meta.symbol.clone())
            .unwrap_or_else(|| label.to_string())
    }

    /// Metadata for an expected character, falling back to
    /// `{ symbol: label, stroke_count: 1 }` when the label is unknown
    pub fn expected_or_default(&self, label: &str) -> CharacterMeta {
        match self.entries.get(label) {
            Some(meta) => meta.clone(),
            None => {
                warn!(
                    expected_char = label,
                    default_stroke_count = DEFAULT_STROKE_COUNT,
                    "expected character missing from configuration, using defaults"
                );
                CharacterMeta {
                    symbol: label.to_string(),
                    stroke_count: DEFAULT_STROKE_COUNT,
                }
            }
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, CharacterMeta)> for CharacterConfig {
    fn from_iter<I: IntoIterator<Item = (String, CharacterMeta)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
