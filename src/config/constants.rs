// src/config/constants.rs
//! System-wide configuration constants

/// Stroke preprocessing constants
pub mod preprocessing {
    /// Fixed sequence length both classifiers were trained on
    pub const DEFAULT_MAX_SEQ_LENGTH: usize = 150;
    /// Side length of the square capture canvas, in pixels
    pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;
    /// Fewest flattened points a sample may carry
    pub const DEFAULT_MIN_POINTS: usize = 5;
    /// `[nx, ny, ndx, ndy, pen_state]`
    pub const FEATURE_CHANNELS: usize = 5;

    pub const MIN_SEQ_LENGTH: usize = 2;
    pub const MIN_POINTS_FLOOR: usize = 2;

    /// Column index of each channel in a processed row
    pub const CHANNEL_X: usize = 0;
    pub const CHANNEL_Y: usize = 1;
    pub const CHANNEL_DX: usize = 2;
    pub const CHANNEL_DY: usize = 3;
    pub const CHANNEL_PEN: usize = 4;
}

/// Verdict constants
pub mod evaluation {
    /// Quality scores at or above this value pass
    pub const QUALITY_PASS_THRESHOLD: f32 = 0.5;
    /// Stroke count assumed for characters missing from the table
    pub const DEFAULT_STROKE_COUNT: u32 = 1;
    pub const PERCENTAGE_DECIMALS: i32 = 2;

    pub const MIN_STARS: u8 = 1;
    pub const MAX_STARS: u8 = 5;
    pub const PERCENT_PER_STAR: f64 = 20.0;
}

/// Classifier vocabulary constants
pub mod vocabulary {
    /// Class order of the deployed character model. `"Kii "` keeps its
    /// trailing space; it is a distinct class at training time.
    pub const DEFAULT_LABELS: [&str; 38] = [
        "A", "AEe", "Aa", "Ae", "E", "Ee", "G", "Gi", "Gii", "Gu", "Guu",
        "H", "I", "Ii", "K", "Ka", "Ke", "Kee", "Ki", "Kii", "Kii ", "Ku",
        "N", "O", "Oo", "Ou", "P", "Pu", "Puu", "R", "S", "T", "Th", "U",
        "Uu", "Y", "g", "k",
    ];
}

/// File system paths
pub mod paths {
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/stroke-eval/config.toml";
    pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
    pub const LOCAL_CONFIG_FILE: &str = "config/local.toml";

    pub const CHARACTER_MODEL: &str = "models/character_recognizer.onnx";
    pub const QUALITY_MODEL: &str = "models/quality_model.onnx";
    pub const CHARACTER_SCALER: &str = "models/character_scaler.json";
    pub const QUALITY_SCALER: &str = "models/quality_scaler.json";
    pub const CHARACTER_CONFIG: &str = "config/characters.json";

    pub const DATASET_RECORD_EXTENSION: &str = "json";
}

/// Environment override constants
pub mod env {
    pub const PREFIX: &str = "STROKE_EVAL_";
    /// Separates nested sections, since field names contain `_`
    pub const SECTION_SEPARATOR: &str = "__";
}
