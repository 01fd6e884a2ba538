//! Standard / scientific mode

use serde::{Deserialize, Serialize};

/// Window size in standard mode
const STANDARD_SIZE: [f32; 2] = [330.0, 480.0];
/// Scientific mode adds one button column
const SCIENTIFIC_SIZE: [f32; 2] = [410.0, 480.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    #[default]
    Standard,
    Scientific,
}

impl CalcMode {
    pub const ALL: [CalcMode; 2] = [CalcMode::Standard, CalcMode::Scientific];

    pub fn label(self) -> &'static str {
        match self {
            CalcMode::Standard => "Standard",
            CalcMode::Scientific => "Scientific",
        }
    }

    /// Whether the √ / pow / ln column is visible.
    pub fn shows_scientific(self) -> bool {
        self == CalcMode::Scientific
    }

    pub fn window_size(self) -> [f32; 2] {
        match self {
            CalcMode::Standard => STANDARD_SIZE,
            CalcMode::Scientific => SCIENTIFIC_SIZE,
        }
    }
}
