//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the docmind pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocmindConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for DocmindConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Positional date interpretation order. `DayFirst` reproduces the
    /// historical behavior where "03/04/2025" is day 3, month 4.
    pub date_order: DateOrder,

    /// Emit warnings for fields that could not be extracted.
    pub collect_warnings: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            collect_warnings: true,
        }
    }
}

/// Which side of an ambiguous positional date is the day.
///
/// The same `NN[./-]NN[./-]YYYY` shape serves both interpretations;
/// only the order of attempts differs. There is no day>12 heuristic,
/// so the order fully determines the result for ambiguous inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// Try DD.MM.YYYY before MM.DD.YYYY (default).
    #[default]
    DayFirst,
    /// Try MM.DD.YYYY before DD.MM.YYYY (US-locale opt-in).
    MonthFirst,
}

impl DocmindConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| crate::error::DocmindError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::DocmindError::Config(e.to_string()))?;
        Ok(std::fs::write(path, content)?)
    }
}
