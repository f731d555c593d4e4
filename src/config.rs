//! Parser configuration.
//!
//! Every field has a default, so a YAML file only lists what it changes:
//!
//! ```yaml
//! untitled_prefix: Chart
//! allowed_chart_types: [line, scatter]
//! cache_fallback: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Chart kinds rendered when the configuration does not restrict them.
pub const DEFAULT_CHART_TYPES: [&str; 6] = ["line", "bar", "pie", "scatter", "area", "doughnut"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Untitled charts are named `"{untitled_prefix} {n}"`
    pub untitled_prefix: String,
    /// First positional X value of series without X data
    pub index_base: i64,
    /// Chart kinds that may be rendered (`line`, `bar`, `pie`, ...)
    pub allowed_chart_types: Vec<String>,
    /// Sheet holding the input table
    pub input_sheet: String,
    /// Sheet holding the output table
    pub output_sheet: String,
    /// Use the chart's cached points when a reference cannot be resolved
    pub cache_fallback: bool,
    /// Translate Excel number formats to d3 tick formats
    pub translate_number_formats: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            untitled_prefix: "Untitled".to_string(),
            index_base: 1,
            allowed_chart_types: DEFAULT_CHART_TYPES.iter().map(|s| s.to_string()).collect(),
            input_sheet: "viktor-input-sheet".to_string(),
            output_sheet: "viktor-output-sheet".to_string(),
            cache_fallback: true,
            translate_number_formats: true,
        }
    }
}

impl ParserConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Whether charts of `kind` may be rendered.
    pub fn allows(&self, kind: &str) -> bool {
        self.allowed_chart_types.iter().any(|k| k.eq_ignore_ascii_case(kind))
    }

    fn validate(&self) -> Result<()> {
        if self.untitled_prefix.trim().is_empty() {
            return Err(Error::Config("untitled_prefix must not be empty".to_string()));
        }
        if self.input_sheet == self.output_sheet {
            return Err(Error::Config(format!(
                "input_sheet and output_sheet are both '{}'",
                self.input_sheet
            )));
        }
        Ok(())
    }
}
