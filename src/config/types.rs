use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Display limits for symbol names, lists and annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Symbol names longer than this are truncated.
    pub max_symbol_length: u32,
    /// Symbols shown per call graph node label.
    pub max_symbol_count: u32,
    /// Entries shown in caller/callee lists before "more...".
    pub max_list_count: u32,
    /// Digits after the decimal point for percentages.
    pub percent_precision: u32,
    /// Source lines shown around annotated lines.
    pub context_lines: u32,
    pub tab_width: u32,
    pub detect_cycles: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_symbol_length: 30,
            max_symbol_count: 10,
            max_list_count: 100,
            percent_precision: 2,
            context_lines: 3,
            tab_width: 8,
            detect_cycles: true,
        }
    }
}

/// Folders searched for source files referenced by debug info.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub dirs: Vec<PathBuf>,
}

/// Colors (`#rrggbb`) used for cost groups in graphs and maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub object: String,
    pub class: String,
    pub file: String,
    pub function: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            object: "#6b9bd1".to_string(),
            class: "#d1a36b".to_string(),
            file: "#8fd16b".to_string(),
            function: "#c76bd1".to_string(),
        }
    }
}
