use crate::error::TreeResult;
use serde::{Deserialize, Serialize};

/// Formatting options for source emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitConfig {
    /// One indentation unit
    #[serde(default = "default_indent")]
    pub indent: String,

    /// End `to_source` output with a newline
    #[serde(default)]
    pub trailing_newline: bool,
}

fn default_indent() -> String {
    "    ".to_string()
}

impl EmitConfig {
    pub fn from_json(json: &str) -> TreeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            trailing_newline: false,
        }
    }
}
