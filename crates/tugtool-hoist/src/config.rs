//! Configuration for the import hoisting rule.
//!
//! Configuration is a plain serde value so the orchestration layer can embed
//! it in whatever settings file it reads. Unknown keys are rejected.
//!
//! ```
//! use tugtool_hoist::{HoistConfig, LineEnding};
//!
//! let config = HoistConfig::from_json(r#"{ "line_ending": "lf" }"#).unwrap();
//! assert_eq!(config.line_ending, LineEnding::Lf);
//! ```

use serde::{Deserialize, Serialize};

use tugtool_hoist_cst::Newline;

use crate::error::HoistResult;

/// Line terminator used for the blank line inserted after a newly created
/// file-scope directive block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    pub fn newline(&self) -> Newline {
        match self {
            LineEnding::CrLf => Newline::CrLf,
            LineEnding::Lf => Newline::Lf,
        }
    }
}

/// Options for [`crate::Hoister`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoistConfig {
    pub line_ending: LineEnding,
}

impl HoistConfig {
    /// Parse configuration from JSON. Missing keys take their defaults.
    pub fn from_json(text: &str) -> HoistResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_line_ending(self, line_ending: LineEnding) -> Self {
        Self { line_ending }
    }
}
