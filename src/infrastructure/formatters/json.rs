//! JSON manifest formatter
//!
//! Compact output is the default encoding: one line, no trailing newline,
//! keys in manifest order.

use crate::domain::entities::ManifestResult;
use crate::domain::ports::Formatter;
use crate::error::AssetMapResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Two-space indentation with a trailing newline
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, manifest: &ManifestResult) -> AssetMapResult<String> {
        if self.pretty {
            let mut out = serde_json::to_string_pretty(manifest)?;
            out.push('\n');
            Ok(out)
        } else {
            Ok(serde_json::to_string(manifest)?)
        }
    }
}
