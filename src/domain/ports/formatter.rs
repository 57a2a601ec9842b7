//! Formatter port - turns a manifest into the text written to disk

use crate::domain::entities::ManifestResult;
use crate::error::AssetMapResult;

/// Serializes a finished manifest
///
/// Any `Fn(&ManifestResult) -> AssetMapResult<String>` is a formatter, so
/// callers can plug in a closure instead of a dedicated type.
pub trait Formatter {
    fn format(&self, manifest: &ManifestResult) -> AssetMapResult<String>;
}

impl<F> Formatter for F
where
    F: Fn(&ManifestResult) -> AssetMapResult<String>,
{
    fn format(&self, manifest: &ManifestResult) -> AssetMapResult<String> {
        self(manifest)
    }
}
