//! Emit Use Case
//!
//! Orchestrates one manifest emission.

use tracing::info;

use crate::config::ManifestConfig;
use crate::domain::entities::{BuildSnapshot, ManifestResult};
use crate::domain::ports::{FileSystem, Formatter};
use crate::domain::services::{ManifestBuilder, PathResolver, StaleFileCleaner};
use crate::error::{AssetMapError, AssetMapResult};

use super::result::EmitReport;

/// Emit use case - turns a build snapshot into a written manifest
pub struct EmitUseCase<FS, F>
where
    FS: FileSystem + Clone,
    F: Formatter,
{
    fs: FS,
    formatter: F,
}

impl<FS, F> EmitUseCase<FS, F>
where
    FS: FileSystem + Clone,
    F: Formatter,
{
    pub fn new(fs: FS, formatter: F) -> Self {
        Self { fs, formatter }
    }

    /// Build and format the manifest without touching the file system
    /// beyond path resolution.
    pub fn render(
        &self,
        config: &ManifestConfig,
        snapshot: &BuildSnapshot,
    ) -> AssetMapResult<(ManifestResult, String)> {
        let resolver = self.resolver(config)?;
        let mut manifest = ManifestBuilder::new(&resolver).build(snapshot)?;
        strip_disabled(config, &mut manifest);
        let text = self.formatter.format(&manifest)?;
        Ok((manifest, text))
    }

    /// Build the manifest, clean stale files if configured, then write it.
    ///
    /// Cleanup sees every section, including ones stripped from the output.
    pub fn execute(
        &self,
        config: &ManifestConfig,
        snapshot: &BuildSnapshot,
    ) -> AssetMapResult<EmitReport> {
        let resolver = self.resolver(config)?;
        let mut manifest = ManifestBuilder::new(&resolver).build(snapshot)?;

        let clean = if config.clean() {
            let cleaner = StaleFileCleaner::new(&resolver, self.fs.clone());
            Some(cleaner.clean(&manifest)?)
        } else {
            None
        };

        strip_disabled(config, &mut manifest);
        let text = self.formatter.format(&manifest)?;

        let output = config.output();
        self.fs
            .write(output, &text)
            .map_err(|source| AssetMapError::Write {
                path: output.to_path_buf(),
                source,
            })?;

        info!(
            output = %output.display(),
            entrypoints = manifest.entrypoints.len(),
            bytes = text.len(),
            "wrote asset manifest"
        );

        let mut report = EmitReport::new(output.to_path_buf(), &manifest, text.len());
        report.clean = clean;
        Ok(report)
    }

    fn resolver(&self, config: &ManifestConfig) -> AssetMapResult<PathResolver<FS>> {
        let (output_dir, root) = config.resolve_dirs(&self.fs)?;
        Ok(PathResolver::new(self.fs.clone(), output_dir, root))
    }
}

fn strip_disabled(config: &ManifestConfig, manifest: &mut ManifestResult) {
    for section in config.disabled_sections() {
        manifest.strip(section);
    }
}
