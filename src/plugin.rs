//! Host-facing plugin surface
//!
//! A bundler host constructs `AssetsMapPlugin` with user options, applies it
//! once its output directory is known, and then calls the returned hook after
//! every emitted build.

use std::path::Path;

use tracing::debug;

use crate::application::{EmitReport, EmitUseCase};
use crate::config::{ManifestConfig, ManifestOptions};
use crate::domain::entities::{BuildSnapshot, ManifestResult};
use crate::domain::ports::{FileSystem, Formatter};
use crate::error::AssetMapResult;
use crate::infrastructure::{JsonFormatter, LocalFs};

/// Name the hook registers under
pub const PLUGIN_NAME: &str = "AssetsMapPlugin";

/// Type-erased formatter held by the plugin
pub type BoxedFormatter = Box<dyn Fn(&ManifestResult) -> AssetMapResult<String>>;

/// Callback a host invokes once per completed, emitted build
pub trait AfterEmitHook {
    /// Identifier for host diagnostics
    fn name(&self) -> &str;

    fn after_emit(&self, snapshot: &BuildSnapshot) -> AssetMapResult<EmitReport>;
}

/// Unapplied plugin: options plus an optional custom formatter
pub struct AssetsMapPlugin {
    options: ManifestOptions,
    formatter: Option<BoxedFormatter>,
}

impl AssetsMapPlugin {
    pub fn new(options: ManifestOptions) -> Self {
        Self {
            options,
            formatter: None,
        }
    }

    /// Replace the default JSON encoding
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(move |m: &ManifestResult| formatter.format(m)));
        self
    }

    pub fn options(&self) -> &ManifestOptions {
        &self.options
    }

    /// Finalize configuration against the compiler output directory
    pub fn apply(self, output_dir: &Path) -> AssetMapResult<AppliedAssetsMapPlugin> {
        self.apply_with(LocalFs::new(), output_dir)
    }

    pub fn apply_with<FS: FileSystem + Clone>(
        self,
        fs: FS,
        output_dir: &Path,
    ) -> AssetMapResult<AppliedAssetsMapPlugin<FS>> {
        let config = self.options.finalize(&fs, output_dir)?;
        debug!(
            output_dir = %config.output_dir().display(),
            root = ?config.root_path(),
            "applied asset map plugin"
        );

        let formatter = self.formatter.unwrap_or_else(|| {
            let json = if config.pretty() {
                JsonFormatter::pretty()
            } else {
                JsonFormatter::compact()
            };
            Box::new(move |m: &ManifestResult| json.format(m)) as BoxedFormatter
        });

        Ok(AppliedAssetsMapPlugin {
            use_case: EmitUseCase::new(fs.clone(), formatter),
            fs,
            config,
        })
    }
}

/// Plugin bound to a finalized configuration
pub struct AppliedAssetsMapPlugin<FS: FileSystem + Clone = LocalFs> {
    use_case: EmitUseCase<FS, BoxedFormatter>,
    fs: FS,
    config: ManifestConfig,
}

impl<FS: FileSystem + Clone> AppliedAssetsMapPlugin<FS> {
    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Build and format without cleaning or writing
    pub fn render(&self, snapshot: &BuildSnapshot) -> AssetMapResult<String> {
        self.use_case
            .render(&self.config, snapshot)
            .map(|(_, text)| text)
    }
}

impl<FS: FileSystem + Clone> AfterEmitHook for AppliedAssetsMapPlugin<FS> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn after_emit(&self, snapshot: &BuildSnapshot) -> AssetMapResult<EmitReport> {
        let snapshot_dir = snapshot.output_path();
        let canonical = |path: &Path| self.fs.canonicalize(path).ok();
        if !snapshot_dir.as_os_str().is_empty()
            && canonical(snapshot_dir) != canonical(self.config.output_dir())
        {
            debug!(
                snapshot = %snapshot_dir.display(),
                applied = %self.config.output_dir().display(),
                "snapshot output path differs from applied output directory; using applied"
            );
        }
        self.use_case.execute(&self.config, snapshot)
    }
}
