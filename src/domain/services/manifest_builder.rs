//! Manifest builder
//!
//! Walks a build snapshot and collects entry point files, source assets and
//! auxiliary files into a `ManifestResult`. Every section is populated here;
//! disabled sections are stripped by the caller before formatting.

use tracing::debug;

use crate::domain::entities::{BuildSnapshot, EntryPoint, ManifestResult};
use crate::domain::ports::FileSystem;
use crate::error::{AssetMapError, AssetMapResult};

use super::path_resolver::PathResolver;

/// Builds manifests from snapshots
pub struct ManifestBuilder<'r, FS> {
    resolver: &'r PathResolver<FS>,
}

impl<'r, FS: FileSystem> ManifestBuilder<'r, FS> {
    pub fn new(resolver: &'r PathResolver<FS>) -> Self {
        Self { resolver }
    }

    pub fn build(&self, snapshot: &BuildSnapshot) -> AssetMapResult<ManifestResult> {
        let mut result = ManifestResult::new();

        for entrypoint in &snapshot.entrypoints {
            let files = self.entrypoint_files(snapshot, entrypoint)?;
            debug!(
                entrypoint = %entrypoint.name,
                files = files.len(),
                "collected entry point"
            );
            result.entrypoints.insert(entrypoint.name.clone(), files);

            if let Some(dependencies) = result.dependencies.as_mut() {
                dependencies.insert(entrypoint.name.clone(), entrypoint.depend_on.clone());
            }
        }

        for (file, info) in &snapshot.assets_info {
            let relative = self.resolver.resolve_emitted(file)?;
            match &info.source_filename {
                Some(source) => {
                    if let Some(assets) = result.assets.as_mut() {
                        assets.insert(source.clone(), relative);
                    }
                }
                None => {
                    if let Some(auxiliary) = result.auxiliary_files.as_mut() {
                        auxiliary.push(relative);
                    }
                }
            }
        }

        Ok(result)
    }

    /// Dependency files first (in declared order), then the entry point's own.
    fn entrypoint_files(
        &self,
        snapshot: &BuildSnapshot,
        entrypoint: &EntryPoint,
    ) -> AssetMapResult<Vec<String>> {
        let mut files = Vec::new();

        for name in &entrypoint.depend_on {
            let dependency =
                snapshot
                    .entrypoint(name)
                    .ok_or_else(|| AssetMapError::UnknownDependency {
                        entrypoint: entrypoint.name.clone(),
                        dependency: name.clone(),
                    })?;
            self.flatten_into(dependency, &mut files)?;
        }

        self.flatten_into(entrypoint, &mut files)?;
        Ok(files)
    }

    fn flatten_into(&self, entrypoint: &EntryPoint, files: &mut Vec<String>) -> AssetMapResult<()> {
        for file in entrypoint.files() {
            files.push(self.resolver.resolve_emitted(file)?);
        }
        Ok(())
    }
}
