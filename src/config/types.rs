//! Configuration type definitions

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ManifestSection;
use crate::domain::ports::FileSystem;
use crate::error::{AssetMapError, AssetMapResult};

use super::loader::{self, ConfigWarning};

/// Default manifest destination
pub const DEFAULT_OUTPUT: &str = "assetsMap.json";

/// User-facing manifest options
///
/// Keys are snake_case in TOML; the camelCase spellings used by JavaScript
/// bundler configs are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestOptions {
    /// Include the `assets` mapping
    #[serde(default = "default_true")]
    pub assets: bool,

    /// Include the `auxiliaryFiles` list
    #[serde(default, alias = "auxiliaryFiles")]
    pub auxiliary_files: bool,

    /// Remove stale files next to referenced files
    #[serde(default)]
    pub clean: bool,

    /// Include the `dependencies` mapping
    #[serde(default)]
    pub dependencies: bool,

    /// Manifest destination
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Base for manifest paths; empty means the compiler output directory
    #[serde(default, alias = "rootPath")]
    pub root_path: Option<PathBuf>,

    /// Indent the default JSON encoding
    #[serde(default)]
    pub pretty: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            assets: true,
            auxiliary_files: false,
            clean: false,
            dependencies: false,
            output: default_output(),
            root_path: None,
            pretty: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl ManifestOptions {
    /// Load options from a TOML file
    pub fn load(path: &Path) -> AssetMapResult<Self> {
        let (options, _warnings) = loader::load_with_warnings(path)?;
        Ok(options)
    }

    /// Load options and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetMapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ASSETMAP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply explicit overrides (CLI flags); unset fields keep their value
    pub fn with_overrides(mut self, overrides: &OptionOverrides) -> Self {
        if let Some(assets) = overrides.assets {
            self.assets = assets;
        }
        if let Some(auxiliary_files) = overrides.auxiliary_files {
            self.auxiliary_files = auxiliary_files;
        }
        if let Some(clean) = overrides.clean {
            self.clean = clean;
        }
        if let Some(dependencies) = overrides.dependencies {
            self.dependencies = dependencies;
        }
        if let Some(output) = &overrides.output {
            self.output = output.clone();
        }
        if let Some(root_path) = &overrides.root_path {
            self.root_path = Some(root_path.clone());
        }
        if let Some(pretty) = overrides.pretty {
            self.pretty = pretty;
        }
        self
    }

    /// Freeze the options against the compiler output directory.
    ///
    /// A configured `root_path` is canonicalized here, once. The output
    /// directory may not exist yet when a host applies the plugin; it is then
    /// kept as an absolute path and canonicalized when a build is emitted.
    pub fn finalize<FS: FileSystem>(
        &self,
        fs: &FS,
        output_dir: &Path,
    ) -> AssetMapResult<ManifestConfig> {
        let output_dir = match fs.canonicalize(output_dir) {
            Ok(path) => path,
            Err(err) if err.kind() == io::ErrorKind::NotFound => std::path::absolute(output_dir)
                .map_err(|source| AssetMapError::Canonicalize {
                    path: output_dir.to_path_buf(),
                    source,
                })?,
            Err(source) => {
                return Err(AssetMapError::Canonicalize {
                    path: output_dir.to_path_buf(),
                    source,
                })
            }
        };

        let root_path = match self.root_path.as_deref() {
            Some(root) if !root.as_os_str().is_empty() => Some(canonicalize(fs, root)?),
            _ => None,
        };

        Ok(ManifestConfig {
            assets: self.assets,
            auxiliary_files: self.auxiliary_files,
            clean: self.clean,
            dependencies: self.dependencies,
            output: self.output.clone(),
            pretty: self.pretty,
            output_dir,
            root_path,
        })
    }
}

/// Highest-priority option layer, filled from command line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub assets: Option<bool>,
    pub auxiliary_files: Option<bool>,
    pub clean: Option<bool>,
    pub dependencies: Option<bool>,
    pub output: Option<PathBuf>,
    pub root_path: Option<PathBuf>,
    pub pretty: Option<bool>,
}

/// Finalized, immutable manifest configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    assets: bool,
    auxiliary_files: bool,
    clean: bool,
    dependencies: bool,
    output: PathBuf,
    pretty: bool,
    output_dir: PathBuf,
    root_path: Option<PathBuf>,
}

impl ManifestConfig {
    pub fn clean(&self) -> bool {
        self.clean
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Absolute compiler output directory; canonical if it existed at finalize
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Canonical configured root; `None` means the output directory
    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    /// Canonical output directory and manifest root for an emitted build
    pub fn resolve_dirs<FS: FileSystem>(&self, fs: &FS) -> AssetMapResult<(PathBuf, PathBuf)> {
        let output_dir = canonicalize(fs, &self.output_dir)?;
        let root = match &self.root_path {
            Some(root) => root.clone(),
            None => output_dir.clone(),
        };
        Ok((output_dir, root))
    }

    /// Sections to strip before formatting
    pub fn disabled_sections(&self) -> Vec<ManifestSection> {
        [
            (self.assets, ManifestSection::Assets),
            (self.auxiliary_files, ManifestSection::AuxiliaryFiles),
            (self.dependencies, ManifestSection::Dependencies),
        ]
        .into_iter()
        .filter(|(enabled, _)| !enabled)
        .map(|(_, section)| section)
        .collect()
    }
}

fn canonicalize<FS: FileSystem>(fs: &FS, path: &Path) -> AssetMapResult<PathBuf> {
    fs.canonicalize(path)
        .map_err(|source| AssetMapError::Canonicalize {
            path: path.to_path_buf(),
            source,
        })
}
