//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{AssetMapError, AssetMapResult};

use super::types::ManifestOptions;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "assetmap.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load options and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetMapResult<(ManifestOptions, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let options: ManifestOptions = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetMapError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((options, warnings))
}

/// Load `assetmap.toml` from `dir` if present, defaults otherwise.
///
/// A present but malformed file is an error, not a silent fallback.
pub fn load_or_default(dir: &Path) -> AssetMapResult<(ManifestOptions, Vec<ConfigWarning>)> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_with_warnings(&candidate)
    } else {
        Ok((ManifestOptions::default(), Vec::new()))
    }
}

/// Apply environment variable overrides (ASSETMAP_* prefix)
pub fn with_env_overrides(options: ManifestOptions) -> ManifestOptions {
    apply_env(options, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env<F>(mut options: ManifestOptions, lookup: F) -> ManifestOptions
where
    F: Fn(&str) -> Option<String>,
{
    let flag = |name: &str| {
        let value = lookup(name)?;
        let parsed = parse_bool(&value);
        if parsed.is_none() {
            warn!(variable = name, value = %value, "ignoring non-boolean value");
        }
        parsed
    };

    if let Some(value) = flag("ASSETMAP_ASSETS") {
        options.assets = value;
    }
    if let Some(value) = flag("ASSETMAP_AUXILIARY_FILES") {
        options.auxiliary_files = value;
    }
    if let Some(value) = flag("ASSETMAP_CLEAN") {
        options.clean = value;
    }
    if let Some(value) = flag("ASSETMAP_DEPENDENCIES") {
        options.dependencies = value;
    }
    if let Some(value) = flag("ASSETMAP_PRETTY") {
        options.pretty = value;
    }
    if let Some(output) = lookup("ASSETMAP_OUTPUT").filter(|v| !v.is_empty()) {
        options.output = PathBuf::from(output);
    }
    if let Some(root) = lookup("ASSETMAP_ROOT_PATH") {
        options.root_path = if root.is_empty() {
            None
        } else {
            Some(PathBuf::from(root))
        };
    }

    options
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// First line assigning `key` (`key = ...`, optionally quoted)
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let quoted = format!("\"{}\"", key);
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            [key, quoted.as_str()].iter().any(|candidate| {
                line.strip_prefix(candidate)
                    .is_some_and(|rest| rest.trim_start().starts_with('='))
            })
        })
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "assets",
        "auxiliary_files",
        "clean",
        "dependencies",
        "output",
        "root_path",
        "pretty",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
