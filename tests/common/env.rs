//! Test environment for isolated assetmap runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the CLI reads; cleared so the host environment cannot leak in
const ASSETMAP_VARS: &[&str] = &[
    "ASSETMAP_ASSETS",
    "ASSETMAP_AUXILIARY_FILES",
    "ASSETMAP_CLEAN",
    "ASSETMAP_DEPENDENCIES",
    "ASSETMAP_PRETTY",
    "ASSETMAP_OUTPUT",
    "ASSETMAP_ROOT_PATH",
    "RUST_LOG",
];

/// Result of running an assetmap CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with a `dist/` build output folder.
pub struct TestEnv {
    pub project_root: TempDir,
    root: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dunce::canonicalize(project_root.path()).expect("Failed to canonicalize");
        std::fs::create_dir_all(root.join("dist")).expect("Failed to create dist");
        Self {
            project_root,
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetmap")),
        }
    }

    /// Canonical project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file relative to the project root, creating parents
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Create empty build outputs under `dist/`
    pub fn emit(&self, files: &[&str]) {
        for file in files {
            self.write(&format!("dist/{}", file), "");
        }
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run assetmap from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run assetmap from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(&self.root).args(args);
        for var in ASSETMAP_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetmap");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
