//! Test environment builder for isolated loadorder runs.
//!
//! `TestEnv` owns a temporary source tree and a temporary config home, so a
//! developer's own `~/.config/loadorder/config.toml` never leaks into tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running the loadorder binary
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

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    /// Paths listed under `domain` in the default text output
    pub fn section(&self, domain: &str) -> Vec<String> {
        let header = format!("{domain} (");
        self.stdout
            .lines()
            .skip_while(|line| !line.starts_with(&header))
            .skip(1)
            .take_while(|line| line.starts_with("  "))
            .map(|line| line.trim().to_string())
            .collect()
    }
}

/// Isolated source tree
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run loadorder from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .env_remove("LOADORDER_EXPAND_BULK")
            .env_remove("LOADORDER_RESPECT_GITIGNORE")
            .env_remove("LOADORDER_INCLUDE_HIDDEN")
            .env_remove("LOADORDER_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute loadorder");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file below the project root, creating parent directories
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write `loadorder/config.toml` in the isolated user config dir
    pub fn write_user_config(&self, content: &str) {
        write_file(
            &self.config_home.path().join("loadorder/config.toml"),
            content,
        );
    }

    /// Write a config file outside the project tree and return its path
    pub fn write_external_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_home.path().join(name);
        write_file(&path, content);
        path
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    directories: Vec<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source file relative to the project root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Create an (empty) directory relative to the project root
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.directories.push(relative.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let config_home = TempDir::new().expect("Failed to create config temp dir");

        for dir in &self.directories {
            std::fs::create_dir_all(project_root.path().join(dir))
                .expect("Failed to create directory");
        }
        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }

        TestEnv {
            project_root,
            config_home,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_loadorder")),
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
