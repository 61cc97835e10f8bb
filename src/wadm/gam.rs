//! # External Directory Tool Seam
//!
//! Every actual Workspace mutation goes through one external command-line
//! utility (GAM). This module is the only place that knows how to reach it.
//!
//! The [`Gam`] trait abstracts the tool the same way `DataStore` abstracts
//! persistence elsewhere in this codebase family:
//! - Production: [`GamProcess`] spawns the configured binary and captures
//!   its output.
//! - Testing: [`ScriptedGam`] replays canned outputs and records every
//!   invocation, so command logic is tested without a tenant.
//!
//! Callers never see a process handle; they hand over an argument list and
//! get back a [`ToolOutput`].

use crate::error::{Result, WadmError};
use std::process::Command;

/// Captured result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn ok(&self) -> bool {
        self.status == Some(0)
    }

    /// The stderr text, trimmed, falling back to a generic notice when the
    /// tool failed without saying anything.
    pub fn failure_text(&self) -> String {
        let text = self.stderr.trim();
        if text.is_empty() {
            format!("exit status {:?}", self.status)
        } else {
            text.to_string()
        }
    }
}

/// Abstract interface to the external directory tool.
pub trait Gam {
    /// Run the tool with the given arguments, capturing stdout and stderr.
    /// Returns `Err` only when the tool could not be spawned at all; a
    /// non-zero exit is a normal [`ToolOutput`].
    fn run(&mut self, args: &[String]) -> Result<ToolOutput>;
}

/// Production implementation: spawns the configured binary.
pub struct GamProcess {
    binary: String,
}

impl GamProcess {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Gam for GamProcess {
    fn run(&mut self, args: &[String]) -> Result<ToolOutput> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(WadmError::Io)?;
        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Test double: pops one canned output per invocation and keeps the full
/// argument list of every call. When the script runs dry it keeps answering
/// with a successful empty output.
pub struct ScriptedGam {
    outputs: Vec<ToolOutput>,
    pub calls: Vec<Vec<String>>,
}

impl ScriptedGam {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Queue a successful invocation that prints `stdout`.
    pub fn succeed_with(mut self, stdout: &str) -> Self {
        self.outputs.push(ToolOutput {
            status: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
        self
    }

    /// Queue a failed invocation that complains on stderr.
    pub fn fail_with(mut self, stderr: &str) -> Self {
        self.outputs.push(ToolOutput {
            status: Some(1),
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
        self
    }
}

impl Default for ScriptedGam {
    fn default() -> Self {
        Self::new()
    }
}

impl Gam for ScriptedGam {
    fn run(&mut self, args: &[String]) -> Result<ToolOutput> {
        self.calls.push(args.to_vec());
        if self.outputs.is_empty() {
            return Ok(ToolOutput {
                status: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            });
        }
        Ok(self.outputs.remove(0))
    }
}

/// Build an argument vector from string-ish pieces.
pub fn args<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_gam_replays_in_order_and_records_calls() {
        let mut gam = ScriptedGam::new().succeed_with("first").fail_with("boom");

        let first = gam.run(&args(["info", "user", "a@x.com"])).unwrap();
        assert!(first.ok());
        assert_eq!(first.stdout, "first");

        let second = gam.run(&args(["delete", "user", "a@x.com"])).unwrap();
        assert!(!second.ok());
        assert_eq!(second.failure_text(), "boom");

        assert_eq!(gam.calls.len(), 2);
        assert_eq!(gam.calls[0], args(["info", "user", "a@x.com"]));
    }

    #[test]
    fn failure_text_falls_back_to_status() {
        let out = ToolOutput {
            status: Some(3),
            stdout: String::new(),
            stderr: "  ".to_string(),
        };
        assert_eq!(out.failure_text(), "exit status Some(3)");
    }
}
