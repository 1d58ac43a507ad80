use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub const DEFAULT_CHECKER: &str = "mypy";

/// Result of running the external type checker over the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed { report: String },
}

/// An external checker command line. The source path is appended as the last argument.
#[derive(Debug, Clone)]
pub struct Checker {
    program: String,
    args: Vec<String>,
}

impl Checker {
    pub fn parse(command: &str) -> Result<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let Some(program) = words.next() else {
            bail!("checker command is empty");
        };
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn run(&self, source: &Path) -> Result<CheckOutcome> {
        debug!(checker = %self.program, source = %source.display(), "running type checker");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .output()
            .with_context(|| format!("failed to run checker `{}`", self.program))?;

        if output.status.success() {
            Ok(CheckOutcome::Passed)
        } else {
            Ok(CheckOutcome::Failed {
                report: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            program: DEFAULT_CHECKER.to_string(),
            args: Vec::new(),
        }
    }
}
