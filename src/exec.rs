//! Synchronous subprocess capture.
//!
//! Every git call in this crate funnels through [`run`]. Failure never
//! escalates from here on its own: the caller gets either the captured
//! stdout or a structured [`ExecError`] and decides whether the failure is
//! actionable. Call sites that only care about "did it produce output"
//! collapse the error with `.ok()`.

use std::io;
use std::path::Path;
use std::process::Command;

use log::debug;

#[derive(Debug)]
pub enum ExecError {
    /// The process could not be started at all (binary missing, permission).
    Spawn { program: String, source: io::Error },
    /// The process ran but exited non-zero.
    Failed {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::Spawn { program, source } => {
                write!(f, "failed to run `{}`: {}", program, source)
            }
            ExecError::Failed {
                program,
                code,
                stderr,
                ..
            } => match code {
                Some(code) => write!(
                    f,
                    "`{}` exited with status {}: {}",
                    program,
                    code,
                    stderr.trim()
                ),
                None => write!(
                    f,
                    "`{}` was terminated by a signal: {}",
                    program,
                    stderr.trim()
                ),
            },
        }
    }
}

impl std::error::Error for ExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecError::Spawn { source, .. } => Some(source),
            ExecError::Failed { .. } => None,
        }
    }
}

/// Run a command to completion and capture its stdout.
///
/// Blocks until the child exits. Output is decoded lossily so a stray
/// non-UTF-8 byte in a path or commit message doesn't take the tool down.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String, ExecError> {
    debug!("exec: {} {}", program, args.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let output = cmd.output().map_err(|source| ExecError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ExecError::Failed {
            program: program.to_string(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command and report only whether it exited zero.
///
/// For commands that use the exit code as the answer, like
/// `git rev-parse --verify`.
pub fn succeeds(program: &str, args: &[&str], cwd: Option<&Path>) -> bool {
    debug!("exec (check): {} {}", program, args.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    cmd.output().map(|o| o.status.success()).unwrap_or(false)
}
