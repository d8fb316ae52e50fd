use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use crate::core::errors::{PoseError, Result};
use crate::core::models::environment::EnvironmentMap;

/// Hands the resolved environment to the downstream tool.
pub struct Launcher {
    command: String,
}

impl Launcher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Run the downstream tool with `args`, inheriting stdin/stdout/stderr.
    ///
    /// The child sees this process's environment plus every entry of `env`.
    /// Returns the exit code to propagate, or `0` without spawning anything
    /// when the tool is not on `PATH`.
    pub fn launch(&self, env: EnvironmentMap, args: &[OsString]) -> Result<i32> {
        let program = match which::which(&self.command) {
            Ok(program) => program,
            Err(e) => {
                tracing::debug!(command = %self.command, error = %e, "downstream tool not found, nothing to run");
                return Ok(0);
            }
        };

        tracing::debug!(program = %program.display(), vars = env.len(), "launching downstream tool");

        let status = Command::new(&program)
            .args(args)
            .envs(env)
            .status()
            .map_err(|e| PoseError::Launch {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        Ok(exit_code(status))
    }
}

/// Exit code mirroring `status`. A child killed by a signal maps to the
/// shell convention `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
