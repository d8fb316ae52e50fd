use std::process::Command;

use crate::core::errors::{PoseError, Result};

/// Run the secret-store CLI with `args` and return its stdout.
///
/// A missing binary or a non-zero exit is an `Auth` error: both mean the
/// user has to fix their session before anything can be resolved.
pub fn run_cli(cli: &str, args: &[&str]) -> Result<Vec<u8>> {
    tracing::debug!(cli, ?args, "running secret store CLI");

    let output = Command::new(cli)
        .args(args)
        .output()
        .map_err(|e| PoseError::Auth {
            reason: format!("failed to run '{cli}': {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PoseError::Auth {
            reason: format!(
                "'{cli} {}' exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            ),
        });
    }

    Ok(output.stdout)
}
