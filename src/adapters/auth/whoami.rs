use crate::adapters::auth::cli_runner::run_cli;
use crate::core::errors::{PoseError, Result};
use crate::core::traits::token_source::{Session, TokenSource};

/// Token strategy that asks the CLI for the current session token
/// (`oc whoami -t`). The same token is presented to every backend.
pub struct WhoamiToken {
    cli: String,
}

impl WhoamiToken {
    pub fn new(cli: impl Into<String>) -> Self {
        Self { cli: cli.into() }
    }
}

impl TokenSource for WhoamiToken {
    fn acquire(&self) -> Result<Box<dyn Session>> {
        let stdout = run_cli(&self.cli, &["whoami", "-t"])?;
        let token = String::from_utf8_lossy(&stdout).trim().to_string();
        if token.is_empty() {
            return Err(PoseError::Auth {
                reason: format!("'{} whoami -t' printed no token", self.cli),
            });
        }
        Ok(Box::new(BearerSession(token)))
    }

    fn name(&self) -> &str {
        "whoami"
    }
}

/// A single bearer token valid for any endpoint.
struct BearerSession(String);

impl Session for BearerSession {
    fn token_for(&self, _endpoint: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}
