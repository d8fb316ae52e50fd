use serde::Deserialize;
use std::collections::BTreeMap;

use crate::adapters::auth::cli_runner::run_cli;
use crate::core::errors::{PoseError, Result};
use crate::core::traits::token_source::{Session, TokenSource};

/// Token strategy that reads the CLI's client config
/// (`oc config view -o json`) and picks a per-cluster user token.
pub struct KubeconfigToken {
    cli: String,
}

impl KubeconfigToken {
    pub fn new(cli: impl Into<String>) -> Self {
        Self { cli: cli.into() }
    }
}

impl TokenSource for KubeconfigToken {
    fn acquire(&self) -> Result<Box<dyn Session>> {
        let stdout = run_cli(&self.cli, &["config", "view", "-o", "json"])?;
        let config: ClientConfig =
            serde_json::from_slice(&stdout).map_err(|e| PoseError::Auth {
                reason: format!("could not parse '{} config view' output: {e}", self.cli),
            })?;
        Ok(Box::new(config))
    }

    fn name(&self) -> &str {
        "kubeconfig"
    }
}

/// Partial structure of the CLI's client config.
#[derive(Debug, Deserialize)]
struct ClientConfig {
    #[serde(default)]
    users: Option<Vec<UserEntry>>,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    name: String,
    #[serde(default)]
    user: Option<BTreeMap<String, serde_json::Value>>,
}

/// Cluster label used to match user entries: the endpoint's host up to
/// the first `.` (`api.dev.example.com:8443` → `api`).
fn cluster_label(endpoint: &str) -> &str {
    endpoint.split('.').next().unwrap_or(endpoint)
}

impl Session for ClientConfig {
    fn token_for(&self, endpoint: &str) -> Result<String> {
        let label = cluster_label(endpoint);

        self.users
            .iter()
            .flatten()
            .filter(|entry| entry.name.contains(label))
            .find_map(|entry| {
                entry
                    .user
                    .as_ref()?
                    .get("token")?
                    .as_str()
                    .map(str::to_string)
            })
            .ok_or_else(|| PoseError::Auth {
                reason: format!("no user token for '{endpoint}' in client config"),
            })
    }
}
