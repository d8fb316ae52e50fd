use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{PoseError, Result};

/// File name of the per-user configuration, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = "pose-config.yml";

/// Top-level document read from `~/pose-config.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoseConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: Settings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl PoseConfig {
    /// Path of the configuration document inside `home_dir`.
    pub fn path_in(home_dir: &Path) -> PathBuf {
        home_dir.join(CONFIG_FILE_NAME)
    }

    /// Read and parse the configuration document at `path`.
    ///
    /// A missing or unreadable file is a `ConfigRead` error; anything that
    /// does not fit the expected shape is a `ConfigParse` error. An empty
    /// file is a valid, empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PoseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| PoseError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Take the configuration for `project_key`.
    ///
    /// A project with no entry resolves to an empty configuration rather
    /// than an error.
    pub fn into_project(mut self, project_key: &str) -> ProjectConfig {
        self.projects.remove(project_key).unwrap_or_default()
    }
}

/// Tool-wide knobs from the optional `settings:` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// How the bearer token for the secret store is obtained.
    pub auth: AuthStrategy,
    /// Secret-store CLI used by both auth strategies.
    pub cli: String,
    /// Downstream tool that receives the resolved environment.
    pub command: String,
    /// Optional bound on each secret-store request. `None` waits forever.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth: AuthStrategy::default(),
            cli: "oc".to_string(),
            command: "docker-compose".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// `oc whoami -t`: one session token for every backend.
    #[default]
    Whoami,
    /// `oc config view -o json`: per-cluster user tokens.
    Kubeconfig,
}

/// Configuration for a single project, selected by project key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Literal variables, written before any remote value.
    #[serde(default, deserialize_with = "scalar_map")]
    pub inline: BTreeMap<String, String>,
    /// Secret-store endpoints, queried in declared order.
    #[serde(default, alias = "openshift", deserialize_with = "null_as_default")]
    pub remote_backends: Vec<RemoteBackend>,
}

/// One secret-store endpoint and the rules for lifting its fields into
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBackend {
    /// `host[:port]`, without scheme.
    pub endpoint: String,
    #[serde(alias = "project")]
    pub namespace: String,
    #[serde(default, alias = "fieldselector", deserialize_with = "null_as_default")]
    pub field_selector: BTreeMap<String, String>,
    /// secret-object name → { variable name → field name }.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mapping: BTreeMap<String, BTreeMap<String, String>>,
}

/// Treat an explicit `null` (`inline:` with nothing after it) like a
/// missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inline values may be written as numbers or booleans (`PORT: 8080`);
/// they are exported as their YAML text.
fn scalar_map<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    let mut out = BTreeMap::new();
    for (name, value) in raw.unwrap_or_default() {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            other => {
                return Err(D::Error::custom(format!(
                    "inline value for '{name}' must be a scalar, got {other:?}"
                )));
            }
        };
        out.insert(name, text);
    }
    Ok(out)
}
